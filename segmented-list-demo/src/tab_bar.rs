use segmented_list::{ListContainer, ScrollProgress};
use tracing::{info, warn};

/// Stand-in for a segmented control: reports drags as progress ticks and taps
/// as clicks.
pub struct SimulatedTabBar {
    item_count: usize,
    selected_index: usize,
}

impl SimulatedTabBar {
    pub fn new(item_count: usize, selected_index: usize) -> Self {
        Self {
            item_count,
            selected_index,
        }
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if self.selected_index >= item_count {
            self.selected_index = 0;
        }
    }

    /// Drags to an adjacent tab in `steps` progress ticks, then selects it.
    pub fn drag_to(&mut self, target: usize, steps: usize, container: &mut ListContainer) {
        let selected = self.selected_index;
        if target >= self.item_count || target.abs_diff(selected) != 1 || steps == 0 {
            warn!(selected, target, "only drags to an adjacent tab are simulated");
            return;
        }
        let (left, right) = (selected.min(target), selected.max(target));
        for step in 1..=steps {
            let travelled = step as f32 / steps as f32;
            let percent = if target > selected {
                travelled
            } else {
                1.0 - travelled
            };
            container.on_scroll_progress(ScrollProgress::new(left, right, percent, selected));
        }
        self.selected_index = target;
        info!(selected = target, "drag settled");
    }

    pub fn click(&mut self, index: usize, container: &mut ListContainer) {
        if index >= self.item_count {
            warn!(index, item_count = self.item_count, "no such tab");
            return;
        }
        self.selected_index = index;
        container.on_item_clicked(index);
    }
}
