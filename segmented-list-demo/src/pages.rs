use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use parking_lot::Mutex;
use segmented_list::{ListContainerDelegate, ListContent, View};
use tracing::info;

#[derive(Debug, Default, Clone, Copy)]
struct Visits {
    appeared: usize,
    disappeared: usize,
}

type VisitLog = Arc<Mutex<Vec<Visits>>>;

/// A plain view used directly as a page; it ignores visibility changes.
struct StaticList {
    view: View,
}

impl ListContent for StaticList {
    fn list_view(&self) -> View {
        self.view.clone()
    }
}

/// A controller-backed page that starts and pauses playback with visibility.
struct PlaybackController {
    index: usize,
    title: &'static str,
    root: View,
    visits: VisitLog,
}

impl ListContent for PlaybackController {
    fn list_view(&self) -> View {
        self.root.clone()
    }

    fn list_did_appear(&self) {
        if let Some(visits) = self.visits.lock().get_mut(self.index) {
            visits.appeared += 1;
        }
        info!(title = self.title, "resume playback");
    }

    fn list_did_disappear(&self) {
        if let Some(visits) = self.visits.lock().get_mut(self.index) {
            visits.disappeared += 1;
        }
        info!(title = self.title, "pause playback");
    }
}

pub struct DemoHost {
    titles: Vec<&'static str>,
    page_count: AtomicUsize,
    built: AtomicUsize,
    visits: VisitLog,
}

impl DemoHost {
    pub fn new<const N: usize>(titles: [&'static str; N]) -> Self {
        Self {
            titles: titles.to_vec(),
            page_count: AtomicUsize::new(N),
            built: AtomicUsize::new(0),
            visits: Arc::new(Mutex::new(vec![Visits::default(); N])),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count.load(Ordering::Relaxed)
    }

    pub fn set_page_count(&self, count: usize) {
        self.page_count
            .store(count.min(self.titles.len()), Ordering::Relaxed);
    }

    pub fn report(&self) {
        info!(built = self.built.load(Ordering::Relaxed), "pages built");
        for (title, visits) in self.titles.iter().zip(self.visits.lock().iter()) {
            info!(
                title,
                appeared = visits.appeared,
                disappeared = visits.disappeared,
                "visibility"
            );
        }
    }
}

impl ListContainerDelegate for DemoHost {
    fn number_of_lists(&self) -> usize {
        self.page_count()
    }

    fn init_list(&self, index: usize) -> Box<dyn ListContent> {
        self.built.fetch_add(1, Ordering::Relaxed);
        let title = self.titles.get(index).copied().unwrap_or("Untitled");
        info!(index, title, "building page");
        if index % 2 == 1 {
            Box::new(PlaybackController {
                index,
                title,
                root: View::new(),
                visits: self.visits.clone(),
            })
        } else {
            Box::new(StaticList { view: View::new() })
        }
    }
}
