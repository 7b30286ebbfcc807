//! Drives a [`ListContainer`] the way a segmented tab bar would.
//!
//! Run with `RUST_LOG=segmented_list=trace` to see every progress tick.
mod pages;
mod tab_bar;

use std::sync::Arc;

use segmented_list::{
    ContainerError, ListContainer, ListContainerArgs,
    px::{Px, PxRect},
};
use tracing::info;

use crate::{pages::DemoHost, tab_bar::SimulatedTabBar};

fn main() -> Result<(), ContainerError> {
    init_tracing();

    let host = Arc::new(DemoHost::new(["Feed", "Videos", "Profile", "Settings"]));
    let mut container = ListContainer::new(
        ListContainerArgs::default()
            .default_selected_index(1)
            .appear_threshold(0.5),
        &host,
    )?;
    let mut tab_bar = SimulatedTabBar::new(host.page_count(), container.default_selected_index());

    container.on_bounds_changed(PxRect::new(Px(0), Px(0), Px(390), Px(700)));

    info!("swipe from Videos to Profile");
    tab_bar.drag_to(2, 8, &mut container);

    info!("keep swiping to Settings");
    tab_bar.drag_to(3, 8, &mut container);

    info!("tap Feed");
    tab_bar.click(0, &mut container);

    info!("rotate the device");
    container.on_bounds_changed(PxRect::new(Px(0), Px(0), Px(844), Px(390)));

    info!("tap Settings");
    tab_bar.click(3, &mut container);

    info!("drop the Settings tab and reload");
    host.set_page_count(3);
    tab_bar.set_item_count(3);
    container.reload_data();

    info!(
        current = container.current_index(),
        materialized = ?container.registry().indices(),
        "done"
    );
    host.report();
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,segmented_list=debug,segmented_list_demo=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
