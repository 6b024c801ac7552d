//! BizScope Desktop — Dioxus-powered business directory browser.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod filters;
mod state;

use app::App;
use state::AppState;

/// Config loaded before Dioxus launches; `state::CORE` takes it on first read.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bizscope=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Load config before launch; CORE takes it from the Mutex on first read
    let initial_state = AppState::from_cwd();
    if let Ok(mut slot) = INITIAL_STATE.lock() {
        *slot = Some(initial_state);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((250, 250, 252, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("BizScope")
                            .with_inner_size(LogicalSize::new(1100.0, 760.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
