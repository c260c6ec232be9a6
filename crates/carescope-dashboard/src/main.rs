//! Entry point for the CareScope dashboard.
//!
//! Loads the hospital dataset from disk, then launches the Dioxus desktop
//! shell around it. A dataset that fails to load aborts startup; there is
//! nothing useful to show without one.
//!
//! Usage:
//!   carescope-dashboard
//!   carescope-dashboard --dataset hospitals.csv --theme light

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use carescope_core::Dataset;
use carescope_dashboard::components::App;
use carescope_dashboard::state::DashboardState;
use carescope_dashboard::theme::{self, Theme};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the dataset loaded before launch.
static DATASET: OnceLock<Dataset> = OnceLock::new();

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "carescope-dashboard")]
#[command(about = "Interactive dashboard for hospital quality scores")]
struct Args {
    /// Path to the hospital CSV dataset
    #[arg(short, long, default_value = "data.csv")]
    dataset: PathBuf,

    /// Initial theme (dark or light)
    #[arg(short, long, default_value = "dark")]
    theme: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    let dataset = carescope_data::load_dataset(&args.dataset)
        .with_context(|| format!("failed to load dataset from {}", args.dataset.display()))?;
    DATASET.set(dataset).ok();

    // Note: the theme is applied inside RootApp; writing CURRENT_THEME
    // requires a Dioxus runtime, which does not exist yet.
    theme::set_initial_theme(Theme::from_name(&args.theme));

    // Launch the desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("CareScope - Hospital Dashboard")
                        .with_inner_size(LogicalSize::new(1400, 900))
                        .with_resizable(true),
                )
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component: seeds the dashboard state from the preloaded dataset.
#[component]
fn RootApp() -> Element {
    // Apply the command-line theme now that the runtime is up
    use_hook(theme::apply_initial_theme);

    let state = use_signal(|| {
        let dataset = DATASET.get().cloned().unwrap_or_default();
        DashboardState::new(dataset)
    });

    rsx! {
        App { state }
    }
}
