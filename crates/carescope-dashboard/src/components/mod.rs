//! UI components for the CareScope dashboard.

mod app;
mod chart_panel;
mod charts;
mod filter_panel;
mod hospital_list;

pub use app::*;
pub use chart_panel::*;
pub use charts::*;
pub use filter_panel::*;
pub use hospital_list::*;
