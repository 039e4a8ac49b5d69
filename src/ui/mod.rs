//! CLI output helpers
//!
//! Spinners and styled step lines with automatic fallback to plain output
//! in CI/non-interactive environments.

mod context;
mod output;
mod progress;

pub use context::UiContext;
pub use output::{section, step_error, step_ok, step_ok_detail, step_warn};
pub use progress::TaskSpinner;
