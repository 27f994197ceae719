//! UI utilities for terminal output

mod spinner;

pub use spinner::{create_spinner, finish_spinner, finish_spinner_with_status};
