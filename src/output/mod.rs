//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod resources;
mod roles;
mod tokens;

pub use common::{escape_csv, print_json, print_yaml};
pub use resources::{output_related, output_resources};
pub use roles::output_roles;
pub use tokens::output_tokens;
