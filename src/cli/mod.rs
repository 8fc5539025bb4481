//! Terminal front end for the order form.

pub mod core;
pub mod output;
pub mod render;
mod shell;
pub mod wizard;

pub use shell::{run_cli, SCRIPT_ENV};
