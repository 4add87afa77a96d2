// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{resolve_config, Args, Command, OutputFormat};
pub use output::{format_alerts, format_json, format_method_details, print_export_summary, print_methods, TerminalView};
