//! CLI command handlers. Each command is in its own file.

mod config_path;
mod run;
mod scan;
mod sources;

pub use config_path::run_config_path;
pub use run::run_named;
pub use scan::run_scan;
pub use sources::run_sources;

#[cfg(test)]
pub use scan::scan_entry;
