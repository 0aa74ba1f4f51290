//! `minspread run <name>` – scan a configured or built-in source.

use anyhow::{anyhow, Context, Result};
use minspread_core::config::AppConfig;

use super::scan::scan_entry;

pub fn run_named(cfg: &AppConfig, name: &str) -> Result<()> {
    let entry = cfg.find_source(name).with_context(|| {
        format!(
            "unknown source '{}' (available: {})",
            name,
            cfg.source_names().join(", ")
        )
    })?;
    let key = scan_entry(cfg, &entry)?.ok_or_else(|| anyhow!("no result for source '{}'", name))?;
    println!("{}", key);
    Ok(())
}
