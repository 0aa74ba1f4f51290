//! `minspread sources` – list named sources.

use minspread_core::config::AppConfig;

pub fn run_sources(cfg: &AppConfig) {
    for name in cfg.source_names() {
        if let Some(entry) = cfg.find_source(&name) {
            println!("{:<12}  {}", entry.name, entry.url);
        }
    }
}
