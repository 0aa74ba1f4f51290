//! `minspread scan --url ... --key N --spread A,B` – ad-hoc scan.

use anyhow::{anyhow, Context, Result};
use minspread_core::config::{AppConfig, SourceEntry};
use minspread_core::{CurlFetcher, RowRule, SpreadScan};

/// Validate `entry` and run one scan with the configured HTTP settings.
/// Configuration errors are returned; fetch/parse failures give `Ok(None)`.
pub fn scan_entry(cfg: &AppConfig, entry: &SourceEntry) -> Result<Option<String>> {
    let spread_cfg = entry
        .to_spread_config()
        .with_context(|| format!("invalid source '{}'", entry.name))?;
    tracing::info!("scanning {} ({})", entry.name, spread_cfg.url());
    let scan = SpreadScan::with_fetcher(spread_cfg, CurlFetcher::from_config(&cfg.http));
    Ok(scan.min_spread_key())
}

pub fn run_scan(cfg: &AppConfig, url: &str, key: &str, spread: &str, rule: RowRule) -> Result<()> {
    let entry = SourceEntry::from_args("scan", url, key, spread, rule);
    let key = scan_entry(cfg, &entry)?.ok_or_else(|| anyhow!("no result for {}", url))?;
    println!("{}", key);
    Ok(())
}
