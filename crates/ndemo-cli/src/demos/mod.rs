//! One module per demonstration. Every demo writes a labelled report to the
//! given writer and returns the first error it cannot recover from.

pub mod arithmetic;
pub mod basics;
pub mod combine;
pub mod indexing;
pub mod scores;
pub mod speedup;

use anyhow::Result;
use std::io::Write;

use crate::config::DemoConfig;

/// Demos run by `all`. `speedup` is left out because of its default size.
pub const ALL_DEMOS: [&str; 5] = ["basics", "indexing", "arithmetic", "scores", "combine"];

pub fn run_demo<W: Write>(name: &str, out: &mut W, config: &DemoConfig) -> Result<()> {
    log::info!("[ndemo] Running demo: {}", name);
    match name {
        "basics" => basics::run(out, config),
        "indexing" => indexing::run(out, config),
        "arithmetic" => arithmetic::run(out, config),
        "scores" => scores::run(out, config),
        "combine" => combine::run(out, config),
        "speedup" => speedup::run(out, config),
        "all" => run_all(out, config),
        other => anyhow::bail!("Unknown demo: {}", other),
    }
}

pub fn run_all<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    for (idx, name) in ALL_DEMOS.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== {} ===", name)?;
        run_demo(name, out, config)?;
    }
    Ok(())
}
