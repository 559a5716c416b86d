//! Compare two benchmark runs and print the verdict
//!
//! ```text
//! cargo run -p perfdelta-bca --example compare_runs -- 101,99,100,102 91,90,92,89
//! RUST_LOG=perfdelta_bca=debug cargo run -p perfdelta-bca --example compare_runs
//! ```
//!
//! Without arguments a built-in pair of runs is compared.

use anyhow::{Context, Result};
use perfdelta_bca::{BcaBootstrap, Change, DEFAULT_CONFIDENCE};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn parse_samples(arg: &str) -> Result<Vec<f64>> {
    arg.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().with_context(|| format!("invalid measurement {s:?}")))
        .collect()
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (control, variant) = match args.as_slice() {
        [control, variant] => (parse_samples(control)?, parse_samples(variant)?),
        [] => (
            vec![1_210.0, 1_195.0, 1_230.0, 1_205.0, 1_190.0, 1_250.0, 1_215.0, 1_200.0],
            vec![1_050.0, 1_070.0, 1_040.0, 1_065.0, 1_055.0, 1_100.0, 1_045.0, 1_060.0],
        ),
        _ => anyhow::bail!("usage: compare_runs [CONTROL VARIANT] (comma-separated ns/op)"),
    };

    info!(
        control = control.len(),
        variant = variant.len(),
        "comparing runs"
    );

    let engine = BcaBootstrap::new();
    let report = engine.try_compare(&control, &variant)?;

    println!("confidence: {:.1}%", DEFAULT_CONFIDENCE * 100.0);
    println!("control:    {:.1} ns/op", report.control_center);
    println!("variant:    {:.1} ns/op", report.variant_center);
    println!("report:     {report}");
    println!("verdict:    {}", Change::from_report(&report));

    Ok(())
}
