//! Count command implementation

use super::{build_counter, read_input};
use crate::cli::CountArgs;
use gcount_core::{Result, Strategy};
use std::io::Write;

pub fn run(args: &CountArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let strategy = Strategy::from(args.strategy);
    let counter = build_counter(&args.marks)?.with_strategy(strategy);
    log::debug!(
        "Counting {} bytes with {} strategy over '{}' marks",
        text.len(),
        strategy,
        counter.classifier().name()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.clusters {
        for cluster in counter.clusters(&text) {
            let code_points: Vec<String> =
                cluster.chars().map(|ch| format!("U+{:04X}", ch as u32)).collect();
            writeln!(out, "{}\t{}", cluster.escape_debug(), code_points.join(" "))?;
        }
        return Ok(());
    }

    if args.lines {
        let lines: Vec<&str> = text.lines().collect();
        for count in counter.count_all(&lines) {
            writeln!(out, "{count}")?;
        }
        return Ok(());
    }

    writeln!(out, "{}", counter.count(&text))?;
    Ok(())
}
