//! Verify command implementation

use super::{build_counter, read_input};
use crate::cli::VerifyArgs;
use gcount_core::{GcountError, Result};
use std::io::Write;

pub fn run(args: &VerifyArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let counter = build_counter(&args.marks)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut checked = 0usize;
    let mut mismatches = 0usize;

    // The whole input first, then each line, since a mark at the start of a
    // line behaves differently once the line stands alone.
    let units = std::iter::once(("input".to_string(), text.as_str())).chain(
        text.lines()
            .enumerate()
            .map(|(idx, line)| (format!("line {}", idx + 1), line)),
    );

    for (label, unit) in units {
        checked += 1;
        if let Err(GcountError::StrategyMismatch { scan, pattern }) = counter.verify(unit) {
            mismatches += 1;
            writeln!(out, "{label}: scan={scan} pattern={pattern}")?;
        }
    }

    writeln!(
        out,
        "Checked {checked} units with '{}' marks: {mismatches} mismatches",
        counter.classifier().name()
    )?;

    if mismatches > 0 {
        return Err(GcountError::Other(format!(
            "{mismatches} of {checked} units counted differently"
        )));
    }
    Ok(())
}
