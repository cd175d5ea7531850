//! Table command implementation
//!
//! Writes a snapshot of the chosen mark data so it can be pinned, diffed
//! against a newer Unicode release, and fed back in with `--table`.

use crate::cli::{TableArgs, TableSource};
use gcount_core::{BuiltinMarkClassifier, MarkTable, Result};
use gcount_unicode::icu_mark_table;
use std::fs;
use std::io::Write;

pub fn run(args: &TableArgs) -> Result<()> {
    let mut table = match args.source {
        TableSource::Icu => icu_mark_table().clone(),
        TableSource::Builtin => MarkTable::from_classifier(&BuiltinMarkClassifier::new()),
    };
    if let Some(version) = &args.unicode_version {
        table = table.with_unicode_version(version.clone());
    }

    let json = table.to_json()?;
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))?;
            log::info!(
                "Wrote {} mark ranges from '{}' to {}",
                table.len(),
                table.source(),
                path.display()
            );
        },
        None => {
            let stdout = std::io::stdout();
            writeln!(stdout.lock(), "{json}")?;
        },
    }
    Ok(())
}
