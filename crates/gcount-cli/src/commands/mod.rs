//! Subcommand implementations and the plumbing they share

pub mod count;
pub mod table;
pub mod verify;

use crate::cli::{InputArgs, MarkDataArgs};
use gcount_core::{
    BuiltinMarkClassifier, GraphemeCounter, MarkClassifier, MarkTable, PatternCounter, Result,
};
use gcount_unicode::{icu_mark_table, IcuMarkClassifier};
use std::fs;
use std::io::Read;

pub type DynCounter = GraphemeCounter<Box<dyn MarkClassifier>>;

/// Read the input as UTF-8, rejecting malformed bytes
pub fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let bytes = match &args.text_file {
        Some(path) => {
            log::debug!("Reading text from {}", path.display());
            fs::read(path)?
        },
        None => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            bytes
        },
    };

    Ok(String::from_utf8(bytes).map_err(|err| err.utf8_error())?)
}

/// Build a counter over the mark data selected on the command line
pub fn build_counter(args: &MarkDataArgs) -> Result<DynCounter> {
    if let Some(path) = &args.table {
        let table = MarkTable::from_json(&fs::read_to_string(path)?)?;
        log::info!(
            "Loaded mark table '{}' ({} ranges, Unicode {}) from {}",
            table.source(),
            table.len(),
            table.unicode_version().unwrap_or("unknown"),
            path.display()
        );
        let pattern = PatternCounter::from_table(&table)?;
        let classifier: Box<dyn MarkClassifier> = Box::new(table);
        return Ok(GraphemeCounter::new(classifier, pattern));
    }

    if args.builtin {
        let classifier: Box<dyn MarkClassifier> = Box::new(BuiltinMarkClassifier::new());
        return Ok(GraphemeCounter::new(classifier, PatternCounter::builtin().clone()));
    }

    let pattern = PatternCounter::from_table(icu_mark_table())?;
    let classifier: Box<dyn MarkClassifier> = Box::new(IcuMarkClassifier::new());
    Ok(GraphemeCounter::new(classifier, pattern))
}
