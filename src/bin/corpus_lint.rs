//! Lint every metadata document in the store.
//!
//! Reports all findings at once rather than stopping at the first broken
//! document, so a corrupted store can be repaired in a single pass. Exit
//! codes: 0 clean, 1 findings reported, 2 the store could not be walked.

use anyhow::{Result, bail};
use modmatch::{audit_store, resolve_store_root};
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    let code = match run() {
        Ok(findings) if findings.is_empty() => 0,
        Ok(findings) => {
            for finding in &findings {
                eprintln!("{finding}");
            }
            eprintln!("{} finding(s)", findings.len());
            1
        }
        Err(err) => {
            eprintln!("{err:#}");
            2
        }
    };
    std::process::exit(code);
}

fn run() -> Result<Vec<String>> {
    let mut args = env::args().skip(1);
    let mut store: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--store" => {
                let raw = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing value for --store"))?;
                store = Some(PathBuf::from(raw));
            }
            "--help" | "-h" => {
                print!("{}", usage());
                std::process::exit(0);
            }
            other => bail!("unknown flag: {other}"),
        }
    }

    let store_root = resolve_store_root(store.as_deref())?;
    audit_store(&store_root)
}

fn usage() -> &'static str {
    "Usage: corpus-lint [--store PATH]\n\
Walks the metadata store and reports unreadable files, invalid documents, blank ids,\n\
and duplicate attribute profiles. Exit codes: 0 clean, 1 findings, 2 walk failure.\n"
}
