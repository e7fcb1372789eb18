//! Resolve one module identifier against the document store.
//!
//! Thin front end over the library's load-then-resolve entry point. Prints
//! the selected record as compact JSON on success. Exit codes mirror the
//! outcomes a transport would map to status codes: 0 = match, 1 = no match,
//! 2 = corpus read/parse failure.

use anyhow::{Result, bail};
use modmatch::{CapabilityQuery, ModuleId, parse_attribute_list, resolve_module, resolve_store_root};
use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    let code = match run() {
        Ok(Outcome::Match) => 0,
        Ok(Outcome::NoMatch) => 1,
        Err(err) => {
            eprintln!("{err:#}");
            2
        }
    };
    std::process::exit(code);
}

enum Outcome {
    Match,
    NoMatch,
}

fn run() -> Result<Outcome> {
    let args = CliArgs::parse()?;
    let store_root = resolve_store_root(args.store.as_deref())?;

    let query = match args.attributes {
        Some(attributes) => CapabilityQuery::with_attributes(attributes),
        None => CapabilityQuery::unconstrained(),
    };

    match resolve_module(&store_root, &args.id, &query)? {
        Some(record) => {
            println!("{}", serde_json::to_string(&record)?);
            Ok(Outcome::Match)
        }
        None => {
            eprintln!("no match for {}", args.id.0);
            Ok(Outcome::NoMatch)
        }
    }
}

struct CliArgs {
    id: ModuleId,
    store: Option<PathBuf>,
    /// `None` means no constraint; `Some` (possibly empty) is a real set.
    attributes: Option<BTreeSet<modmatch::Attribute>>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut id: Option<ModuleId> = None;
        let mut store: Option<PathBuf> = None;
        let mut attributes: Option<BTreeSet<modmatch::Attribute>> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--id" => {
                    let raw = next_value(&mut args, "--id")?;
                    if raw.trim().is_empty() {
                        bail!("--id must not be blank");
                    }
                    id = Some(ModuleId(raw));
                }
                "--store" => {
                    store = Some(PathBuf::from(next_value(&mut args, "--store")?));
                }
                "--attributes" => {
                    let raw = next_value(&mut args, "--attributes")?;
                    attributes
                        .get_or_insert_with(BTreeSet::new)
                        .extend(parse_attribute_list(&raw));
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other if id.is_none() && !other.starts_with('-') => {
                    id = Some(ModuleId(other.to_string()));
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        let Some(id) = id else {
            bail!("missing module identifier; see --help");
        };

        Ok(CliArgs {
            id,
            store,
            attributes,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: resolve [--store PATH] [--attributes LIST]... ID\n\
Resolves ID against the metadata store and prints the best-matching record as compact JSON.\n\
LIST is comma- or whitespace-separated. Omitting --attributes entirely imposes no capability\n\
constraint; passing --attributes '' constrains to the empty set.\n\
Exit codes: 0 match, 1 no match, 2 corpus failure.\n"
}
