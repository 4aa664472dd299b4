use std::io::Write;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::data::loader::load_datasets;
use crate::data::model::Datasets;

pub const GREETING: &str = "hello, world!";

// ---------------------------------------------------------------------------
// Program run
// ---------------------------------------------------------------------------

/// Load the datasets for `user`, then write the greeting to `out`.
///
/// Nothing is written if the load fails.
pub fn run<W: Write>(config: &Config, user: &str, out: &mut W) -> Result<Datasets> {
    let datasets = load_datasets(config, user)
        .with_context(|| format!("loading datasets for user '{user}'"))?;

    for (name, table) in [
        ("train", &datasets.train),
        ("test_1", &datasets.test_1),
        ("test_2", &datasets.test_2),
    ] {
        log::info!("{name}: {table}");
    }

    writeln!(out, "{GREETING}").context("writing greeting")?;
    Ok(datasets)
}
