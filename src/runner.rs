// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::PipelineConfig,
    core::net,
    error::Result,
    progress::{Progress, Step},
    specs::players,
    store,
    table::{self, PlayersTable},
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub table: PlayersTable,
    pub rows_written: usize,
    pub database_path: PathBuf,
}

/// Fetch → extract → tabulate → preview → persist, once, in that order.
/// Any failure aborts the run; nothing is retried.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    config: &PipelineConfig,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Step::ALL.len());
        p.log(&format!("Fetching {}", config.source_url));
    }

    let page = net::fetch(&config.source_url)?;
    step_done(&mut progress, Step::Fetch);

    let names = players::extract(&page)?;
    step_done(&mut progress, Step::Extract);

    let table = table::tabulate(names);
    step_done(&mut progress, Step::Tabulate);

    if let Some(p) = progress.as_deref_mut() {
        p.preview(&table);
        p.log(&format!(
            "Writing {} rows to {:?} in {}",
            table.len(),
            config.table_name,
            config.database_path.display()
        ));
    }

    let rows_written = store::persist(&table, &config.database_path, &config.table_name)?;
    step_done(&mut progress, Step::Persist);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        table,
        rows_written,
        database_path: config.database_path.clone(),
    })
}

fn step_done(progress: &mut Option<&mut dyn Progress>, step: Step) {
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(step);
    }
}
