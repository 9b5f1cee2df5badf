// src/cli.rs
use crate::config::options::PipelineConfig;
use crate::error::Result;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

/// Process entry: fixed configuration, console progress, one run.
pub fn run() -> Result<RunSummary> {
    crate::log::init();

    let config = PipelineConfig::default();
    let mut console = ConsoleProgress;

    match runner::run(&config, Some(&mut console)) {
        Ok(summary) => {
            logf!(
                "Wrote {} players to {}",
                summary.rows_written,
                summary.database_path.display()
            );
            Ok(summary)
        }
        Err(e) => {
            loge!("Run failed at {} step: {e}", e.step());
            Err(e)
        }
    }
}
