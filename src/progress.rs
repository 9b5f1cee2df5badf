// src/progress.rs
use std::fmt;

use crate::table::PlayersTable;

/// The four pipeline steps, in run order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Fetch,
    Extract,
    Tabulate,
    Persist,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Fetch, Step::Extract, Step::Tabulate, Step::Persist];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Fetch => "fetch",
            Step::Extract => "extract",
            Step::Tabulate => "tabulate",
            Step::Persist => "persist",
        })
    }
}

/// Lightweight progress reporting for a pipeline run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of steps.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one step completes.
    fn step_done(&mut self, _step: Step) {}

    /// Called once the table exists, before it is written anywhere.
    fn preview(&mut self, _table: &PlayersTable) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// Console frontend: status to the log, table preview to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        logd!("Starting run ({total} steps)");
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn step_done(&mut self, step: Step) {
        logd!("Step done: {step}");
    }

    fn preview(&mut self, table: &PlayersTable) {
        println!("{table}");
    }

    fn finish(&mut self) {
        logd!("Run finished");
    }
}
