// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Everything one pipeline run needs to know about the outside world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source_url: String,
    pub database_path: PathBuf,
    pub table_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: s!(SOURCE_URL),
            database_path: PathBuf::from(DATABASE_PATH),
            table_name: s!(TABLE_NAME),
        }
    }
}

impl PipelineConfig {
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_database_path(mut self, path: impl AsRef<Path>) -> Self {
        self.database_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }
}
