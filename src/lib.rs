// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod store;
pub mod table;

pub use error::{Error, Result};
