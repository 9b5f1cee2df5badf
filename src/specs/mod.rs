// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows where the data lives in one page's HTML and how to pull
//! it out. Specs only extract: fetching lives in `core::net`, shaping in
//! `table`, persistence in `store`.
//!
//! ## Conventions
//! - Selection goes through compiled CSS selectors (`core::html`), never
//!   string scanning.
//! - Results keep document order and the text exactly as the markup gives
//!   it. Cleanup, if any, is a later layer's business.
//! - An empty match is a valid result. Specs do not guess whether the page
//!   layout changed.
//! - Specs are testable offline against inline fixtures.
pub mod players;
