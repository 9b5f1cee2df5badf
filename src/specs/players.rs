// src/specs/players.rs

use crate::config::consts::PLAYER_CELL_SELECTOR;
use crate::core::{html, RawPage};
use crate::error::Result;

/// Player names in document order. Duplicates are kept: a player traded
/// mid-season shows up once per stint.
pub type PlayerNameList = Vec<String>;

/// Pull every player-name cell out of a fetched page.
pub fn extract(page: &RawPage) -> Result<PlayerNameList> {
    let names = extract_names(&page.body)?;
    if names.is_empty() {
        logw!("No cells matched {PLAYER_CELL_SELECTOR:?} on {}", page.url);
    } else {
        logd!("Matched {} player cells on {}", names.len(), page.url);
    }
    Ok(names)
}

/// Offline variant of [`extract`] over raw markup.
pub fn extract_names(doc: &str) -> Result<PlayerNameList> {
    let selector = html::compile(PLAYER_CELL_SELECTOR)?;
    let parsed = html::parse(doc);
    Ok(html::select_text(&parsed, &selector))
}
