// src/table.rs
//
// Single-column table of player names. Row ids are positional (0..n) and
// never stored; the one column carries the default label "0".

use std::fmt;

use tabled::builder::Builder;
use tabled::settings::{object::Columns, Alignment, Padding, Style};

use crate::config::consts::{COLUMN_LABEL, DISPLAY_EDGE_ROWS, MAX_DISPLAY_ROWS};
use crate::specs::players::PlayerNameList;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayersTable {
    names: Vec<String>,
}

/// Wrap extracted names as a table. Takes ownership; nothing is copied.
pub fn tabulate(names: PlayerNameList) -> PlayersTable {
    PlayersTable { names }
}

impl PlayersTable {
    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }
    pub fn column_count(&self) -> usize { 1 }
    pub fn column_label(&self) -> &'static str { COLUMN_LABEL }
    pub fn names(&self) -> &[String] { &self.names }

    /// `(row id, name)` pairs in row order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names.iter().map(String::as_str).enumerate()
    }

    pub fn into_names(self) -> PlayerNameList { self.names }

    /// Rows to show in the console preview: everything when short, otherwise
    /// the head and tail with `None` marking the elided middle.
    fn preview_rows(&self) -> Vec<Option<(usize, &str)>> {
        if self.len() <= MAX_DISPLAY_ROWS {
            return self.rows().map(Some).collect();
        }
        let tail_start = self.len() - DISPLAY_EDGE_ROWS;
        self.rows()
            .take(DISPLAY_EDGE_ROWS)
            .map(Some)
            .chain(std::iter::once(None))
            .chain(self.rows().skip(tail_start).map(Some))
            .collect()
    }
}

impl fmt::Display for PlayersTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            // No names means no column either
            return write!(f, "Empty DataFrame\nColumns: []\nIndex: []");
        }

        let mut builder = Builder::default();
        builder.push_record([s!(), s!(self.column_label())]);
        for row in self.preview_rows() {
            match row {
                Some((id, name)) => builder.push_record([id.to_string(), s!(name)]),
                None => builder.push_record([s!("..."), s!("...")]),
            }
        }

        let mut grid = builder.build();
        grid.with(Style::empty())
            .with(Padding::zero())
            .modify(Columns::first(), Alignment::left())
            .modify(Columns::new(1..), Alignment::right())
            .modify(Columns::new(1..), Padding::new(2, 0, 0, 0));

        write!(f, "{grid}")?;
        if self.len() > MAX_DISPLAY_ROWS {
            write!(f, "\n\n[{} rows x {} columns]", self.len(), self.column_count())?;
        }
        Ok(())
    }
}
