// src/store.rs
//
// SQLite persistence. Every write is a full replace: the table is dropped
// and rebuilt inside one transaction, so a failed run leaves the previous
// contents in place.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::config::consts::{COLUMN_LABEL, INDEX_COLUMN};
use crate::error::{Error, Result};
use crate::table::PlayersTable;

/// Replace `table_name` in the database at `db_path` with `table`.
/// The file is created if missing. Returns the number of rows written.
///
/// The connection lives only for this call. It is closed explicitly on
/// success and dropped (rolling back any open transaction) on every error path.
pub fn persist(table: &PlayersTable, db_path: &Path, table_name: &str) -> Result<usize> {
    let wrap = |source: rusqlite::Error| Error::Persist { path: db_path.to_path_buf(), source };

    let mut conn = Connection::open(db_path).map_err(wrap)?;
    let written = replace_table(&mut conn, table, table_name).map_err(wrap)?;
    conn.close().map_err(|(_, e)| wrap(e))?;

    logd!("Replaced {table_name:?} in {} with {written} rows", db_path.display());
    Ok(written)
}

/// Read back the names stored by [`persist`], in row-id order.
pub fn load_names(db_path: &Path, table_name: &str) -> Result<Vec<String>> {
    let wrap = |source: rusqlite::Error| Error::Persist { path: db_path.to_path_buf(), source };

    let conn = Connection::open(db_path).map_err(wrap)?;
    let sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        quote_ident(COLUMN_LABEL),
        quote_ident(table_name),
        quote_ident(INDEX_COLUMN),
    );
    let mut stmt = conn.prepare(&sql).map_err(wrap)?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .map_err(wrap)?;
    Ok(names)
}

fn replace_table(conn: &mut Connection, table: &PlayersTable, table_name: &str) -> rusqlite::Result<usize> {
    let tbl = quote_ident(table_name);
    let idx_col = quote_ident(INDEX_COLUMN);
    let val_col = quote_ident(table.column_label());
    let idx_name = quote_ident(&format!("ix_{table_name}_{INDEX_COLUMN}"));

    let tx = conn.transaction()?;
    // Dropping the table takes its index with it
    tx.execute(&format!("DROP TABLE IF EXISTS {tbl}"), [])?;
    tx.execute(&format!("CREATE TABLE {tbl} ({idx_col} INTEGER, {val_col} TEXT)"), [])?;
    tx.execute(&format!("CREATE INDEX {idx_name} ON {tbl} ({idx_col})"), [])?;

    let mut written = 0usize;
    {
        let mut insert = tx.prepare(&format!("INSERT INTO {tbl} ({idx_col}, {val_col}) VALUES (?1, ?2)"))?;
        for (id, name) in table.rows() {
            written += insert.execute(params![id as i64, name])?;
        }
    }
    tx.commit()?;
    Ok(written)
}

/// Quote an SQL identifier, doubling embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tabulate;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn quote_ident_doubles_quotes() {
        assert_eq!(quote_ident("players"), "\"players\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn persist_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("players.db");
        let table = tabulate(names(&["LeBron James", "Stephen Curry"]));

        assert_eq!(persist(&table, &db, "players").unwrap(), 2);
        assert_eq!(load_names(&db, "players").unwrap(), names(&["LeBron James", "Stephen Curry"]));
    }

    #[test]
    fn layout_has_index_column_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("players.db");
        persist(&tabulate(names(&["A", "B", "C"])), &db, "players").unwrap();

        let conn = Connection::open(&db).unwrap();
        let cols: Vec<(String, String)> = conn
            .prepare("SELECT name, type FROM pragma_table_info('players') ORDER BY cid")
            .unwrap()
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(cols, vec![(s!("index"), s!("INTEGER")), (s!("0"), s!("TEXT"))]);

        let ids: Vec<i64> = conn
            .prepare("SELECT \"index\" FROM players ORDER BY \"index\"")
            .unwrap()
            .query_map([], |r| r.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(ids, vec![0, 1, 2]);

        let ix: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'ix_players_index'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(ix, 1);
    }

    #[test]
    fn empty_table_still_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("players.db");
        persist(&tabulate(names(&["Old"])), &db, "players").unwrap();
        assert_eq!(persist(&tabulate(Vec::new()), &db, "players").unwrap(), 0);
        assert!(load_names(&db, "players").unwrap().is_empty());
    }

    #[test]
    fn other_tables_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("players.db");
        persist(&tabulate(names(&["Keep"])), &db, "archive").unwrap();
        persist(&tabulate(names(&["New"])), &db, "players").unwrap();
        assert_eq!(load_names(&db, "archive").unwrap(), names(&["Keep"]));
    }

    #[test]
    fn directory_path_is_persist_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = persist(&tabulate(names(&["X"])), dir.path(), "players").unwrap_err();
        assert!(matches!(err, Error::Persist { .. }));
        assert_eq!(err.step(), "persist");
    }

    #[test]
    fn missing_table_is_persist_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("empty.db");
        assert!(matches!(load_names(&db, "players"), Err(Error::Persist { .. })));
    }
}
