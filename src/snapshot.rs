//! Saving a [`Database`] to disk and bringing it back.
//!
//! The store itself never touches a file. A snapshot is built purely from
//! the store's public read API and restored purely through
//! [`Database::create_table`] and [`Table::insert`](crate::store::Table::insert),
//! in saved order, so the schema check runs again on every restored row.
//!
//! The on-disk form is pretty-printed JSON. Where it lives is decided by
//! the caller, usually from [`crate::config::Config`].

use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::store::{Database, Row};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSnapshot {
    pub name: String,
    pub tables: Vec<TableSnapshot>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl DatabaseSnapshot {
    pub fn capture(database: &Database) -> DatabaseSnapshot {
        let tables = database
            .tables()
            .map(|table| TableSnapshot {
                name: table.name().to_string(),
                columns: table.columns(),
                rows: table.rows().to_vec(),
            })
            .collect();

        DatabaseSnapshot {
            name: database.name().to_string(),
            tables,
        }
    }

    pub fn restore(self) -> Result<Database, String> {
        //! Rebuild the database table by table, row by row.
        //!
        //! A repeated table name or a row the schema refuses means the
        //! snapshot is corrupt, and nothing is returned.

        let mut database = Database::new(self.name);

        for TableSnapshot {
            name,
            columns,
            rows,
        } in self.tables
        {
            if !database.create_table(&name, columns) {
                return Err(format!("corrupt snapshot: table '{}' appears twice", name));
            }

            let table = database
                .get_table_mut(&name)
                .ok_or_else(|| format!("corrupt snapshot: table '{}' vanished", name))?;

            for (position, row) in rows.into_iter().enumerate() {
                if !table.insert(row) {
                    return Err(format!(
                        "corrupt snapshot: row {} of table '{}' does not fit its columns",
                        position, name
                    ));
                }
            }
        }

        Ok(database)
    }
}

pub fn save(database: &Database, path: &Path) -> Result<(), String> {
    let snapshot = DatabaseSnapshot::capture(database);
    let contents = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| format!("err: could not serialise '{}': {}", database.name(), e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("err: could not create {}: {}", parent.display(), e))?;
    }

    fs::write(path, contents)
        .map_err(|e| format!("err: could not write {}: {}", path.display(), e))?;

    info!(
        "saved database '{}' ({} table(s)) to {}",
        database.name(),
        snapshot.tables.len(),
        path.display()
    );
    Ok(())
}

pub fn load(path: &Path) -> Result<Database, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("err: could not read {}: {}", path.display(), e))?;
    let snapshot: DatabaseSnapshot = serde_json::from_str(&contents)
        .map_err(|e| format!("err: invalid snapshot {}: {}", path.display(), e))?;

    let database = snapshot.restore()?;
    info!("loaded database '{}' from {}", database.name(), path.display());

    Ok(database)
}
