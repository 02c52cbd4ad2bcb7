use std::fmt::Display;

use indexmap::IndexMap;
use log::{info, warn};

use super::schema::Schema;
use super::table::Table;

/// The collective of multiple [`Table`] objects.
///
/// A [`Database`] is only a namespace: it creates, finds and lists tables
/// and never looks at their rows. Row-level work is done on the [`Table`]
/// handed out by [`Database::get_table_mut`].
///
/// Tables are kept in an [`IndexMap`], so listings come out in creation
/// order. Nothing ever removes a table.
#[derive(Clone, Debug)]
pub struct Database {
    name: String,
    tables: IndexMap<String, Table>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Database {
        //! Create a new database with no tables.

        Database {
            name: name.into(),
            tables: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn create_table<I, S>(&mut self, name: &str, columns: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        //! Register a new [`Table`] named `name` with the given columns.
        //!
        //! Returns `false` without touching anything when the name is taken,
        //! whatever columns were asked for this time. Empty names and
        //! empty column lists are accepted.

        if self.tables.contains_key(name) {
            warn!("table '{}' already exists in '{}'", name, self.name);
            return false;
        }

        let table = Table::new(name.to_string(), Schema::new(columns));
        info!("table '{}' created with columns [{}]", name, table.schema());
        self.tables.insert(name.to_string(), table);

        true
    }

    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn list_structure(&self) -> Vec<(String, Vec<String>)> {
        //! Table names with their columns, in creation order. No row data.

        self.tables
            .iter()
            .map(|(name, table)| (name.clone(), table.columns()))
            .collect()
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Structure of database '{}':", self.name)?;

        if self.tables.is_empty() {
            return write!(f, "\n  (no tables)");
        }

        for (name, columns) in self.list_structure() {
            write!(f, "\n  - Table: {} | Columns: {}", name, columns.join(", "))?;
        }
        Ok(())
    }
}
