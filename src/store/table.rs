use super::row::{Changes, Conditions, Row};
use super::schema::Schema;

use std::fmt::Display;

use log::{debug, warn};

/// A named, fixed-schema sequence of [`Row`]s.
///
/// [`Table::insert`] is the only way a row gets in, and it only lets
/// through rows whose keys are exactly the schema's columns. Update never
/// adds keys and delete only removes whole rows, so every stored row keeps
/// that shape for the life of the table.
///
/// Rows stay in insertion order. Update mutates in place and delete keeps
/// the survivors' relative order.
///
/// The table is not synchronised. Callers sharing one across threads have
/// to wrap it themselves (the REPL never does).
#[derive(Clone, Debug)]
pub struct Table {
    name: String,
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: String, schema: Schema) -> Table {
        Table {
            name,
            schema,
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn columns(&self) -> Vec<String> {
        self.schema.to_vec()
    }

    pub fn rows(&self) -> &[Row] {
        //! Read-only view of the stored rows, in order.

        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn insert(&mut self, record: Row) -> bool {
        //! Append `record` if its keys are exactly the table's columns.
        //!
        //! Returns `false` and leaves the table untouched otherwise. Use
        //! [`Schema::mismatch`] for the details of a refusal.

        if let Some(mismatch) = self.schema.mismatch(&record) {
            warn!(
                "insert refused on table '{}': required [{}], given [{}]; {}",
                self.name,
                self.schema,
                record.columns().collect::<Vec<_>>().join(", "),
                mismatch
            );
            return false;
        }

        self.rows.push(record);
        true
    }

    pub fn select(&self, conditions: Option<&Conditions>) -> Vec<Row> {
        //! Copies of the rows matching every condition, in storage order.
        //!
        //! [`None`] or an empty mapping returns every row. The copies are
        //! the caller's, mutating them never reaches the table.

        match conditions {
            Some(conditions) if !conditions.is_empty() => self
                .rows
                .iter()
                .filter(|row| row.matches(conditions))
                .cloned()
                .collect(),
            _ => self.rows.clone(),
        }
    }

    pub fn update(&mut self, conditions: &Conditions, changes: &Changes) -> usize {
        //! Overwrite `changes` on every matching row, in place.
        //!
        //! Change columns outside the schema are skipped one by one. The
        //! count is of matched rows, even when nothing in them changed.

        let mut n_matched = 0;

        for row in self.rows.iter_mut().filter(|row| row.matches(conditions)) {
            for (column, value) in changes.iter() {
                if let Some(slot) = row.get_mut(column) {
                    *slot = value.clone();
                } else {
                    debug!("update on '{}' skipped unknown column '{}'", self.name, column);
                }
            }
            n_matched += 1;
        }

        n_matched
    }

    pub fn delete(&mut self, conditions: &Conditions) -> usize {
        //! Remove every matching row and return how many went.
        //!
        //! Empty conditions match every row, same as select and update.
        //! That wipes the table, so it is logged; prefer
        //! [`Table::delete_all`] when that is the intent.

        if conditions.is_empty() {
            warn!(
                "delete on '{}' without conditions; removing all {} row(s)",
                self.name,
                self.rows.len()
            );
        }

        let n_before = self.rows.len();
        self.rows.retain(|row| !row.matches(conditions));
        n_before - self.rows.len()
    }

    pub fn delete_all(&mut self) -> usize {
        let n_deleted = self.rows.len();
        self.rows.clear();
        n_deleted
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self.rows.iter().map(|row| format!("{}", row)).collect();

        write!(f, "{} ({})", self.name, self.schema)?;
        if !rows.is_empty() {
            write!(f, "\n{}", rows.join("\n"))?;
        }
        Ok(())
    }
}
