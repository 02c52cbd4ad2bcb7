use std::fmt::Display;

use indexmap::IndexSet;

use super::row::Row;

/// The fixed set of column names a table's rows must carry, exactly.
///
/// Declaration order is kept only so listings are deterministic; equality
/// and membership ignore it. Repeated names collapse into one column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema(IndexSet<String>);

/// Why a record was refused by [`Schema::mismatch`].
///
/// Carries enough for the caller to show which columns were required and
/// which were given, without the store printing anything itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaMismatch {
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
}

impl Schema {
    pub fn new<I, S>(columns: I) -> Schema
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Schema(columns.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains(column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    pub fn accepts(&self, row: &Row) -> bool {
        //! True when the row's key set equals this column set.
        //!
        //! Row keys are unique, so equal sizes plus every key being a
        //! column is set equality.

        row.len() == self.len() && row.columns().all(|column| self.contains(column))
    }

    pub fn mismatch(&self, row: &Row) -> Option<SchemaMismatch> {
        //! Describe how `row` differs from this schema, or [`None`] if the
        //! row would be accepted.

        if self.accepts(row) {
            return None;
        }

        let missing = self
            .names()
            .filter(|column| row.get(column).is_none())
            .map(str::to_string)
            .collect();
        let unexpected = row
            .columns()
            .filter(|column| !self.contains(column))
            .map(str::to_string)
            .collect();

        Some(SchemaMismatch {
            missing,
            unexpected,
        })
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let columns: Vec<&str> = self.names().collect();
        write!(f, "{}", columns.join(", "))
    }
}

impl Display for SchemaMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "missing [{}], unexpected [{}]",
            self.missing.join(", "),
            self.unexpected.join(", ")
        )
    }
}
