use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::Value;

/// A record: column name to [`Value`].
///
/// The caller's key order is kept so a row prints the way it was written,
/// but two rows compare equal whenever they hold the same pairs, in any
/// order ([`IndexMap`] equality is order-insensitive).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, Value>);

/// Column to expected value. A row matches when every pair is equal.
pub type Conditions = Row;

/// Column to new value, applied by [`super::Table::update`].
pub type Changes = Row;

impl Row {
    pub fn new() -> Row {
        Row(IndexMap::new())
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Row {
        //! Builder form of [`Row::set`], handy for literals in calling code.

        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(column.into(), value.into())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub(crate) fn get_mut(&mut self, column: &str) -> Option<&mut Value> {
        self.0.get_mut(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(column, value)| (column.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, conditions: &Conditions) -> bool {
        //! Exact equality on every condition column. A column the row does
        //! not carry never matches, whatever the expected value.

        conditions
            .iter()
            .all(|(column, expected)| self.get(column) == Some(expected))
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row(iter
            .into_iter()
            .map(|(column, value)| (column.into(), value.into()))
            .collect())
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row: Vec<String> = self
            .iter()
            .map(|(column, value)| format!("{}: {}", column, value))
            .collect();
        write!(f, "{}", row.join(" | "))
    }
}
