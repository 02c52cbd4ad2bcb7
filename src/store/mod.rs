//! The in-memory store has the following components
//! - Value (a loosely-typed scalar, compared by equality only)
//! - Row (column name to value, also the shape of conditions and changes)
//! - Schema (the exact column set a table's rows must carry)
//! - Table (an ordered sequence of rows with insert/select/update/delete)
//! - Database (a named namespace of tables)
//!

//  All modules of this lib
mod database;
mod row;
mod schema;
mod table;
mod value;

//  External API
pub use database::Database;
pub use row::{Changes, Conditions, Row};
pub use schema::{Schema, SchemaMismatch};
pub use table::Table;
pub use value::Value;
