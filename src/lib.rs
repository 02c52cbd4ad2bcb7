//! Tabula: named tables of loosely-typed rows, kept in memory.
//!
//! [`store`] is the whole data model. Everything else sits on top of its
//! public API: [`snapshot`] writes a database to disk and back, [`cli`] is
//! the REPL, [`sessions`] keeps per-user state and [`config`] resolves the
//! runtime settings.

pub mod cli;
pub mod config;
pub mod sessions;
pub mod snapshot;
pub mod store;
