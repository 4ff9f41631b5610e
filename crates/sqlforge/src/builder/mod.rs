//! Structured SQL statement builders.
//!
//! This module provides a lightweight, text-only way to build SQL statements
//! from chained clause fragments.
//!
//! ## Design
//!
//! - SQL stays explicit (strings); the builders only order and join clauses.
//! - Safe defaults: SELECT requires columns, UPDATE requires a table and SET.
//! - Setters ignore blank or zero input, so optional clauses chain without
//!   branching at the call site.
//! - Assembly is pure: builders are never mutated by `assemble`, and repeated
//!   calls yield identical results.

pub mod select;
pub mod traits;
pub mod update;

pub use select::SelectBuilder;
pub use traits::StatementBuilder;
pub use update::UpdateBuilder;
