//! # sqlforge
//!
//! A fluent, text-only SQL statement builder.
//!
//! ## Features
//!
//! - **SQL explicit**: clause fragments are plain strings, inserted verbatim
//! - **Deterministic assembly**: fixed clause order, ordered SET assignments
//! - **Lenient setters**: blank or zero arguments are ignored, so optional
//!   clauses chain without branching
//! - **Configurable pagination policy**: unbounded, clamped, or rejected
//!   row counts, chosen at construction
//! - **Text only**: no execution, no connections, no dialect parsing
//!
//! ## Building a SELECT
//!
//! ```
//! use sqlforge::SelectBuilder;
//!
//! let sql = SelectBuilder::new()
//!     .columns(&["id", "username"])
//!     .from("users")
//!     .where_clause("status = 'active'")
//!     .order_by("created_at DESC")
//!     .limit(40, 20)
//!     .assemble()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, username FROM users WHERE status = 'active' \
//!      ORDER BY created_at DESC LIMIT 20 OFFSET 40"
//! );
//! ```
//!
//! ## Building an UPDATE
//!
//! ```
//! use sqlforge::UpdateBuilder;
//!
//! let sql = UpdateBuilder::new()
//!     .table("users")
//!     .set([("status", "'inactive'"), ("updated_at", "now()")])
//!     .where_clause("id = 42")
//!     .assemble()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "UPDATE users SET status = 'inactive', updated_at = now() WHERE id = 42"
//! );
//! ```
//!
//! The builders trust the caller to supply safe fragments: no identifier
//! escaping or injection defense is performed.

pub mod builder;
pub mod clause;
pub mod error;

pub use builder::{SelectBuilder, StatementBuilder, UpdateBuilder};
pub use clause::{Connector, JoinKind, PaginationPolicy};
pub use error::{BuildError, BuildResult};
