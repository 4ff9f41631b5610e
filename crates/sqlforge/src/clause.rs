//! Clause vocabulary shared by the statement builders.
//!
//! This module provides the [`JoinKind`], [`Connector`], and
//! [`PaginationPolicy`] primitives that the SELECT and UPDATE builders render
//! from. Fragments attached to these are caller-supplied SQL text and pass
//! through verbatim.

/// Join variant for a SELECT statement.
///
/// Entries keep their insertion order across kinds, so interleaved
/// `LEFT`/`INNER` joins render exactly as chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// `INNER JOIN`
    Inner,
    /// `LEFT JOIN`
    Left,
}

impl JoinKind {
    /// SQL keyword rendered for this join kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
        }
    }
}

/// Logical joiner between a base filter and an appended conditional filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl Connector {
    /// SQL keyword rendered for this connector.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Policy governing how a configured row count is treated during assembly.
///
/// Selected once at construction via
/// [`SelectBuilder::with_pagination_policy`](crate::SelectBuilder::with_pagination_policy).
/// [`RejectOutOfRange`](PaginationPolicy::RejectOutOfRange) surfaces an error
/// instead of silently rewriting the limit; prefer it over
/// [`ClampToCeiling`](PaginationPolicy::ClampToCeiling) when callers should
/// hear about out-of-range requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationPolicy {
    /// Render any positive row count as-is.
    #[default]
    None,
    /// Rewrite a row count above the ceiling down to the ceiling.
    ClampToCeiling(u64),
    /// Refuse to assemble when the row count exceeds the ceiling.
    RejectOutOfRange(u64),
}
