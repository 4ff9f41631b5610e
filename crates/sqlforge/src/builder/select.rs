use tracing::debug;

use super::traits::StatementBuilder;
use crate::clause::{Connector, JoinKind, PaginationPolicy};
use crate::error::{BuildError, BuildResult};

/// Structured SELECT statement builder.
///
/// Clauses accumulate through chained calls and render in fixed order on
/// [`assemble`](SelectBuilder::assemble): columns, FROM, joins, WHERE plus
/// conditional filters, GROUP BY, ORDER BY, LIMIT/OFFSET. Fragments are
/// caller-supplied SQL text and pass through verbatim.
///
/// Every configuration method ignores blank or zero input, so optional
/// clauses can be chained without branching at the call site.
///
/// # Example
///
/// ```
/// use sqlforge::SelectBuilder;
///
/// let sql = SelectBuilder::new()
///     .columns(&["id", "username"])
///     .from("users")
///     .where_clause("status = 'active'")
///     .and("deleted_at IS NULL")
///     .order_by("created_at DESC")
///     .limit(20, 10)
///     .assemble()
///     .unwrap();
///
/// assert_eq!(
///     sql,
///     "SELECT id, username FROM users WHERE status = 'active' \
///      AND deleted_at IS NULL ORDER BY created_at DESC LIMIT 10 OFFSET 20"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    /// SELECT columns (trimmed at assembly)
    columns: Vec<String>,
    /// FROM target
    table: Option<String>,
    /// JOIN entries in insertion order
    joins: Vec<(JoinKind, String)>,
    /// Base WHERE filter
    where_clause: Option<String>,
    /// Conditional filters appended after the base filter
    filters: Vec<(Connector, String)>,
    /// GROUP BY fragment
    group_by: Option<String>,
    /// ORDER BY fragment
    order_by: Option<String>,
    /// OFFSET value (rendered only alongside LIMIT)
    offset: Option<u64>,
    /// LIMIT row count
    row_count: Option<u64>,
    /// Row-count policy, fixed at construction
    policy: PaginationPolicy,
}

impl SelectBuilder {
    /// Create a new SELECT builder with no row-count ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new SELECT builder with an explicit pagination policy.
    pub fn with_pagination_policy(policy: PaginationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Replace the column list. Empty input leaves the builder unchanged.
    #[must_use]
    pub fn columns(mut self, columns: &[&str]) -> Self {
        if !columns.is_empty() {
            self.columns = columns.iter().map(|c| String::from(*c)).collect();
        }
        self
    }

    /// Set the FROM target. Blank input leaves the builder unchanged.
    #[must_use]
    pub fn from(mut self, table: &str) -> Self {
        if !table.is_empty() {
            self.table = Some(table.to_string());
        }
        self
    }

    /// Append an INNER JOIN fragment. Blank input leaves the builder unchanged.
    #[must_use]
    pub fn inner_join(mut self, fragment: &str) -> Self {
        self.push_join(JoinKind::Inner, fragment);
        self
    }

    /// Append a LEFT JOIN fragment. Blank input leaves the builder unchanged.
    #[must_use]
    pub fn left_join(mut self, fragment: &str) -> Self {
        self.push_join(JoinKind::Left, fragment);
        self
    }

    fn push_join(&mut self, kind: JoinKind, fragment: &str) {
        if !fragment.is_empty() {
            self.joins.push((kind, fragment.to_string()));
        }
    }

    /// Set the base WHERE filter. Blank input leaves the builder unchanged.
    #[must_use]
    pub fn where_clause(mut self, fragment: &str) -> Self {
        if !fragment.is_empty() {
            self.where_clause = Some(fragment.to_string());
        }
        self
    }

    /// Append an AND filter. Rendered only when a base filter is set.
    #[must_use]
    pub fn and(mut self, fragment: &str) -> Self {
        self.push_filter(Connector::And, fragment);
        self
    }

    /// Append an OR filter. Rendered only when a base filter is set.
    #[must_use]
    pub fn or(mut self, fragment: &str) -> Self {
        self.push_filter(Connector::Or, fragment);
        self
    }

    fn push_filter(&mut self, connector: Connector, fragment: &str) {
        if !fragment.is_empty() {
            self.filters.push((connector, fragment.to_string()));
        }
    }

    /// Set the GROUP BY fragment. Blank input leaves the builder unchanged.
    #[must_use]
    pub fn group_by(mut self, fragment: &str) -> Self {
        if !fragment.is_empty() {
            self.group_by = Some(fragment.to_string());
        }
        self
    }

    /// Set the ORDER BY fragment. Blank input leaves the builder unchanged.
    #[must_use]
    pub fn order_by(mut self, fragment: &str) -> Self {
        if !fragment.is_empty() {
            self.order_by = Some(fragment.to_string());
        }
        self
    }

    /// Set the OFFSET value. Zero leaves the builder unchanged.
    ///
    /// OFFSET renders only when a row count renders alongside it.
    #[must_use]
    pub fn offset(mut self, n: u64) -> Self {
        if n > 0 {
            self.offset = Some(n);
        }
        self
    }

    /// Set the LIMIT row count. Zero leaves the builder unchanged.
    #[must_use]
    pub fn row_count(mut self, n: u64) -> Self {
        if n > 0 {
            self.row_count = Some(n);
        }
        self
    }

    /// Convenience for [`offset`](Self::offset) plus
    /// [`row_count`](Self::row_count). Later calls to the individual setters
    /// overwrite these values.
    #[must_use]
    pub fn limit(self, offset: u64, row_count: u64) -> Self {
        self.offset(offset).row_count(row_count)
    }

    /// Validate accumulated state without rendering.
    pub fn validate(&self) -> BuildResult<()> {
        if self.columns.is_empty() {
            return Err(BuildError::NoColumns);
        }
        if self.columns.iter().any(|col| col.trim().is_empty()) {
            return Err(BuildError::BlankColumn);
        }
        self.effective_row_count()?;
        Ok(())
    }

    /// Row count after applying the pagination policy.
    fn effective_row_count(&self) -> BuildResult<Option<u64>> {
        let Some(n) = self.row_count else {
            return Ok(None);
        };
        match self.policy {
            PaginationPolicy::None => Ok(Some(n)),
            PaginationPolicy::ClampToCeiling(max) => Ok(Some(n.min(max))),
            PaginationPolicy::RejectOutOfRange(max) if n > max => {
                Err(BuildError::RowCountOutOfRange { row_count: n, max })
            }
            PaginationPolicy::RejectOutOfRange(_) => Ok(Some(n)),
        }
    }

    /// Render the statement in fixed clause order.
    ///
    /// Pure over the accumulated state: repeated calls on an unmodified
    /// builder yield identical results.
    pub fn assemble(&self) -> BuildResult<String> {
        self.validate()?;
        let row_count = self.effective_row_count()?;

        let mut sql = String::from("SELECT ");
        let columns: Vec<&str> = self.columns.iter().map(|col| col.trim()).collect();
        sql.push_str(&columns.join(", "));

        if let Some(ref table) = self.table {
            sql.push_str(" FROM ");
            sql.push_str(table);
        }

        for (kind, fragment) in &self.joins {
            sql.push(' ');
            sql.push_str(kind.keyword());
            sql.push(' ');
            sql.push_str(fragment);
        }

        if let Some(ref base) = self.where_clause {
            sql.push_str(" WHERE ");
            sql.push_str(base);

            for (connector, fragment) in &self.filters {
                sql.push(' ');
                sql.push_str(connector.keyword());
                sql.push(' ');
                sql.push_str(fragment);
            }
        }

        if let Some(ref group) = self.group_by {
            sql.push_str(" GROUP BY ");
            sql.push_str(group);
        }

        if let Some(ref order) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        if let Some(n) = row_count {
            sql.push_str(&format!(" LIMIT {n}"));
            if let Some(offset) = self.offset {
                sql.push_str(&format!(" OFFSET {offset}"));
            }
        }

        debug!(statement = %sql, "assembled SELECT statement");
        Ok(sql)
    }
}

impl StatementBuilder for SelectBuilder {
    fn validate(&self) -> BuildResult<()> {
        SelectBuilder::validate(self)
    }

    fn assemble(&self) -> BuildResult<String> {
        SelectBuilder::assemble(self)
    }
}
