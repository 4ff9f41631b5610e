use tracing::debug;

use super::traits::StatementBuilder;
use crate::clause::Connector;
use crate::error::{BuildError, BuildResult};

/// UPDATE statement builder.
///
/// Renders `UPDATE <table> SET col = value, ... [WHERE <filter>]`. SET
/// assignments are an ordered association list, so the rendered column order
/// follows insertion order exactly. Assignment values are pre-formatted SQL
/// text and pass through verbatim; quoting is the caller's responsibility.
///
/// Unlike [`SelectBuilder`](crate::SelectBuilder), [`and`](UpdateBuilder::and)
/// and [`or`](UpdateBuilder::or) append to a single accumulated filter string
/// rather than a structured list, and a later
/// [`where_clause`](UpdateBuilder::where_clause) call replaces everything
/// accumulated so far. The WHERE clause renders only once a base filter has
/// been set.
///
/// # Example
///
/// ```
/// use sqlforge::UpdateBuilder;
///
/// let sql = UpdateBuilder::new()
///     .table("user")
///     .set([("a", "1")])
///     .where_clause("a = 2")
///     .and("b = 3")
///     .assemble()
///     .unwrap();
///
/// assert_eq!(sql, "UPDATE user SET a = 1 WHERE a = 2 AND b = 3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    /// Target table
    table: String,
    /// SET assignments, column to pre-formatted value text
    assignments: Vec<(String, String)>,
    /// Accumulated filter text
    where_text: String,
    /// Whether a base filter was set
    has_where: bool,
}

impl UpdateBuilder {
    /// Create a new UPDATE builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table. Blank input leaves the builder unchanged.
    #[must_use]
    pub fn table(mut self, table: &str) -> Self {
        if !table.is_empty() {
            self.table = table.to_string();
        }
        self
    }

    /// Replace the SET assignments wholesale, preserving iteration order.
    #[must_use]
    pub fn set<I, K, V>(mut self, assignments: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.assignments = assignments
            .into_iter()
            .map(|(column, value)| (column.into(), value.into()))
            .collect();
        self
    }

    /// Set the base filter, replacing any accumulated filter text.
    /// Blank input leaves the builder unchanged.
    #[must_use]
    pub fn where_clause(mut self, fragment: &str) -> Self {
        if !fragment.is_empty() {
            self.where_text = fragment.to_string();
            self.has_where = true;
        }
        self
    }

    /// Append an AND fragment to the filter text.
    #[must_use]
    pub fn and(mut self, fragment: &str) -> Self {
        self.push_filter(Connector::And, fragment);
        self
    }

    /// Append an OR fragment to the filter text.
    #[must_use]
    pub fn or(mut self, fragment: &str) -> Self {
        self.push_filter(Connector::Or, fragment);
        self
    }

    fn push_filter(&mut self, connector: Connector, fragment: &str) {
        if !fragment.is_empty() {
            self.where_text = format!("{} {} {}", self.where_text, connector.keyword(), fragment);
        }
    }

    /// Validate accumulated state without rendering.
    pub fn validate(&self) -> BuildResult<()> {
        if self.table.is_empty() {
            return Err(BuildError::NoTable);
        }
        if self.assignments.is_empty() {
            return Err(BuildError::EmptySet);
        }
        Ok(())
    }

    /// Render the statement.
    ///
    /// Pure over the accumulated state: repeated calls on an unmodified
    /// builder yield identical results.
    pub fn assemble(&self) -> BuildResult<String> {
        self.validate()?;

        let set_parts: Vec<String> = self
            .assignments
            .iter()
            .map(|(column, value)| format!("{column} = {value}"))
            .collect();

        let mut sql = format!("UPDATE {} SET {}", self.table, set_parts.join(", "));

        if self.has_where {
            sql.push_str(" WHERE ");
            sql.push_str(&self.where_text);
        }

        debug!(statement = %sql, "assembled UPDATE statement");
        Ok(sql)
    }
}

impl StatementBuilder for UpdateBuilder {
    fn validate(&self) -> BuildResult<()> {
        UpdateBuilder::validate(self)
    }

    fn assemble(&self) -> BuildResult<String> {
        UpdateBuilder::assemble(self)
    }
}
