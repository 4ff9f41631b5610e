use crate::error::BuildResult;

/// Base trait for statement builders.
pub trait StatementBuilder {
    /// Validate builder state without rendering.
    fn validate(&self) -> BuildResult<()>;

    /// Render the statement text.
    ///
    /// Assembly is all-or-nothing: on error no partial text is produced.
    fn assemble(&self) -> BuildResult<String>;
}
