//! Example demonstrating conditional clause chaining.
//!
//! Run with:
//!   cargo run --example filtered_report -p sqlforge

use sqlforge::{BuildResult, PaginationPolicy, SelectBuilder, UpdateBuilder};

#[derive(Debug)]
struct Filters {
    status: Option<String>,
    search: Option<String>,
    page: u64,
    per_page: u64,
}

/// Build the listing query. Blank fragments are ignored by the builder, so
/// optional filters chain without branching.
fn build_report_sql(filters: &Filters) -> BuildResult<String> {
    let status = filters
        .status
        .as_deref()
        .map(|s| format!("status = '{s}'"))
        .unwrap_or_default();
    let search = filters
        .search
        .as_deref()
        .map(|s| format!("username LIKE '%{s}%'"))
        .unwrap_or_default();

    SelectBuilder::with_pagination_policy(PaginationPolicy::RejectOutOfRange(500))
        .columns(&["id", "username", "status", "created_at"])
        .from("users")
        .where_clause("deleted_at IS NULL")
        .and(&status)
        .and(&search)
        .order_by("created_at DESC")
        .limit(
            filters.page.saturating_sub(1) * filters.per_page,
            filters.per_page,
        )
        .assemble()
}

fn main() -> BuildResult<()> {
    let everything = Filters {
        status: None,
        search: None,
        page: 1,
        per_page: 50,
    };
    println!("{}", build_report_sql(&everything)?);

    let narrowed = Filters {
        status: Some("active".to_string()),
        search: Some("admin".to_string()),
        page: 3,
        per_page: 25,
    };
    println!("{}", build_report_sql(&narrowed)?);

    let deactivate = UpdateBuilder::new()
        .table("users")
        .set([("status", "'inactive'"), ("updated_at", "now()")])
        .where_clause("last_login < now() - interval '1 year'")
        .and("status = 'active'")
        .assemble()?;
    println!("{deactivate}");

    Ok(())
}
