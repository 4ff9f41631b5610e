//! End-to-end assembly tests over the public API.
//!
//! These exercise the crate the way a caller would: chained configuration,
//! a terminal `assemble`, and error handling through [`BuildError`].

use sqlforge::{
    BuildError, PaginationPolicy, SelectBuilder, StatementBuilder, UpdateBuilder,
};

#[test]
fn select_renders_every_clause_in_order() {
    let sql = SelectBuilder::new()
        .columns(&["o.id", "o.total", "c.name"])
        .from("orders o")
        .inner_join("customers c ON c.id = o.customer_id")
        .left_join("refunds r ON r.order_id = o.id")
        .where_clause("o.status = 'paid'")
        .and("r.id IS NULL")
        .group_by("o.id, o.total, c.name")
        .order_by("o.total DESC")
        .limit(100, 25)
        .assemble()
        .unwrap();

    assert_eq!(
        sql,
        "SELECT o.id, o.total, c.name FROM orders o \
         INNER JOIN customers c ON c.id = o.customer_id \
         LEFT JOIN refunds r ON r.order_id = o.id \
         WHERE o.status = 'paid' AND r.id IS NULL \
         GROUP BY o.id, o.total, c.name ORDER BY o.total DESC LIMIT 25 OFFSET 100"
    );
}

#[test]
fn optional_clauses_chain_without_branching() {
    let status: Option<&str> = None;
    let search = Some("admin");

    let sql = SelectBuilder::new()
        .columns(&["id", "username"])
        .from("users")
        .where_clause("deleted_at IS NULL")
        .and(&status.map(|s| format!("status = '{s}'")).unwrap_or_default())
        .and(
            &search
                .map(|s| format!("username LIKE '%{s}%'"))
                .unwrap_or_default(),
        )
        .assemble()
        .unwrap();

    assert_eq!(
        sql,
        "SELECT id, username FROM users WHERE deleted_at IS NULL AND username LIKE '%admin%'"
    );
}

#[test]
fn pagination_policy_matrix() {
    let builder = |policy| {
        SelectBuilder::with_pagination_policy(policy)
            .columns(&["*"])
            .from("t")
    };

    assert_eq!(
        builder(PaginationPolicy::None)
            .row_count(9999)
            .assemble()
            .unwrap(),
        "SELECT * FROM t LIMIT 9999"
    );
    assert_eq!(
        builder(PaginationPolicy::ClampToCeiling(500))
            .row_count(9999)
            .assemble()
            .unwrap(),
        "SELECT * FROM t LIMIT 500"
    );
    assert_eq!(
        builder(PaginationPolicy::RejectOutOfRange(500))
            .row_count(9999)
            .assemble(),
        Err(BuildError::RowCountOutOfRange {
            row_count: 9999,
            max: 500
        })
    );

    // With no row count configured, every policy renders no LIMIT at all.
    for policy in [
        PaginationPolicy::None,
        PaginationPolicy::ClampToCeiling(500),
        PaginationPolicy::RejectOutOfRange(500),
    ] {
        assert_eq!(builder(policy).assemble().unwrap(), "SELECT * FROM t");
    }
}

#[test]
fn builders_work_through_the_trait() {
    let select = SelectBuilder::new().columns(&["id"]).from("users");
    let update = UpdateBuilder::new()
        .table("users")
        .set([("active", "false")]);

    let statements: Vec<Box<dyn StatementBuilder>> =
        vec![Box::new(select), Box::new(update)];

    let rendered: Vec<String> = statements
        .iter()
        .map(|s| {
            s.validate().unwrap();
            s.assemble().unwrap()
        })
        .collect();

    assert_eq!(
        rendered,
        vec![
            "SELECT id FROM users".to_string(),
            "UPDATE users SET active = false".to_string(),
        ]
    );
}

#[test]
fn errors_carry_stable_messages() {
    let err = SelectBuilder::new().assemble().unwrap_err();
    assert_eq!(err.to_string(), "select statement has no columns");
    assert!(err.is_column_error());

    let err = UpdateBuilder::new().assemble().unwrap_err();
    assert_eq!(err.to_string(), "no table specified for update");

    let err = SelectBuilder::with_pagination_policy(PaginationPolicy::RejectOutOfRange(10))
        .columns(&["*"])
        .row_count(11)
        .assemble()
        .unwrap_err();
    assert_eq!(err.to_string(), "row count 11 exceeds the ceiling 10");
    assert!(err.is_out_of_range());
}

#[test]
fn malformed_fragments_pass_through_verbatim() {
    let payload = "name = ''; DROP TABLE users; --";
    let sql = SelectBuilder::new()
        .columns(&["*"])
        .from("users")
        .where_clause(payload)
        .assemble()
        .unwrap();

    assert_eq!(sql, format!("SELECT * FROM users WHERE {payload}"));
}

#[test]
fn cloned_builder_diverges_independently() {
    let base = SelectBuilder::new().columns(&["id"]).from("users");
    let paged = base.clone().limit(10, 5);

    assert_eq!(base.assemble().unwrap(), "SELECT id FROM users");
    assert_eq!(
        paged.assemble().unwrap(),
        "SELECT id FROM users LIMIT 5 OFFSET 10"
    );
}
