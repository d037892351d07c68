//! End-to-end tests against an in-memory SQLite database.

use std::sync::Arc;

use quarry_sql::{Engine, QueryBuilder, Row, SqlValue};
use quarry_sqlite::SqliteEngine;

async fn engine_with_users() -> Arc<dyn Engine> {
    let engine: Arc<dyn Engine> = Arc::new(SqliteEngine::in_memory().await.unwrap());
    engine
        .query(
            "CREATE TABLE users (\
                id INTEGER PRIMARY KEY AUTOINCREMENT, \
                name TEXT NOT NULL, \
                age INTEGER, \
                score REAL\
            )",
            &[],
        )
        .await
        .unwrap();
    engine
}

fn users(engine: &Arc<dyn Engine>) -> QueryBuilder {
    QueryBuilder::table("users").engine(Arc::clone(engine))
}

#[tokio::test]
async fn insert_and_get_rows_back() {
    let engine = engine_with_users().await;

    let affected = users(&engine)
        .insert(vec![
            Row::new().set("name", "Alice").set("age", 34_i64),
            Row::new().set("name", "Bob").set("age", 41_i64),
        ])
        .await
        .unwrap();
    assert_eq!(affected, 2);

    let rows = users(&engine).order_by_asc("id").get().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("name"), Some(&SqlValue::Text(String::from("Alice"))));
    assert_eq!(rows[1].get("age"), Some(&SqlValue::Int(41)));
}

#[tokio::test]
async fn insert_and_get_id_reports_rowid() {
    let engine = engine_with_users().await;

    let first = users(&engine)
        .insert_and_get_id(Row::new().set("name", "Alice"))
        .await
        .unwrap();
    let second = users(&engine)
        .insert_and_get_id(Row::new().set("name", "Bob"))
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[tokio::test]
async fn where_clauses_filter_rows() {
    let engine = engine_with_users().await;
    users(&engine)
        .insert(vec![
            Row::new().set("name", "Alice").set("age", 34_i64),
            Row::new().set("name", "Bob").set("age", 41_i64),
            Row::new().set("name", "Carol").set("age", 29_i64),
        ])
        .await
        .unwrap();

    let rows = users(&engine)
        .where_operator("age", ">=", 30_i64)
        .or_where_eq("name", "Carol")
        .order_by_asc("name")
        .get()
        .await
        .unwrap();

    let names: Vec<_> = rows
        .iter()
        .filter_map(|row| row.get("name").and_then(|v| v.as_text().map(String::from)))
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn nested_groups_execute() {
    let engine = engine_with_users().await;
    users(&engine)
        .insert(vec![
            Row::new().set("name", "Alice").set("age", 34_i64),
            Row::new().set("name", "Bob").set("age", 41_i64),
        ])
        .await
        .unwrap();

    let rows = users(&engine)
        .where_eq("name", "Alice")
        .or_where_group(|q| q.where_eq("name", "Bob").where_operator("age", ">", 40_i64))
        .get()
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn aggregates_count_and_sum() {
    let engine = engine_with_users().await;
    users(&engine)
        .insert(vec![
            Row::new().set("name", "Alice").set("score", 1.5_f64),
            Row::new().set("name", "Bob").set("score", 2.5_f64),
        ])
        .await
        .unwrap();

    assert_eq!(users(&engine).count().await.unwrap(), 2);
    assert_eq!(users(&engine).sum("score").await.unwrap(), Some(4.0));
    assert!(users(&engine).exists().await.unwrap());
    assert!(!users(&engine)
        .where_eq("name", "Nobody")
        .exists()
        .await
        .unwrap());
}

#[tokio::test]
async fn pluck_and_value_read_columns() {
    let engine = engine_with_users().await;
    users(&engine)
        .insert(vec![
            Row::new().set("name", "Alice"),
            Row::new().set("name", "Bob"),
        ])
        .await
        .unwrap();

    let names = users(&engine).order_by_asc("id").pluck("name").await.unwrap();
    assert_eq!(
        names,
        vec![
            SqlValue::Text(String::from("Alice")),
            SqlValue::Text(String::from("Bob")),
        ]
    );

    let first = users(&engine)
        .order_by_asc("id")
        .value("name")
        .await
        .unwrap();
    assert_eq!(first, Some(SqlValue::Text(String::from("Alice"))));
}

#[tokio::test]
async fn update_and_delete_scope_by_where() {
    let engine = engine_with_users().await;
    users(&engine)
        .insert(vec![
            Row::new().set("name", "Alice").set("age", 34_i64),
            Row::new().set("name", "Bob").set("age", 41_i64),
        ])
        .await
        .unwrap();

    let updated = users(&engine)
        .where_eq("name", "Alice")
        .update(Row::new().set("age", 35_i64))
        .await
        .unwrap();
    assert_eq!(updated, 1);

    let age = users(&engine)
        .where_eq("name", "Alice")
        .value("age")
        .await
        .unwrap();
    assert_eq!(age, Some(SqlValue::Int(35)));

    let deleted = users(&engine)
        .where_eq("name", "Bob")
        .delete()
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(users(&engine).count().await.unwrap(), 1);
}

#[tokio::test]
async fn null_values_round_trip() {
    let engine = engine_with_users().await;
    users(&engine)
        .insert(vec![Row::new().set("name", "Alice").set("age", SqlValue::Null)])
        .await
        .unwrap();

    let rows = users(&engine).where_null("age").get().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("age"), Some(&SqlValue::Null));

    let none = users(&engine).where_not_null("age").get().await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn find_reads_by_id() {
    let engine = engine_with_users().await;
    let id = users(&engine)
        .insert_and_get_id(Row::new().set("name", "Alice"))
        .await
        .unwrap();

    let row = users(&engine).find(id).await.unwrap().unwrap();
    assert_eq!(row.get("name"), Some(&SqlValue::Text(String::from("Alice"))));

    let missing = users(&engine).find(999_i64).await.unwrap();
    assert!(missing.is_none());
}
