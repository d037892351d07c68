//! Compiles the same query against several dialects and prints the SQL.

use quarry_sql::dialect::{Dialect, MysqlDialect, PostgresDialect};
use quarry_sql::{Grammar, QueryBuilder, Row};

fn main() -> quarry_sql::Result<()> {
    let query = QueryBuilder::table("orders")
        .select(&["orders.id", "customers.name AS customer"])
        .join("customers", "orders.customer_id", "=", "customers.id")
        .where_operator("total", ">=", 100_i64)
        .or_where_group(|q| q.where_eq("status", "vip").where_not_null("approved_at"))
        .order_by_desc("orders.id")
        .limit(20)?;

    let (sql, params) = Grammar::generic().compile_select(&query)?;
    println!("generic : {sql} ({} params)", params.len());

    let (sql, _) = Grammar::new(&MysqlDialect).compile_select(&query)?;
    println!("mysql   : {sql}");

    let grammar = Grammar::new(&PostgresDialect);
    let (sql, _) = grammar.compile_select(&query)?;
    println!("postgres: {}", grammar.dialect().prepare_sql(&sql));

    let rows = vec![
        Row::new().set("sku", "A-1").set("qty", 3_i64),
        Row::new().set("sku", "B-2").set("qty", 1_i64),
    ];
    let (sql, params) = Grammar::generic().compile_insert(&QueryBuilder::table("items"), &rows)?;
    println!("insert  : {sql} ({} params)", params.len());

    Ok(())
}
