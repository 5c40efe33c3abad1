//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{line_items, orders};

/// Database row for an order (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub created: String,
    pub creator: Option<String>,
}

/// Database row for a line item.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = line_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LineItemRow {
    pub order_id: i32,
    pub book_id: i32,
    pub quantity: i32,
}

/// Row of the order listing join. Field order matches the select clause.
#[derive(Queryable, Debug, Clone)]
pub struct OrderLineRow {
    pub order_id: i32,
    pub created: String,
    pub creator: Option<String>,
    pub book_id: i32,
    pub quantity: i32,
    pub title: String,
}
