//! SQLite order store implementation.
//!
//! Persists orders and line items in the booktown database using Diesel.

use diesel::prelude::*;

use super::database::connection::DbPool;
use super::database::model::{LineItemRow, NewOrderRow, OrderLineRow};
use super::database::schema::{books, line_items, orders};
use super::executor::QueryExecutor;
use crate::domain::{
    BookId, LineItem, LineItemKey, NewOrder, OrderCreated, OrderId, OrderLine,
};
use crate::error::Result;
use crate::port::outbound::store::OrderStore;

/// SQLite-backed order store.
pub struct SqliteOrderStore {
    executor: QueryExecutor,
}

impl SqliteOrderStore {
    /// Create a new SQLite order store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self {
            executor: QueryExecutor::new(pool),
        }
    }

    fn item_to_row(item: &LineItem) -> LineItemRow {
        LineItemRow {
            order_id: item.key.order_id.get(),
            book_id: item.key.book_id.get(),
            quantity: item.quantity,
        }
    }

    fn item_from_row(row: LineItemRow) -> LineItem {
        LineItem {
            key: LineItemKey::new(OrderId::new(row.order_id), BookId::new(row.book_id)),
            quantity: row.quantity,
        }
    }

    fn line_from_row(row: OrderLineRow) -> OrderLine {
        OrderLine {
            order_id: OrderId::new(row.order_id),
            created: row.created,
            creator: row.creator,
            book_id: BookId::new(row.book_id),
            quantity: row.quantity,
            title: row.title,
        }
    }
}

impl OrderStore for SqliteOrderStore {
    async fn create_order(&self, order: &NewOrder) -> Result<OrderCreated> {
        let row = NewOrderRow {
            created: order.created.clone(),
            creator: order.creator.clone(),
        };

        let id: i32 = self.executor.run("insert order", |conn| {
            diesel::insert_into(orders::table)
                .values(&row)
                .returning(orders::id)
                .get_result(conn)
        })?;

        Ok(OrderCreated {
            id: OrderId::new(id),
        })
    }

    async fn add_item(&self, item: &LineItem) -> Result<LineItem> {
        let row = Self::item_to_row(item);

        let stored: LineItemRow = self.executor.run("insert line item", |conn| {
            diesel::insert_into(line_items::table)
                .values(&row)
                .returning(LineItemRow::as_returning())
                .get_result(conn)
        })?;

        Ok(Self::item_from_row(stored))
    }

    async fn remove_item(&self, key: &LineItemKey) -> Result<usize> {
        let pk = (key.order_id.get(), key.book_id.get());
        self.executor.run("delete line item", |conn| {
            diesel::delete(line_items::table.find(pk)).execute(conn)
        })
    }

    async fn update_item(&self, item: &LineItem) -> Result<usize> {
        let pk = (item.key.order_id.get(), item.key.book_id.get());
        let quantity = item.quantity;
        self.executor.run("update line item", |conn| {
            diesel::update(line_items::table.find(pk))
                .set(line_items::quantity.eq(quantity))
                .execute(conn)
        })
    }

    async fn list_order(&self, order_id: OrderId) -> Result<Vec<OrderLine>> {
        let id = order_id.get();
        let rows: Vec<OrderLineRow> = self.executor.run("list order", |conn| {
            orders::table
                .inner_join(line_items::table.inner_join(books::table))
                .filter(orders::id.eq(id))
                .select((
                    line_items::order_id,
                    orders::created,
                    orders::creator,
                    line_items::book_id,
                    line_items::quantity,
                    books::title,
                ))
                .load(conn)
        })?;

        Ok(rows.into_iter().map(Self::line_from_row).collect())
    }

    async fn delete_order(&self, order_id: OrderId) -> Result<usize> {
        let id = order_id.get();
        self.executor.run("delete order", |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                let items = diesel::delete(line_items::table.filter(line_items::order_id.eq(id)))
                    .execute(conn)?;
                let headers = diesel::delete(orders::table.find(id)).execute(conn)?;
                Ok(items + headers)
            })
        })
    }
}
