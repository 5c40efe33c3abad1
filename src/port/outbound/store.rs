//! Persistence port for orders and line items.

use std::future::Future;

use crate::domain::{LineItem, LineItemKey, NewOrder, OrderCreated, OrderId, OrderLine};
use crate::error::Result;

/// Storage operations, one per action. Each call issues exactly one
/// statement (or one transaction) against the store.
pub trait OrderStore: Send + Sync {
    /// Insert an order and return its generated id.
    fn create_order(&self, order: &NewOrder) -> impl Future<Output = Result<OrderCreated>> + Send;

    /// Insert a line item and return the stored row.
    fn add_item(&self, item: &LineItem) -> impl Future<Output = Result<LineItem>> + Send;

    /// Delete a line item. Returns rows affected.
    fn remove_item(&self, key: &LineItemKey) -> impl Future<Output = Result<usize>> + Send;

    /// Set the quantity of an existing line item. Returns rows affected.
    fn update_item(&self, item: &LineItem) -> impl Future<Output = Result<usize>> + Send;

    /// All lines of an order joined with the order header and book title.
    fn list_order(&self, order_id: OrderId) -> impl Future<Output = Result<Vec<OrderLine>>> + Send;

    /// Delete an order and its line items atomically. Returns rows affected.
    fn delete_order(&self, order_id: OrderId) -> impl Future<Output = Result<usize>> + Send;
}
