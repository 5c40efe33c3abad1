//! Recording order store for dispatcher tests.

use parking_lot::Mutex;

use crate::domain::{LineItem, LineItemKey, NewOrder, OrderCreated, OrderId, OrderLine};
use crate::error::{Error, Result};
use crate::port::outbound::store::OrderStore;

/// A store call, as observed by [`RecordingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    CreateOrder(NewOrder),
    AddItem(LineItem),
    RemoveItem(LineItemKey),
    UpdateItem(LineItem),
    ListOrder(OrderId),
    DeleteOrder(OrderId),
}

/// Store that records calls and answers with canned values.
#[derive(Debug, Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    lines: Vec<OrderLine>,
    fail_with: Option<String>,
}

impl RecordingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `list_order` with these lines.
    #[must_use]
    pub fn with_lines(mut self, lines: Vec<OrderLine>) -> Self {
        self.lines = lines;
        self
    }

    /// Fail every call with a database error carrying `message`.
    #[must_use]
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: StoreCall) -> Result<()> {
        self.calls.lock().push(call);
        match &self.fail_with {
            Some(message) => Err(Error::Database(message.clone())),
            None => Ok(()),
        }
    }
}

impl OrderStore for RecordingStore {
    async fn create_order(&self, order: &NewOrder) -> Result<OrderCreated> {
        self.record(StoreCall::CreateOrder(order.clone()))?;
        Ok(OrderCreated {
            id: OrderId::new(1),
        })
    }

    async fn add_item(&self, item: &LineItem) -> Result<LineItem> {
        self.record(StoreCall::AddItem(*item))?;
        Ok(*item)
    }

    async fn remove_item(&self, key: &LineItemKey) -> Result<usize> {
        self.record(StoreCall::RemoveItem(*key))?;
        Ok(1)
    }

    async fn update_item(&self, item: &LineItem) -> Result<usize> {
        self.record(StoreCall::UpdateItem(*item))?;
        Ok(1)
    }

    async fn list_order(&self, order_id: OrderId) -> Result<Vec<OrderLine>> {
        self.record(StoreCall::ListOrder(order_id))?;
        Ok(self.lines.clone())
    }

    async fn delete_order(&self, order_id: OrderId) -> Result<usize> {
        self.record(StoreCall::DeleteOrder(order_id))?;
        Ok(1)
    }
}
