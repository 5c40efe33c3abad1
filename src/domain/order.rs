//! Orders and their line items.

use chrono::{DateTime, SecondsFormat, Utc};

use super::id::{BookId, OrderId};

/// Order to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// ISO-8601 UTC timestamp, millisecond precision.
    pub created: String,
    pub creator: Option<String>,
}

impl NewOrder {
    #[must_use]
    pub fn new(created_at: DateTime<Utc>, creator: Option<String>) -> Self {
        Self {
            created: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            creator,
        }
    }
}

/// Identity of an inserted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderCreated {
    pub id: OrderId,
}

/// Identity of a line item. At most one line item exists per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineItemKey {
    pub order_id: OrderId,
    pub book_id: BookId,
}

impl LineItemKey {
    #[must_use]
    pub const fn new(order_id: OrderId, book_id: BookId) -> Self {
        Self { order_id, book_id }
    }
}

/// One book's quantity within an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub key: LineItemKey,
    pub quantity: i32,
}

/// A line of an order joined with its order header and book title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub created: String,
    pub creator: Option<String>,
    pub book_id: BookId,
    pub quantity: i32,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_order_uses_millisecond_utc_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let order = NewOrder::new(at, Some("alice".into()));
        assert_eq!(order.created, "2026-01-02T03:04:05.000Z");
        assert_eq!(order.creator.as_deref(), Some("alice"));
    }
}
