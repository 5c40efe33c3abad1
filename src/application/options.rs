//! Typed options record built once from the command line.

use crate::domain::Field;

/// Numeric inputs an action may require. Absent flags are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderOptions {
    pub order_id: Option<i32>,
    pub book_id: Option<i32>,
    pub quantity: Option<i32>,
}

impl OrderOptions {
    #[must_use]
    pub const fn value(&self, field: Field) -> Option<i32> {
        match field {
            Field::OrderId => self.order_id,
            Field::BookId => self.book_id,
            Field::Quantity => self.quantity,
        }
    }
}
