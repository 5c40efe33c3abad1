//! Named input fields that actions may require.

use std::fmt;

/// A numeric command-line field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OrderId,
    BookId,
    Quantity,
}

impl Field {
    /// Long flag name as the operator types it.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::OrderId => "orderId",
            Self::BookId => "bookId",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}
