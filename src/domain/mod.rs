//! Order-management domain types.
//!
//! Orders, line items and books are owned by the relational store; this
//! module only describes the values that flow through one invocation.

pub mod action;
pub mod field;
pub mod id;
pub mod order;
pub mod record;

pub use action::Action;
pub use field::Field;
pub use id::{BookId, OrderId};
pub use order::{LineItem, LineItemKey, NewOrder, OrderCreated, OrderLine};
pub use record::{Record, ResultSet};
