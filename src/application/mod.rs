//! Application services (use cases).
//!
//! Turns a parsed invocation into exactly one store operation.

pub mod dispatch;
pub mod options;
pub mod precondition;

pub use dispatch::{dispatch, Context, Outcome};
pub use options::OrderOptions;
