//! Command-line interface definitions.
//!
//! One invocation performs one action. Flags mirror the booktown order
//! tool: `-a/--action` plus the numeric `-i/--orderId`, `-b/--bookId` and
//! `-q/--quantity`.

use std::path::PathBuf;

use clap::Parser;

use crate::application::OrderOptions;
use crate::domain::Action;

/// Create orders and edit their line items in the booktown database.
#[derive(Parser, Debug)]
#[command(name = "orders")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Action to take [create, addItem, removeItem, updateItem, list, delete]
    #[arg(short = 'a', long = "action")]
    pub action: String,

    /// Order id to operate on
    #[arg(short = 'i', long = "orderId")]
    pub order_id: Option<i32>,

    /// Book id to operate on
    #[arg(short = 'b', long = "bookId")]
    pub book_id: Option<i32>,

    /// The quantity of the book
    #[arg(short = 'q', long = "quantity")]
    pub quantity: Option<i32>,

    /// Path to configuration file [default: ~/.booktown/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Database URL, overriding config and DATABASE_URL
    #[arg(long)]
    pub database: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    #[must_use]
    pub fn action(&self) -> Action {
        Action::from(self.action.as_str())
    }

    #[must_use]
    pub const fn options(&self) -> OrderOptions {
        OrderOptions {
            order_id: self.order_id,
            book_id: self.book_id,
            quantity: self.quantity,
        }
    }
}
