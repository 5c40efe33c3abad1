//! Result rows addressed by column name.

use super::order::{LineItem, OrderCreated, OrderLine};

/// A row whose values can be looked up by column name.
///
/// `None` means the column is absent from the row or holds NULL.
pub trait Record: Send {
    fn field(&self, column: &str) -> Option<String>;
}

/// Rows returned by one statement, plus the columns the caller wants shown.
pub struct ResultSet {
    columns: Option<&'static [&'static str]>,
    rows: Vec<Box<dyn Record>>,
}

impl ResultSet {
    /// A result with nothing to print.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            columns: None,
            rows: Vec::new(),
        }
    }

    /// Rows to print under the given columns, in their original order.
    pub fn new<R>(columns: &'static [&'static str], rows: Vec<R>) -> Self
    where
        R: Record + 'static,
    {
        Self {
            columns: Some(columns),
            rows: rows
                .into_iter()
                .map(|r| Box::new(r) as Box<dyn Record>)
                .collect(),
        }
    }

    #[must_use]
    pub fn columns(&self) -> Option<&'static [&'static str]> {
        self.columns
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &dyn Record> {
        self.rows.iter().map(|row| &**row)
    }
}

impl std::fmt::Debug for ResultSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultSet")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .finish()
    }
}

impl Record for OrderCreated {
    fn field(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            _ => None,
        }
    }
}

impl Record for LineItem {
    fn field(&self, column: &str) -> Option<String> {
        match column {
            "order_id" => Some(self.key.order_id.to_string()),
            "book_id" => Some(self.key.book_id.to_string()),
            "quantity" => Some(self.quantity.to_string()),
            _ => None,
        }
    }
}

impl Record for OrderLine {
    fn field(&self, column: &str) -> Option<String> {
        match column {
            "order_id" => Some(self.order_id.to_string()),
            "created" => Some(self.created.clone()),
            "creator" => self.creator.clone(),
            "book_id" => Some(self.book_id.to_string()),
            "quantity" => Some(self.quantity.to_string()),
            "title" => Some(self.title.clone()),
            _ => None,
        }
    }
}
