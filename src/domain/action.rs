//! The single operation requested per invocation.

use std::fmt;

/// Order-management action.
///
/// Names match exactly and case-sensitively. Anything else becomes
/// [`Action::Unsupported`], which is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create,
    AddItem,
    RemoveItem,
    UpdateItem,
    List,
    Delete,
    Unsupported(String),
}

impl Action {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Create => "create",
            Self::AddItem => "addItem",
            Self::RemoveItem => "removeItem",
            Self::UpdateItem => "updateItem",
            Self::List => "list",
            Self::Delete => "delete",
            Self::Unsupported(name) => name,
        }
    }

}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        match name {
            "create" => Self::Create,
            "addItem" => Self::AddItem,
            "removeItem" => Self::RemoveItem,
            "updateItem" => Self::UpdateItem,
            "list" => Self::List,
            "delete" => Self::Delete,
            other => Self::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
