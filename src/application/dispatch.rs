//! Action dispatch: one action, one store operation.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::options::OrderOptions;
use super::precondition::{ensure_required, is_number};
use crate::domain::{
    Action, BookId, Field, LineItem, LineItemKey, NewOrder, OrderId, ResultSet,
};
use crate::error::Result;
use crate::port::outbound::store::OrderStore;

/// Columns printed after `create`.
pub const CREATE_COLUMNS: &[&str] = &["id"];
/// Columns printed after `addItem`.
pub const ADD_ITEM_COLUMNS: &[&str] = &["order_id", "book_id", "quantity"];
/// Columns printed by `list`.
pub const LIST_COLUMNS: &[&str] = &[
    "order_id", "created", "creator", "book_id", "quantity", "title",
];

/// Ambient values an action may record.
#[derive(Debug, Clone)]
pub struct Context {
    pub creator: Option<String>,
    pub now: DateTime<Utc>,
}

impl Context {
    /// Current time and the invoking user's name from `USER` or `USERNAME`.
    #[must_use]
    pub fn from_env() -> Self {
        let creator = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
            .filter(|name| !name.is_empty());
        Self {
            creator,
            now: Utc::now(),
        }
    }
}

/// What a dispatched action produced.
#[derive(Debug)]
pub enum Outcome {
    /// The statement ran; print these rows (possibly nothing).
    Rows(ResultSet),
    /// The action name matched nothing. No statement was issued.
    Unsupported(String),
}

/// Validate the inputs `action` needs, then run its single store operation.
///
/// Validation failures return before the store is touched.
///
/// # Errors
/// Validation errors, or whatever the store reports.
pub async fn dispatch<S: OrderStore>(
    store: &S,
    action: &Action,
    options: &OrderOptions,
    context: Context,
) -> Result<Outcome> {
    info!(action = %action, "dispatching action");

    let result = match action {
        Action::Create => {
            let order = NewOrder::new(context.now, context.creator);
            let created = store.create_order(&order).await?;
            ResultSet::new(CREATE_COLUMNS, vec![created])
        }
        Action::AddItem => {
            let item = line_item(options)?;
            let stored = store.add_item(&item).await?;
            ResultSet::new(ADD_ITEM_COLUMNS, vec![stored])
        }
        Action::RemoveItem => {
            let [order_id, book_id] = ensure_required(
                options,
                [Field::OrderId, Field::BookId],
                [is_number, is_number],
            )?;
            let key = LineItemKey::new(OrderId::new(order_id), BookId::new(book_id));
            let removed = store.remove_item(&key).await?;
            debug!(removed, "line items removed");
            ResultSet::silent()
        }
        Action::UpdateItem => {
            let item = line_item(options)?;
            let updated = store.update_item(&item).await?;
            debug!(updated, "line items updated");
            ResultSet::silent()
        }
        Action::List => {
            let [order_id] = ensure_required(options, [Field::OrderId], [is_number])?;
            let lines = store.list_order(OrderId::new(order_id)).await?;
            ResultSet::new(LIST_COLUMNS, lines)
        }
        Action::Delete => {
            let [order_id] = ensure_required(options, [Field::OrderId], [is_number])?;
            let deleted = store.delete_order(OrderId::new(order_id)).await?;
            debug!(deleted, "order rows deleted");
            ResultSet::silent()
        }
        Action::Unsupported(name) => return Ok(Outcome::Unsupported(name.clone())),
    };

    Ok(Outcome::Rows(result))
}

fn line_item(options: &OrderOptions) -> Result<LineItem> {
    let [order_id, book_id, quantity] = ensure_required(
        options,
        [Field::OrderId, Field::BookId, Field::Quantity],
        [is_number, is_number, is_number],
    )?;
    Ok(LineItem {
        key: LineItemKey::new(OrderId::new(order_id), BookId::new(book_id)),
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::OrderLine;
    use crate::error::{Error, ValidationError};
    use crate::testkit::store::{RecordingStore, StoreCall};

    fn context() -> Context {
        Context {
            creator: Some("alice".into()),
            now: Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
        }
    }

    fn options(order_id: Option<i32>, book_id: Option<i32>, quantity: Option<i32>) -> OrderOptions {
        OrderOptions {
            order_id,
            book_id,
            quantity,
        }
    }

    fn key(order_id: i32, book_id: i32) -> LineItemKey {
        LineItemKey::new(OrderId::new(order_id), BookId::new(book_id))
    }

    #[tokio::test]
    async fn create_records_timestamp_and_creator() {
        let store = RecordingStore::new();
        let outcome = dispatch(&store, &Action::Create, &OrderOptions::default(), context())
            .await
            .unwrap();

        assert_eq!(
            store.calls(),
            vec![StoreCall::CreateOrder(NewOrder {
                created: "2026-03-04T05:06:07.000Z".into(),
                creator: Some("alice".into()),
            })]
        );
        match outcome {
            Outcome::Rows(rows) => {
                assert_eq!(rows.columns(), Some(CREATE_COLUMNS));
                assert_eq!(rows.rows().count(), 1);
            }
            Outcome::Unsupported(name) => panic!("create reported unsupported: {name}"),
        }
    }

    #[tokio::test]
    async fn add_item_requires_all_three_fields() {
        let store = RecordingStore::new();
        let err = dispatch(&store, &Action::AddItem, &options(Some(1), Some(2), None), context())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::ChecksFailed { ref fields }) if fields == &[Field::Quantity]
        ));
        assert!(store.calls().is_empty(), "no store call on invalid input");
    }

    #[tokio::test]
    async fn add_item_passes_line_item_through() {
        let store = RecordingStore::new();
        dispatch(&store, &Action::AddItem, &options(Some(1), Some(2), Some(5)), context())
            .await
            .unwrap();

        assert_eq!(
            store.calls(),
            vec![StoreCall::AddItem(LineItem {
                key: key(1, 2),
                quantity: 5
            })]
        );
    }

    #[tokio::test]
    async fn remove_item_prints_nothing() {
        let store = RecordingStore::new();
        let outcome = dispatch(&store, &Action::RemoveItem, &options(Some(1), Some(2), None), context())
            .await
            .unwrap();

        assert_eq!(store.calls(), vec![StoreCall::RemoveItem(key(1, 2))]);
        assert!(matches!(outcome, Outcome::Rows(ref rows) if rows.columns().is_none()));
    }

    #[tokio::test]
    async fn remove_item_requires_book_id() {
        let store = RecordingStore::new();
        let err = dispatch(&store, &Action::RemoveItem, &options(Some(1), None, Some(3)), context())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::ChecksFailed { ref fields }) if fields == &[Field::BookId]
        ));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn update_item_requires_quantity() {
        let store = RecordingStore::new();
        let result = dispatch(&store, &Action::UpdateItem, &options(Some(1), Some(2), None), context()).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn list_requires_order_id() {
        let store = RecordingStore::new();
        let result = dispatch(&store, &Action::List, &OrderOptions::default(), context()).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn list_returns_lines_under_list_columns() {
        let line = OrderLine {
            order_id: OrderId::new(1),
            created: "2026-03-04T05:06:07.000Z".into(),
            creator: Some("alice".into()),
            book_id: BookId::new(2),
            quantity: 5,
            title: "Dune".into(),
        };
        let store = RecordingStore::new().with_lines(vec![line]);
        let outcome = dispatch(&store, &Action::List, &options(Some(1), None, None), context())
            .await
            .unwrap();

        assert_eq!(store.calls(), vec![StoreCall::ListOrder(OrderId::new(1))]);
        match outcome {
            Outcome::Rows(rows) => {
                assert_eq!(rows.columns(), Some(LIST_COLUMNS));
                assert_eq!(rows.rows().count(), 1);
            }
            Outcome::Unsupported(name) => panic!("list reported unsupported: {name}"),
        }
    }

    #[tokio::test]
    async fn delete_issues_single_store_call() {
        let store = RecordingStore::new();
        dispatch(&store, &Action::Delete, &options(Some(7), None, None), context())
            .await
            .unwrap();

        assert_eq!(store.calls(), vec![StoreCall::DeleteOrder(OrderId::new(7))]);
    }

    #[tokio::test]
    async fn delete_requires_order_id() {
        let store = RecordingStore::new();
        let err = dispatch(&store, &Action::Delete, &options(None, Some(2), None), context())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::ChecksFailed { ref fields }) if fields == &[Field::OrderId]
        ));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn unsupported_action_never_touches_store() {
        let store = RecordingStore::new();
        let outcome = dispatch(
            &store,
            &Action::from("bogus"),
            &options(Some(1), Some(2), Some(3)),
            context(),
        )
        .await
        .unwrap();

        assert!(matches!(outcome, Outcome::Unsupported(ref name) if name == "bogus"));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let store = RecordingStore::new().failing("constraint failed");
        let result = dispatch(&store, &Action::Delete, &options(Some(1), None, None), context()).await;

        assert!(matches!(result, Err(Error::Database(ref m)) if m == "constraint failed"));
    }
}
