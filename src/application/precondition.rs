//! Required-field checks, evaluated before any statement is issued.

use crate::domain::Field;
use crate::error::ValidationError;

use super::options::OrderOptions;

/// Predicate over one field's value.
pub type Checker = fn(Option<i32>) -> bool;

/// Value is present and numeric.
#[must_use]
pub const fn is_number(value: Option<i32>) -> bool {
    value.is_some()
}

/// Check every field against its paired checker and return the values in
/// the order requested.
///
/// All checkers run before deciding; the error names every field that
/// failed. A field is required, so an absent value fails even when its
/// checker accepts it. `fields` and `checkers` always have the same length.
///
/// # Errors
/// [`ValidationError::ChecksFailed`] if any field is rejected.
pub fn ensure_required<const N: usize>(
    options: &OrderOptions,
    fields: [Field; N],
    checkers: [Checker; N],
) -> Result<[i32; N], ValidationError> {
    let mut resolved = [0; N];
    let mut failed = Vec::new();
    for ((slot, field), check) in resolved.iter_mut().zip(fields).zip(checkers) {
        let value = options.value(field);
        match value.filter(|_| check(value)) {
            Some(value) => *slot = value,
            None => failed.push(field),
        }
    }

    if failed.is_empty() {
        Ok(resolved)
    } else {
        Err(ValidationError::ChecksFailed { fields: failed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(order_id: Option<i32>, book_id: Option<i32>, quantity: Option<i32>) -> OrderOptions {
        OrderOptions {
            order_id,
            book_id,
            quantity,
        }
    }

    #[test]
    fn returns_values_in_requested_order() {
        let opts = options(Some(1), Some(2), Some(5));
        let values = ensure_required(
            &opts,
            [Field::Quantity, Field::OrderId, Field::BookId],
            [is_number, is_number, is_number],
        )
        .unwrap();
        assert_eq!(values, [5, 1, 2]);
    }

    #[test]
    fn reports_every_failed_field() {
        let opts = options(Some(1), None, None);
        let err = ensure_required(
            &opts,
            [Field::OrderId, Field::BookId, Field::Quantity],
            [is_number, is_number, is_number],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ChecksFailed {
                fields: vec![Field::BookId, Field::Quantity]
            }
        );
    }

    #[test]
    fn no_requirements_always_pass() {
        let values = ensure_required(&OrderOptions::default(), [], []).unwrap();
        assert_eq!(values, [0; 0]);
    }

    #[test]
    fn permissive_checker_still_requires_a_value() {
        fn anything(_: Option<i32>) -> bool {
            true
        }
        let err = ensure_required(&OrderOptions::default(), [Field::OrderId], [anything])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ChecksFailed {
                fields: vec![Field::OrderId]
            }
        );
    }

    #[test]
    fn zero_and_negative_values_are_numbers() {
        let opts = options(Some(0), Some(-4), None);
        let values =
            ensure_required(&opts, [Field::OrderId, Field::BookId], [is_number, is_number])
                .unwrap();
        assert_eq!(values, [0, -4]);
    }
}
