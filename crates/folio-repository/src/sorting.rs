//! Ordering rows by a [`Sort`].

use folio_core::{FolioError, FolioResult, Member, Sort, Team};
use std::cmp::Ordering;

/// Rows that can be ordered by named fields.
pub trait Sortable {
    /// Field names accepted in a [`Sort`].
    const FIELDS: &'static [&'static str];

    /// Compares two rows on `field`, or `None` if the field is unknown.
    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering>;
}

impl Sortable for Member {
    const FIELDS: &'static [&'static str] = &["id", "username", "age"];

    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "id" => Some(self.id.cmp(&other.id)),
            "username" => Some(self.username.cmp(&other.username)),
            "age" => Some(self.age.cmp(&other.age)),
            _ => None,
        }
    }
}

impl Sortable for Team {
    const FIELDS: &'static [&'static str] = &["id", "name"];

    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "id" => Some(self.id.cmp(&other.id)),
            "name" => Some(self.name.cmp(&other.name)),
            _ => None,
        }
    }
}

/// Checks that every field in `sort` is known to `T`.
pub fn check_sort<T: Sortable>(sort: &Sort) -> FolioResult<()> {
    match sort.orders().iter().find(|o| !T::FIELDS.contains(&o.field.as_str())) {
        Some(order) => Err(FolioError::invalid_argument(format!(
            "Cannot sort by unknown field '{}' (expected one of: {})",
            order.field,
            T::FIELDS.join(", ")
        ))),
        None => Ok(()),
    }
}

/// Sorts `rows` in place. The sort is stable, so rows tied on every order
/// keep their incoming order.
pub fn apply_sort<T: Sortable>(rows: &mut [T], sort: &Sort) -> FolioResult<()> {
    check_sort::<T>(sort)?;
    if sort.is_unsorted() {
        return Ok(());
    }

    rows.sort_by(|a, b| {
        sort.orders()
            .iter()
            .map(|order| {
                let ordering = a.compare_field(b, &order.field).unwrap_or(Ordering::Equal);
                if order.direction.is_ascending() {
                    ordering
                } else {
                    ordering.reverse()
                }
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    Ok(())
}
