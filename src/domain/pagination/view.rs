use crate::domain::pagination::Paginator;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Immutable snapshot of a paginator, extended with next/prev page numbers.
///
/// The view does not track its source: mutating the paginator afterwards
/// leaves an existing view unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    total: u64,
    per_page: u64,
    current_page: u64,
    last_page: u64,
    next_page: Option<u64>,
    prev_page: Option<u64>,
}

impl PaginationView {
    pub fn snapshot(paginator: &Paginator) -> Self {
        Self::from_parts(
            paginator.total(),
            paginator.per_page(),
            paginator.page(),
            paginator.last_page(),
        )
    }

    /// Builds a view from raw values; next/prev are derived from
    /// `current_page` and `last_page` only.
    pub fn from_parts(total: u64, per_page: u64, current_page: u64, last_page: u64) -> Self {
        let next_page = (last_page > current_page).then(|| current_page + 1);
        let prev_page = (current_page > 1).then(|| current_page - 1);

        Self {
            total,
            per_page,
            current_page,
            last_page,
            next_page,
            prev_page,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    pub fn next_page(&self) -> Option<u64> {
        self.next_page
    }

    pub fn prev_page(&self) -> Option<u64> {
        self.prev_page
    }

    /// Flat, snake_case projection used on the wire.
    pub fn projection(&self) -> PaginationProjection {
        PaginationProjection {
            total: self.total,
            per_page: self.per_page,
            current_page: self.current_page,
            last_page: self.last_page,
            next_page: self.next_page,
            prev_page: self.prev_page,
        }
    }
}

impl From<&Paginator> for PaginationView {
    fn from(paginator: &Paginator) -> Self {
        Self::snapshot(paginator)
    }
}

/// Serialized form of a `PaginationView`.
///
/// `next_page` / `prev_page` are always present and serialize as `null` when absent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct PaginationProjection {
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_page_has_next_but_no_prev() {
        let view = Paginator::new(100, 10, 1).unwrap().view();
        assert_eq!(view.next_page(), Some(2));
        assert_eq!(view.prev_page(), None);
    }

    #[test]
    fn last_page_has_prev_but_no_next() {
        let view = Paginator::new(100, 10, 10).unwrap().view();
        assert_eq!(view.next_page(), None);
        assert_eq!(view.prev_page(), Some(9));
    }

    #[test]
    fn empty_collection_has_neither() {
        let view = Paginator::new(0, 10, 1).unwrap().view();
        assert_eq!(view.last_page(), 0);
        assert_eq!(view.next_page(), None);
        assert_eq!(view.prev_page(), None);
    }

    #[test]
    fn snapshot_is_detached_from_paginator() {
        let mut paginator = Paginator::new(100, 10, 1).unwrap();
        let view = paginator.view();
        paginator.set_page(5).unwrap();
        paginator.set_total(7).unwrap();

        assert_eq!(view.current_page(), 1);
        assert_eq!(view.total(), 100);
        assert_eq!(view.next_page(), Some(2));
    }

    #[test]
    fn projection_uses_snake_case_names() {
        let projection = Paginator::new(100, 10, 2).unwrap().view().projection();
        assert_eq!(
            serde_json::to_value(projection).unwrap(),
            json!({
                "total": 100,
                "per_page": 10,
                "current_page": 2,
                "last_page": 10,
                "next_page": 3,
                "prev_page": 1
            })
        );

        let projection = Paginator::new(100, 10, 1).unwrap().view().projection();
        assert_eq!(
            serde_json::to_value(projection).unwrap()["prev_page"],
            serde_json::Value::Null
        );
    }
}
