//! Offset / last-page bookkeeping for list endpoints.

use crate::domain::errors::{CoreError, CoreResult};
use crate::domain::pagination::PaginationView;

/// Mutable pagination state for a single list request.
///
/// `offset` and `last_page` are recomputed eagerly by every setter, so the
/// getters are plain reads and never observe stale values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    /// Total number of items across all pages.
    total: u64,
    /// Number of items per page (always > 0).
    per_page: u64,
    /// 1-indexed current page (always > 0).
    page: u64,
    /// Offset to pass to the data-access query.
    offset: u64,
    /// Number of the last page; 0 for an empty collection.
    last_page: u64,
}

impl Paginator {
    /// Creates a paginator and computes its derived values.
    ///
    /// Fails with `InvalidArgument` if `per_page` or `page` is zero.
    pub fn new(total: u64, per_page: u64, page: u64) -> CoreResult<Self> {
        validate_per_page(per_page)?;
        validate_page(page)?;

        let mut paginator = Self {
            total,
            per_page,
            page,
            offset: 0,
            last_page: 0,
        };
        paginator.recalculate()?;
        Ok(paginator)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    pub fn set_total(&mut self, total: u64) -> CoreResult<()> {
        self.apply(|p| p.total = total)
    }

    pub fn set_per_page(&mut self, per_page: u64) -> CoreResult<()> {
        validate_per_page(per_page)?;
        self.apply(|p| p.per_page = per_page)
    }

    pub fn set_page(&mut self, page: u64) -> CoreResult<()> {
        validate_page(page)?;
        self.apply(|p| p.page = page)
    }

    /// Freezes the current values into a view with next/prev page numbers.
    pub fn view(&self) -> PaginationView {
        PaginationView::snapshot(self)
    }

    /// Applies a mutation and recomputes; on failure the previous values are kept.
    fn apply(&mut self, mutate: impl FnOnce(&mut Self)) -> CoreResult<()> {
        let mut next = self.clone();
        mutate(&mut next);
        next.recalculate()?;
        *self = next;
        Ok(())
    }

    fn recalculate(&mut self) -> CoreResult<()> {
        if self.per_page == 0 {
            return Err(CoreError::illegal_state(
                "per page must be set before calculating pagination",
            ));
        }
        if self.page == 0 {
            return Err(CoreError::illegal_state(
                "page must be set before calculating pagination",
            ));
        }

        self.offset = (self.page - 1).checked_mul(self.per_page).ok_or_else(|| {
            CoreError::invalid_argument(format!(
                "offset for page {} with {} per page overflows",
                self.page, self.per_page
            ))
        })?;
        self.last_page = self.total.div_ceil(self.per_page);
        Ok(())
    }
}

fn validate_per_page(per_page: u64) -> CoreResult<()> {
    if per_page == 0 {
        return Err(CoreError::invalid_argument(
            "per page value must be a positive integer",
        ));
    }
    Ok(())
}

fn validate_page(page: u64) -> CoreResult<()> {
    if page == 0 {
        return Err(CoreError::invalid_argument(
            "page value must be a positive integer",
        ));
    }
    Ok(())
}
