//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

use sea_orm::{EntityTrait, QuerySelect, Select};

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane defaults and convert to `u64`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }

    /// `(offset, limit)` for the normalized page
    pub fn offset_limit(self) -> (u64, u64) {
        let (idx, per) = self.normalize();
        (idx * per, per)
    }

    /// Build from optional query parameters; `None` when neither is given.
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Option<Self> {
        if page.is_none() && per_page.is_none() {
            return None;
        }
        let d = Self::default();
        Some(Self { page: page.unwrap_or(d.page), per_page: per_page.unwrap_or(d.per_page) })
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}

/// Apply an optional page window to a select.
pub fn apply<E: EntityTrait>(select: Select<E>, page: Option<Pagination>) -> Select<E> {
    match page {
        Some(p) => {
            let (offset, limit) = p.offset_limit();
            select.offset(offset).limit(limit)
        }
        None => select,
    }
}
