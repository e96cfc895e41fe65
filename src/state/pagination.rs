//! Transaction list paging.
//!
//! The list page is addressed by a query string such as
//! `page=2&itemsPerPage=50`. Navigation is computed against the total
//! transaction count and is ignored until that count is known.

use std::fmt;

use crate::constants::{DEFAULT_PAGE, PAGE_SIZE_OPTIONS};

// ============================================================================
// Page Size
// ============================================================================

/// Allowed "items per page" values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    TwentyFive,
    Fifty,
    SeventyFive,
    Hundred,
}

impl PageSize {
    pub const ALL: [Self; 4] = [Self::TwentyFive, Self::Fifty, Self::SeventyFive, Self::Hundred];

    #[must_use]
    pub const fn value(&self) -> u64 {
        match self {
            Self::TwentyFive => PAGE_SIZE_OPTIONS[0],
            Self::Fifty => PAGE_SIZE_OPTIONS[1],
            Self::SeventyFive => PAGE_SIZE_OPTIONS[2],
            Self::Hundred => PAGE_SIZE_OPTIONS[3],
        }
    }

    /// The size for `value`, if it is one of the allowed options.
    #[must_use]
    pub fn from_value(value: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    /// Next option, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::TwentyFive => Self::Fifty,
            Self::Fifty => Self::SeventyFive,
            Self::SeventyFive => Self::Hundred,
            Self::Hundred => Self::TwentyFive,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ============================================================================
// List Page Query
// ============================================================================

/// Current page and page size of the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPageQuery {
    /// 1-based page number.
    pub page: u64,
    pub items_per_page: PageSize,
}

impl Default for ListPageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            items_per_page: PageSize::default(),
        }
    }
}

impl ListPageQuery {
    #[must_use]
    pub const fn new(page: u64, items_per_page: PageSize) -> Self {
        Self {
            page,
            items_per_page,
        }
    }

    /// Read `page` and `itemsPerPage` from a query string.
    ///
    /// A leading `?` is ignored. Absent, unparseable, non-positive or
    /// disallowed values fall back to the defaults (page 1, 25 per page).
    /// Pages beyond the last one are kept as given.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => {
                    if let Ok(page) = value.trim().parse::<u64>()
                        && page > 0
                    {
                        parsed.page = page;
                    } else {
                        tracing::debug!("Ignoring page '{value}'");
                    }
                }
                "itemsPerPage" => {
                    match value.trim().parse::<u64>().ok().and_then(PageSize::from_value) {
                        Some(size) => parsed.items_per_page = size,
                        None => tracing::debug!("Ignoring itemsPerPage '{value}'"),
                    }
                }
                _ => {}
            }
        }

        parsed
    }

    /// Query string of this page, e.g. `page=2&itemsPerPage=50`.
    #[must_use]
    pub fn to_query(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &self.page.to_string())
            .append_pair("itemsPerPage", &self.items_per_page.to_string())
            .finish()
    }

    /// Explorer path of this page, e.g. `/txs?page=2&itemsPerPage=50`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/txs?{}", self.to_query())
    }
}

/// Last page number for `total_count` items.
///
/// An empty list still has one (empty) page.
#[must_use]
pub const fn max_page(total_count: u64, items_per_page: PageSize) -> u64 {
    total_count.saturating_sub(1) / items_per_page.value() + 1
}

// ============================================================================
// Navigation
// ============================================================================

/// List navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Prev,
    Next,
    Last,
    ChangePageSize(PageSize),
}

/// Computes target pages for list navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListNavigator {
    pub query: ListPageQuery,
    /// Total transaction count, `None` until fetched.
    pub total_count: Option<u64>,
}

impl ListNavigator {
    #[must_use]
    pub const fn new(query: ListPageQuery) -> Self {
        Self {
            query,
            total_count: None,
        }
    }

    /// Last page, once the total count is known.
    #[must_use]
    pub fn max_page(&self) -> Option<u64> {
        self.total_count
            .map(|total| max_page(total, self.query.items_per_page))
    }

    /// Target query of `action`.
    ///
    /// # Returns
    ///
    /// `None` if the total count is unknown or the action would leave the
    /// query unchanged. `Next` and `Last` never move backwards from a page
    /// beyond the last one.
    #[must_use]
    pub fn navigate(&self, action: NavAction) -> Option<ListPageQuery> {
        let Some(max_page) = self.max_page() else {
            tracing::debug!("Ignoring {action:?} before the total count is known");
            return None;
        };
        let current = self.query;

        let target = match action {
            NavAction::First => ListPageQuery::new(1, current.items_per_page),
            NavAction::Prev => {
                ListPageQuery::new(current.page.saturating_sub(1).max(1), current.items_per_page)
            }
            NavAction::Next | NavAction::Last if current.page >= max_page => return None,
            NavAction::Next => ListPageQuery::new(current.page + 1, current.items_per_page),
            NavAction::Last => ListPageQuery::new(max_page, current.items_per_page),
            NavAction::ChangePageSize(size) => ListPageQuery::new(1, size),
        };

        (target != current).then_some(target)
    }

    /// Move to `query`.
    pub fn apply(&mut self, query: ListPageQuery) {
        self.query = query;
    }
}

// ============================================================================
// Tests
// ============================================================================
