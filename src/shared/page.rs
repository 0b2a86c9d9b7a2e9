//! Pagination — the `{offset, limit, total, count, results}` envelope and the
//! query that requests it.

use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::shared::ResourceKind;

/// Default page size for character listings.
pub const DEFAULT_CHARACTER_LIMIT: u32 = 20;

/// Default page size for comic listings.
pub const DEFAULT_COMIC_LIMIT: u32 = 10;

/// Default page size for event listings.
pub const DEFAULT_EVENT_LIMIT: u32 = 10;

/// Largest `limit` the upstream accepts.
pub const MAX_PAGE_LIMIT: u32 = 100;

// ─── Page ────────────────────────────────────────────────────────────────────

/// One page of a listing, in the upstream's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub offset: u32,
    pub limit: u32,
    pub total: u32,
    pub count: u32,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Check the envelope's internal consistency.
    ///
    /// `count` must equal the number of results and may not exceed `limit`.
    /// A page reaching past `total` is tolerated (the catalog can change
    /// between calls) but logged.
    pub fn check_invariants(&self) -> Result<(), SdkError> {
        if self.count as usize != self.results.len() {
            return Err(SdkError::Parse(format!(
                "page count {} does not match {} results",
                self.count,
                self.results.len()
            )));
        }
        if self.count > self.limit {
            return Err(SdkError::Parse(format!(
                "page count {} exceeds limit {}",
                self.count, self.limit
            )));
        }
        if self.offset.saturating_add(self.count) > self.total {
            tracing::warn!(
                offset = self.offset,
                count = self.count,
                total = self.total,
                "Page extends past reported total"
            );
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn has_next(&self) -> bool {
        self.next_offset().is_some()
    }

    /// Offset of the previous page, clamped at zero.
    pub fn previous_offset(&self) -> Option<u32> {
        if self.has_previous() {
            Some(self.offset.saturating_sub(self.limit))
        } else {
            None
        }
    }

    /// Offset of the next page, or `None` once `total` is reached.
    pub fn next_offset(&self) -> Option<u32> {
        let next = self.offset.saturating_add(self.count);
        if self.count > 0 && next < self.total {
            Some(next)
        } else {
            None
        }
    }

    /// Convert every result, keeping the pagination fields.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            offset: self.offset,
            limit: self.limit,
            total: self.total,
            count: self.count,
            results: self.results.into_iter().map(f).collect(),
        }
    }

    /// Fallible [`Page::map`]; the first error aborts the whole page.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let results = self.results.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(Page {
            offset: self.offset,
            limit: self.limit,
            total: self.total,
            count: self.count,
            results,
        })
    }
}

// ─── Envelope ────────────────────────────────────────────────────────────────

/// Top-level response wrapper: `{ code, status, data: { ...page } }`.
///
/// Detail lookups use the same wrapper with at most one result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Numeric on success; some upstream errors send a string code.
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "attributionText", default)]
    pub attribution_text: Option<String>,
    pub data: Page<T>,
}

// ─── PageQuery ───────────────────────────────────────────────────────────────

/// A listing request: resource kind, optional prefix search and window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub kind: ResourceKind,
    /// `None` (never `Some("")`) when no search term was given.
    pub search_prefix: Option<String>,
    pub offset: u32,
    pub limit: u32,
}

impl PageQuery {
    /// A first-page query with the kind's default page size.
    pub fn new(kind: ResourceKind) -> Self {
        let limit = match kind {
            ResourceKind::Character => DEFAULT_CHARACTER_LIMIT,
            ResourceKind::Comic => DEFAULT_COMIC_LIMIT,
            ResourceKind::Event => DEFAULT_EVENT_LIMIT,
        };
        Self {
            kind,
            search_prefix: None,
            offset: 0,
            limit,
        }
    }

    pub fn characters() -> Self {
        Self::new(ResourceKind::Character)
    }

    pub fn comics() -> Self {
        Self::new(ResourceKind::Comic)
    }

    pub fn events() -> Self {
        Self::new(ResourceKind::Event)
    }

    /// Constrain results by name/title prefix. A blank term clears the filter.
    pub fn search(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.search_prefix = if prefix.trim().is_empty() {
            None
        } else {
            Some(prefix)
        };
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Jump to a 1-based page number using the current `limit`.
    pub fn page(mut self, page: u32) -> Self {
        self.offset = page.max(1).saturating_sub(1).saturating_mul(self.limit);
        self
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if self.limit == 0 || self.limit > MAX_PAGE_LIMIT {
            return Err(SdkError::Validation(format!(
                "limit must be between 1 and {}, got {}",
                MAX_PAGE_LIMIT, self.limit
            )));
        }
        if self.search_prefix.is_some() && self.kind.prefix_filter_key().is_none() {
            return Err(SdkError::Validation(format!(
                "{} listings do not support prefix search",
                self.kind
            )));
        }
        Ok(())
    }

    /// Listing parameters, in the order they are sent (after the signature).
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let (Some(key), Some(prefix)) = (self.kind.prefix_filter_key(), &self.search_prefix) {
            params.push((key, prefix.clone()));
        }
        if self.kind == ResourceKind::Comic {
            params.push(("orderBy", "onsaleDate".to_string()));
            params.push(("format", "comic".to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(offset: u32, limit: u32, total: u32, count: u32) -> Page<u32> {
        Page {
            offset,
            limit,
            total,
            count,
            results: (0..count).collect(),
        }
    }

    #[test]
    fn test_default_limits() {
        assert_eq!(PageQuery::characters().limit, 20);
        assert_eq!(PageQuery::comics().limit, 10);
        assert_eq!(PageQuery::events().limit, 10);
    }

    #[test]
    fn test_empty_search_omits_prefix_param() {
        let q = PageQuery::characters().search("");
        assert_eq!(q.search_prefix, None);
        assert!(q.query_params().iter().all(|(k, _)| *k != "nameStartsWith"));
    }

    #[test]
    fn test_blank_search_clears_filter() {
        let q = PageQuery::characters().search("   ");
        assert_eq!(q.search_prefix, None);
        assert!(q.query_params().iter().all(|(k, _)| *k != "nameStartsWith"));

        let q = PageQuery::comics().search("avengers").search("\t\n");
        assert_eq!(q.search_prefix, None);
        assert!(q.query_params().iter().all(|(k, _)| *k != "titleStartsWith"));
    }

    #[test]
    fn test_character_search_uses_name_prefix() {
        let q = PageQuery::characters().search("Spider");
        assert_eq!(
            q.query_params(),
            vec![
                ("offset", "0".to_string()),
                ("limit", "20".to_string()),
                ("nameStartsWith", "Spider".to_string()),
            ]
        );
    }

    #[test]
    fn test_comic_params_always_order_and_format() {
        let q = PageQuery::comics();
        assert_eq!(
            q.query_params(),
            vec![
                ("offset", "0".to_string()),
                ("limit", "10".to_string()),
                ("orderBy", "onsaleDate".to_string()),
                ("format", "comic".to_string()),
            ]
        );

        let q = PageQuery::comics().search("avengers").offset(10);
        let params = q.query_params();
        assert!(params.contains(&("titleStartsWith", "avengers".to_string())));
        assert!(params.contains(&("offset", "10".to_string())));
    }

    #[test]
    fn test_validate_limit_bounds() {
        assert!(PageQuery::events().limit(0).validate().is_err());
        assert!(PageQuery::events().limit(101).validate().is_err());
        assert!(PageQuery::events().limit(100).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_event_search() {
        let err = PageQuery::events().search("war").validate().unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_page_number_to_offset() {
        assert_eq!(PageQuery::characters().page(1).offset, 0);
        assert_eq!(PageQuery::characters().page(3).offset, 40);
        assert_eq!(PageQuery::characters().page(0).offset, 0);
        assert_eq!(PageQuery::comics().limit(5).page(4).offset, 15);
    }

    #[test]
    fn test_page_navigation() {
        let first = page(0, 10, 23, 10);
        assert!(!first.has_previous());
        assert_eq!(first.previous_offset(), None);
        assert_eq!(first.next_offset(), Some(10));

        let last = page(20, 10, 23, 3);
        assert_eq!(last.previous_offset(), Some(10));
        assert_eq!(last.next_offset(), None);
        assert!(!last.has_next());

        let odd = page(5, 10, 23, 10);
        assert_eq!(odd.previous_offset(), Some(0));
    }

    #[test]
    fn test_empty_page_has_no_next() {
        let empty = page(0, 10, 0, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.next_offset(), None);
    }

    #[test]
    fn test_invariants() {
        assert!(page(0, 10, 23, 10).check_invariants().is_ok());

        let mut bad = page(0, 10, 23, 3);
        bad.count = 4;
        assert!(bad.check_invariants().is_err());

        let over = Page {
            offset: 0,
            limit: 2,
            total: 10,
            count: 3,
            results: vec![1, 2, 3],
        };
        assert!(over.check_invariants().is_err());

        // Past total is tolerated.
        assert!(page(20, 10, 22, 5).check_invariants().is_ok());
    }

    #[test]
    fn test_try_map_keeps_window() {
        let p = page(10, 10, 23, 2);
        let mapped: Page<String> = p.try_map(|n| Ok::<_, ()>(n.to_string())).unwrap();
        assert_eq!(mapped.offset, 10);
        assert_eq!(mapped.total, 23);
        assert_eq!(mapped.results, vec!["0".to_string(), "1".to_string()]);
    }
}
