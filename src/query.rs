//! # List Query Engine
//!
//! Pure filtering and pagination over a store snapshot. No locking, no
//! side effects: the same snapshot and state always produce the same
//! [`Page`], so the engine is safe to call concurrently and trivial to test.
//!
//! Filters compose with logical AND. The tag filter is an exact,
//! case-sensitive token match against the article's tag list; the search
//! filter is a case-sensitive substring check against title and content
//! (no tokenization, no ranking). Snapshot order — newest first — is
//! preserved through filtering and slicing.
//!
//! An out-of-range page is never an error: the requested page is clamped
//! into `[1, total_pages]` and the result is a valid (possibly empty) page.

use serde::Serialize;

use crate::model::Article;
use crate::nav::NavState;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a filtered listing, plus the pagination metadata the
/// rendering layer needs. Serializes with the camelCase field names of the
/// listing API's JSON body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub articles: Vec<Article>,
    /// Count of all articles matching the filters, across every page.
    pub total: usize,
    /// The page actually served, after clamping.
    pub page: usize,
    pub limit: usize,
    pub has_more: bool,
    pub total_pages: usize,
}

/// Filters `snapshot` by the state's tag and search, then slices out the
/// requested page.
///
/// `page_size` of zero is treated as one; a degenerate page size is a
/// caller bug, not something worth failing a listing over.
pub fn run(snapshot: Vec<Article>, state: &NavState, page_size: usize) -> Page {
    let limit = page_size.max(1);

    let matching: Vec<Article> = snapshot
        .into_iter()
        .filter(|article| matches(article, state))
        .collect();

    let total = matching.len();
    let total_pages = total_pages(total, limit);
    let page = state.page.clamp(1, total_pages);

    let start = (page - 1) * limit;
    let articles: Vec<Article> = matching.into_iter().skip(start).take(limit).collect();
    let has_more = page * limit < total;

    Page {
        articles,
        total,
        page,
        limit,
        has_more,
        total_pages,
    }
}

/// `ceil(total / limit)`, with a minimum of one so an empty result still
/// has a well-defined current page.
pub fn total_pages(total: usize, limit: usize) -> usize {
    let limit = limit.max(1);
    total.div_ceil(limit).max(1)
}

fn matches(article: &Article, state: &NavState) -> bool {
    if let Some(tag) = state.tag.as_deref() {
        if !tag.is_empty() && !article.has_tag(tag) {
            return false;
        }
    }
    if let Some(term) = state.search.as_deref() {
        if !term.is_empty()
            && !article.title.contains(term)
            && !article.content.contains(term)
        {
            return false;
        }
    }
    true
}
