//! # API Facade
//!
//! [`ContentApi`] is the single entry point for the rendering layer. It is a
//! thin facade: raw, untrusted strings come in, typed results go out, and
//! all business logic stays in [`crate::store`], [`crate::query`] and
//! [`crate::nav`].
//!
//! The facade's one real job is boundary normalization:
//!
//! - raw query strings are decoded into a [`NavState`] (never fails, see
//!   [`crate::nav::decode`]);
//! - raw id strings are parsed into [`ArticleId`]s here and nowhere deeper,
//!   so the store only ever sees well-formed ids.
//!
//! Both error variants are recoverable at this boundary: callers map
//! `NotFound` to a "not found" response and `Validation` to a "bad input"
//! response. Nothing in here panics or exits.

use log::debug;

use crate::error::Result;
use crate::model::{Article, ArticleDraft, ArticleId, ArticlePatch};
use crate::nav::{self, NavState};
use crate::pagination;
use crate::query::{self, Page, DEFAULT_PAGE_SIZE};
use crate::store::ArticleStore;

/// Facade over the content repository.
///
/// Owns the store; constructed once at process start and shared (behind
/// `Arc` if needed) for the lifetime of the process.
#[derive(Debug)]
pub struct ContentApi {
    store: ArticleStore,
    page_size: usize,
}

impl Default for ContentApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentApi {
    pub fn new() -> Self {
        Self {
            store: ArticleStore::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            store: ArticleStore::new(),
            page_size: page_size.max(1),
        }
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    /// Serves a list request from a raw query string (`"page=2&tag=go"`).
    /// Malformed parameters degrade to defaults; this never fails.
    pub fn list(&self, raw_query: &str) -> Page {
        let state = nav::decode(raw_query);
        self.list_with(&state)
    }

    /// Serves a list request from an already-decoded state.
    pub fn list_with(&self, state: &NavState) -> Page {
        debug!(
            "list page={} tag={:?} search={:?}",
            state.page, state.tag, state.search
        );
        query::run(self.store.list_all(), state, self.page_size)
    }

    /// Page numbers for the navigation controls of `page`, using the
    /// default window width.
    pub fn page_window(&self, page: &Page) -> Vec<usize> {
        pagination::window(page.page, page.total_pages, pagination::DEFAULT_WINDOW)
    }

    pub fn create(&self, draft: ArticleDraft) -> Result<Article> {
        self.store.create(draft)
    }

    /// Detail lookup by raw id string.
    pub fn get(&self, raw_id: &str) -> Result<Article> {
        self.store.get(ArticleId::parse(raw_id)?)
    }

    pub fn update(&self, raw_id: &str, patch: ArticlePatch) -> Result<Article> {
        self.store.update(ArticleId::parse(raw_id)?, patch)
    }

    pub fn delete(&self, raw_id: &str) -> Result<()> {
        self.store.delete(ArticleId::parse(raw_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NewsdeskError;

    fn draft(title: &str, tags: &[&str]) -> ArticleDraft {
        ArticleDraft {
            title: title.into(),
            content: format!("Content for {title}"),
            author: "Ann".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_list_from_raw_query() {
        let api = ContentApi::with_page_size(2);
        for i in 0..3 {
            api.create(draft(&format!("Go {i}"), &["go"])).unwrap();
        }
        api.create(draft("Other", &[])).unwrap();

        let page = api.list("tag=go&page=2");
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.articles.len(), 1);
        assert!(!page.has_more);
    }

    #[test]
    fn test_list_with_garbage_params_defaults() {
        let api = ContentApi::new();
        api.create(draft("Solo", &[])).unwrap();
        let page = api.list("page=zzz&tag=&bogus=1");
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_malformed_id_reports_not_found() {
        let api = ContentApi::new();
        match api.get("definitely-not-a-uuid") {
            Err(NewsdeskError::NotFound(raw)) => assert_eq!(raw, "definitely-not-a-uuid"),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(api.delete("nope").is_err());
    }

    #[test]
    fn test_crud_round_trip_through_raw_ids() {
        let api = ContentApi::new();
        let created = api.create(draft("First", &["rust"])).unwrap();
        let id = created.id.to_string();

        let fetched = api.get(&id).unwrap();
        assert_eq!(fetched.title, "First");

        let patch = ArticlePatch {
            title: Some("Renamed".into()),
            ..Default::default()
        };
        assert_eq!(api.update(&id, patch).unwrap().title, "Renamed");

        api.delete(&id).unwrap();
        assert!(api.get(&id).is_err());
    }

    #[test]
    fn test_page_window_for_listing() {
        let api = ContentApi::with_page_size(1);
        for i in 0..8 {
            api.create(draft(&format!("A{i}"), &[])).unwrap();
        }
        let page = api.list("page=5");
        assert_eq!(page.total_pages, 8);
        assert_eq!(api.page_window(&page), vec![3, 4, 5, 6, 7]);
    }
}
