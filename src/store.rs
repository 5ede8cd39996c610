//! # Article Store
//!
//! [`ArticleStore`] owns the mutable article collection for the lifetime of
//! the process. Nothing else in the crate holds articles; the query engine
//! and codec are pure functions over data the store hands out.
//!
//! ## Concurrency
//!
//! One `std::sync::Mutex` guards the whole collection. Article volume is
//! small, so lock hold time is at worst one `Vec` clone and simplicity wins
//! over fine-grained locking. All methods take `&self`, so a single store can
//! be shared behind `Arc` by concurrent callers.
//!
//! A poisoned lock is recovered rather than propagated: validation runs
//! before any write, so every mutation either completes or leaves the vector
//! exactly as it was, and a panicking thread cannot leave a half-applied
//! record behind.
//!
//! ## Ordering
//!
//! New articles are inserted at the head, so iteration order is
//! most-recent-first and the default listing shows newest articles first.
//! [`ArticleStore::list_all`] returns a snapshot: a point-in-time copy that
//! never observes mutations made after it was taken.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use log::{debug, info};

use crate::error::{NewsdeskError, Result};
use crate::model::{Article, ArticleDraft, ArticleId, ArticlePatch};

#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Mutex<Vec<Article>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Article>> {
        // Recover from poisoning: mutations validate before writing, so the
        // vector is always in a consistent state.
        self.articles
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Creates an article from `draft`, assigning a fresh id and setting both
    /// timestamps to now. The new article becomes the head of iteration
    /// order. Fails with `Validation` if a required field is empty after
    /// trimming.
    pub fn create(&self, draft: ArticleDraft) -> Result<Article> {
        let article = Article::from_draft(draft.validate()?);
        let mut articles = self.lock();
        articles.insert(0, article.clone());
        info!("created article {}", article.id);
        Ok(article)
    }

    /// Returns a copy of the article with the given id.
    pub fn get(&self, id: ArticleId) -> Result<Article> {
        let articles = self.lock();
        articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| NewsdeskError::NotFound(id.to_string()))
    }

    /// Merges the supplied fields of `patch` over the stored article and
    /// refreshes `updated_at`. Id and `created_at` are immutable. A patch
    /// with an invalid field fails with `Validation` and leaves the article
    /// unchanged. A patch supplying nothing is a no-op: the article is
    /// returned as stored and `updated_at` stays put, since no mutation
    /// happened.
    pub fn update(&self, id: ArticleId, patch: ArticlePatch) -> Result<Article> {
        let mut articles = self.lock();
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| NewsdeskError::NotFound(id.to_string()))?;
        if patch.is_empty() {
            return Ok(article.clone());
        }
        patch.apply(article)?;
        article.updated_at = Utc::now();
        debug!("updated article {id}");
        Ok(article.clone())
    }

    /// Removes the article with the given id. The id is retired, never
    /// reassigned, and a second delete of the same id fails with `NotFound`.
    pub fn delete(&self, id: ArticleId) -> Result<()> {
        let mut articles = self.lock();
        let pos = articles
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| NewsdeskError::NotFound(id.to_string()))?;
        articles.remove(pos);
        info!("deleted article {id}");
        Ok(())
    }

    /// Returns a point-in-time snapshot of the collection, newest first.
    /// Later store mutations are invisible to the returned copy.
    pub fn list_all(&self) -> Vec<Article> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
