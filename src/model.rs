//! # Domain Model: Articles and Their Inputs
//!
//! This module defines the core data structures: [`Article`], its opaque
//! [`ArticleId`], and the two input types the store accepts — [`ArticleDraft`]
//! for creation and [`ArticlePatch`] for partial updates.
//!
//! ## Normalization
//!
//! Callers hand in whatever a web form produced. Before anything is stored:
//!
//! 1. **Required text fields** (title, content, author) are whitespace-trimmed.
//!    Empty-after-trim is a validation error, on create and on update alike.
//! 2. **Tags** are trimmed, empty tokens dropped, and duplicates removed with
//!    the first occurrence winning, so an article never carries the same tag
//!    twice and tag order stays meaningful.
//!
//! ## Identity
//!
//! Ids are v4 UUIDs wrapped in [`ArticleId`]. The wrapper keeps the id opaque
//! at the API surface: external callers only ever see and supply strings, and
//! [`ArticleId::parse`] is the single place a raw string becomes an id.
//! Ids are assigned by the store at creation and never reused, even after the
//! article is deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NewsdeskError, Result};

/// Opaque article identifier.
///
/// Renders as the hyphenated lowercase UUID form. Construct via
/// [`ArticleId::parse`] (boundary input) or let the store mint fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a raw id string, rejecting malformed input.
    ///
    /// A malformed id can never name a stored article, so the failure is
    /// reported as [`NewsdeskError::NotFound`] carrying the raw string.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.parse::<Uuid>()
            .map(Self)
            .map_err(|_| NewsdeskError::NotFound(raw.to_string()))
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single content record.
///
/// Wire field names are camelCase to match the JSON the listing API serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Builds a fresh article from an already-validated draft.
    /// Id and both timestamps are assigned here, nowhere else.
    pub(crate) fn from_draft(draft: ValidDraft) -> Self {
        let now = Utc::now();
        Self {
            id: ArticleId::generate(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if `tag` appears in this article's tag list (exact,
    /// case-sensitive token match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Input for creating an article.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ArticleDraft {
    /// Validates and normalizes the draft. Fails if any required field is
    /// empty after trimming.
    pub(crate) fn validate(self) -> Result<ValidDraft> {
        Ok(ValidDraft {
            title: require_text("title", &self.title)?,
            content: require_text("content", &self.content)?,
            author: require_text("author", &self.author)?,
            tags: normalize_tags(self.tags),
        })
    }
}

/// A draft that passed validation. Only constructible through
/// [`ArticleDraft::validate`], so the store never sees raw input.
#[derive(Debug, Clone)]
pub(crate) struct ValidDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
}

/// Partial update for an existing article.
///
/// `None` leaves the field unchanged. Supplied values obey create-time rules:
/// an explicit empty title/content/author is rejected, never stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ArticlePatch {
    /// Validates every supplied field up front, then merges onto `article`.
    ///
    /// Validation happens before the first write so a rejected patch leaves
    /// the article byte-for-byte unchanged. Id and `created_at` are never
    /// touched; `updated_at` is the caller's (store's) responsibility.
    pub(crate) fn apply(self, article: &mut Article) -> Result<()> {
        let title = self
            .title
            .as_deref()
            .map(|t| require_text("title", t))
            .transpose()?;
        let content = self
            .content
            .as_deref()
            .map(|c| require_text("content", c))
            .transpose()?;
        let author = self
            .author
            .as_deref()
            .map(|a| require_text("author", a))
            .transpose()?;

        if let Some(title) = title {
            article.title = title;
        }
        if let Some(content) = content {
            article.content = content;
        }
        if let Some(author) = author {
            article.author = author;
        }
        if let Some(tags) = self.tags {
            article.tags = normalize_tags(tags);
        }
        Ok(())
    }

    /// True when the patch supplies nothing at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.tags.is_none()
    }
}

/// Trims `value`; empty-after-trim is a validation error for `field`.
fn require_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NewsdeskError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

/// Trims tag tokens, drops empties, removes duplicates keeping first
/// occurrence order.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if !seen.iter().any(|s| s == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}
