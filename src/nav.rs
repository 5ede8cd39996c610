//! # Navigation State Codec
//!
//! [`NavState`] is the transient, per-request view of the listing URL:
//! current page plus the optional tag and search filters. This module
//! serializes it to a canonical query string and parses it back.
//!
//! ## Canonical form
//!
//! - `page` is omitted when it equals 1, so the page-1 URL has no page
//!   parameter and every state has exactly one spelling.
//! - `tag` and `search` are omitted when empty.
//! - Values are percent-encoded; keys always appear in the order
//!   `page`, `tag`, `search` so output is deterministic.
//!
//! ## Decoding never fails
//!
//! A malformed page value, a stray parameter, or an undecodable value is
//! normal client input, not an exceptional condition. [`decode`] always
//! yields a valid state, defaulting what it cannot use; range checks
//! (page beyond the last page) are the query engine's clamping job.
//!
//! Round-trip law: for any valid state (page >= 1, filters either absent or
//! non-empty), `decode(&encode(&s)) == s` — including page 1, which encode
//! drops and decode restores.

/// Navigation state for the article listing: current page plus filters.
///
/// Not persisted anywhere; reconstructed from the raw query string on every
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub page: usize,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            page: 1,
            tag: None,
            search: None,
        }
    }
}

impl NavState {
    pub fn page(page: usize) -> Self {
        Self {
            page: page.max(1),
            ..Self::default()
        }
    }

    /// Returns the same state moved to `page`.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            tag: self.tag.clone(),
            search: self.search.clone(),
        }
    }
}

/// Serializes `state` into its canonical query string (no leading `?`).
///
/// The all-default state encodes as the empty string.
pub fn encode(state: &NavState) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if state.page > 1 {
        parts.push(format!("page={}", state.page));
    }
    if let Some(tag) = filter_value(&state.tag) {
        parts.push(format!("tag={}", urlencoding::encode(tag)));
    }
    if let Some(search) = filter_value(&state.search) {
        parts.push(format!("search={}", urlencoding::encode(search)));
    }
    parts.join("&")
}

/// Parses a raw query string (with or without leading `?`) into a state.
///
/// Absent, non-numeric, or non-positive `page` defaults to 1. Empty filter
/// values are treated exactly like omitted ones. Unknown keys are ignored.
pub fn decode(raw: &str) -> NavState {
    let mut state = NavState::default();
    for pair in raw.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        let value = match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            // Not valid UTF-8 once decoded; treat like an absent value.
            Err(_) => continue,
        };
        match key {
            "page" => {
                if let Ok(page) = value.parse::<usize>() {
                    if page >= 1 {
                        state.page = page;
                    }
                }
            }
            "tag" if !value.is_empty() => state.tag = Some(value),
            "search" if !value.is_empty() => state.search = Some(value),
            _ => {}
        }
    }
    state
}

/// Full link for `state` under `base`: `base?{query}` or bare `base` when
/// the state is all-default.
pub fn href(base: &str, state: &NavState) -> String {
    let query = encode(state);
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{query}")
    }
}

/// Link to another page of the current filtered listing, preserving the
/// tag and search filters.
pub fn page_href(base: &str, page: usize, state: &NavState) -> String {
    href(base, &state.with_page(page))
}

/// Link that switches the tag filter: resets to page 1, keeps the search
/// term.
pub fn tag_href(base: &str, tag: &str, state: &NavState) -> String {
    let switched = NavState {
        page: 1,
        tag: Some(tag.to_string()),
        search: state.search.clone(),
    };
    href(base, &switched)
}

fn filter_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
