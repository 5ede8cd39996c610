//! # Newsdesk Architecture
//!
//! Newsdesk is a **UI-agnostic content repository library**: it owns an
//! in-memory article collection and answers filtered, paginated list queries
//! over it, with navigation state that round-trips losslessly through a
//! canonical URL query string. Rendering, templating, routing and form
//! handling are deliberately someone else's problem.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                        │
//! │  - Entry point for the rendering layer                      │
//! │  - Raw untrusted strings in, typed results out              │
//! │  - Parses/rejects ids and query params at the boundary      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pure logic (query.rs, pagination.rs, nav.rs)               │
//! │  - Filter + paginate a snapshot into a Page                 │
//! │  - Compute the visible page-number window                   │
//! │  - Encode/decode navigation state (never fails)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store.rs)                                         │
//! │  - ArticleStore: mutex-guarded owned collection             │
//! │  - create/get/update/delete/list_all, newest first          │
//! │  - Hands out snapshots, never shared references             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principles
//!
//! - **The store owns everything.** Callers get defensive copies; there is
//!   no shared mutable state outside the store's lock.
//! - **Degrade, don't fail, on list input.** An out-of-range page, an empty
//!   filter, a non-numeric page parameter — all normal client input. The
//!   query engine clamps, the codec defaults, and the only errors in the
//!   crate are `NotFound` and `Validation` from the mutation path.
//! - **No I/O assumptions.** The library never touches stdout, never exits,
//!   and logs through the `log` facade only.
//!
//! ## Module overview
//!
//! - [`api`]: the facade the rendering layer calls
//! - [`store`]: the article store
//! - [`query`]: pure list-query engine
//! - [`pagination`]: page-number window calculator
//! - [`nav`]: navigation state and its query-string codec
//! - [`model`]: domain types and input validation
//! - [`error`]: error types

pub mod api;
pub mod error;
pub mod model;
pub mod nav;
pub mod pagination;
pub mod query;
pub mod store;

pub use api::ContentApi;
pub use error::{NewsdeskError, Result};
pub use model::{Article, ArticleDraft, ArticleId, ArticlePatch};
pub use nav::NavState;
pub use query::Page;
pub use store::ArticleStore;
