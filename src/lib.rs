//! Typed client for the land bank / project / HSE administration backend.
//!
//! [`Console`] is the entry point: it owns configuration, the session token
//! and the HTTP client, and hands out one binding per entity. Form state
//! lives in [`forms`], listing state in [`listing`].

pub mod app;
pub mod auth;
pub mod config;
pub mod domain;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod listing;
pub mod logging;
pub mod lookups;
pub mod notify;
pub mod services;
pub mod summary;

pub use app::Console;
pub use auth::RequestContext;
pub use config::{Environment, Settings};
pub use error::{ApiResult, ClientError};
pub use forms::{CreateForm, EditForm, FormError, JsonForm, ValidationErrors};
pub use listing::{ListView, PageInfo, PageRequest};
pub use lookups::ReferenceData;
pub use notify::{Notice, NoticeLevel};
pub use services::{ApiClient, MultipartPayload, PendingFile};
