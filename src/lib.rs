//! Origin side of the edgestash protocol for axum applications.
//!
//! An edge that can hydrate edgestash placeholders advertises this with
//! `Surrogate-Capability: edgestash="EDGESTASH/2.1"`. For such requests
//! templates render `@{{name}}` placeholders instead of server side values,
//! and the response tells the edge which JSON documents to fetch:
//!
//! ```text
//! Surrogate-Control: edgestash="EDGESTASH/2.1"
//! Link: </user.json>; rel=edgestash
//! ```
//!
//! Install [`edgestash_middleware`] (or use [`with_edgestash`]) and take an
//! [`EdgestashContext`] in your handlers to hand it to the templates.

mod config;
mod context;
mod directives;
mod error;
pub mod logging;
mod middleware;
#[cfg(test)]
mod testing;
pub mod web;

pub use config::{Config, InvalidLogFormat, LogFormat};
pub use context::EdgestashContext;
pub use directives::Fragment;
pub use edgestash_headers as headers;
pub use error::Error;
pub use middleware::{edgestash_middleware, with_edgestash};
