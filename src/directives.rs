//! Template functions for edge-deferred fragments.
//!
//! Templates hand in the raw argument list as a single expression string,
//! for example
//!
//! ```text
//! {{ edge.edgestash_if_detected("'Guest', user.name, '/user.json'") }}
//! ```
//!
//! The expression is only split and trimmed, nothing is evaluated.

use crate::context::EdgestashContext;
use std::fmt;
use tracing::trace;

/// Output of a template function: either the server rendered value, or a
/// placeholder the edge replaces with data from the linked JSON documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Literal(String),
    Placeholder(String),
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.write_str(value),
            Self::Placeholder(name) => write!(f, "@{{{{{name}}}}}"),
        }
    }
}

/// Split a directive expression into at most `N` arguments.
///
/// Only the first `N - 1` commas separate arguments, so the last one may
/// contain commas itself. Missing arguments are `None`.
fn split_arguments<const N: usize>(expression: &str) -> [Option<&str>; N] {
    let mut arguments = [None; N];
    for (slot, argument) in arguments.iter_mut().zip(expression.splitn(N, ',')) {
        *slot = Some(argument.trim());
    }
    arguments
}

/// strip one layer of matching quotes from a string literal.
fn unquote(argument: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = argument
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    argument
}

/// URL arguments lose all surrounding single quotes, an empty result means
/// no URL was given.
fn url_argument(argument: Option<&str>) -> Option<&str> {
    argument
        .map(|url| url.trim_matches('\''))
        .filter(|url| !url.is_empty())
}

impl EdgestashContext {
    /// `true` when the edge in front of us understands edgestash, for
    /// conditional markup in templates.
    pub fn is_edgestash(&self) -> bool {
        self.is_active()
    }

    /// Placeholder for `name`, optionally recording the JSON document the
    /// edge should fetch.
    ///
    /// This does not look at the negotiation result: the placeholder is
    /// always rendered and the URL always recorded. Only
    /// [`Self::finalize`] decides if the links reach the response.
    pub fn placeholder(&self, name: &str, url: Option<&str>) -> Fragment {
        if let Some(url) = url.filter(|url| !url.is_empty()) {
            self.record_url(url);
        }
        Fragment::Placeholder(name.to_string())
    }

    /// `value` for requests without edgestash support, otherwise a
    /// placeholder for `name` whose data is fetched from `url`.
    pub fn if_detected(&self, value: impl fmt::Display, name: &str, url: Option<&str>) -> Fragment {
        if !self.is_active() {
            return Fragment::Literal(value.to_string());
        }
        self.placeholder(name, url)
    }

    /// `edgestash(name[, url])` template function.
    pub fn edgestash(&self, expression: &str) -> Fragment {
        trace!(expression, "edgestash");

        let [name, url] = split_arguments::<2>(expression);
        let name = unquote(name.unwrap_or_default());

        self.placeholder(name, url_argument(url))
    }

    /// `edgestash_if_detected(value[, name, url])` template function.
    ///
    /// The single argument form has no edge behavior and renders `value`.
    pub fn edgestash_if_detected(&self, expression: &str) -> Fragment {
        trace!(expression, "edgestash_if_detected");

        let [value, name, url] = split_arguments::<3>(expression);
        let value = unquote(value.unwrap_or_default());

        match name {
            None => Fragment::Literal(value.to_string()),
            Some(name) => self.if_detected(value, unquote(name), url_argument(url)),
        }
    }
}
