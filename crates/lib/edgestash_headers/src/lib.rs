mod append;
mod link;
mod surrogate_capability;
mod surrogate_control;
#[cfg(test)]
mod testing;

pub use append::HeaderMapAppendExt;
pub use headers::HeaderMapExt;
pub use http::header::LINK;
pub use link::{EDGESTASH_REL, EdgestashLink};
pub use surrogate_capability::{SURROGATE_CAPABILITY, SurrogateCapability};
pub use surrogate_control::{SURROGATE_CONTROL, SurrogateControl};

/// Capability token an edge advertises in `Surrogate-Capability`, and the
/// origin echoes back in `Surrogate-Control`, when it can hydrate
/// edgestash placeholders.
pub const EDGESTASH_TOKEN: &str = r#"edgestash="EDGESTASH/2.1""#;

const SEP: char = ',';

/// split a comma separated header value into trimmed, non-empty entries.
fn split_entries(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(SEP)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}
