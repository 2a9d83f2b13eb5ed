use crate::{EDGESTASH_TOKEN, SEP, split_entries};
use headers::{Error, Header};
use http::{HeaderName, HeaderValue};

/// Surrogate-Control header, read by the CDN / edge and stripped before the
/// response reaches the client.
/// https://www.w3.org/TR/edge-arch/
pub static SURROGATE_CONTROL: HeaderName = HeaderName::from_static("surrogate-control");

/// Typed Surrogate-Control header.
///
/// Only a single header line is decoded. When several parties contribute
/// their own line, use [`crate::HeaderMapAppendExt::typed_append`] so existing
/// lines are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurrogateControl(Vec<String>);

impl SurrogateControl {
    /// tells the edge to process edgestash placeholders in the body.
    pub fn edgestash() -> Self {
        Self(vec![EDGESTASH_TOKEN.to_string()])
    }

    pub fn directives(&self) -> &[String] {
        &self.0
    }

    pub fn has_edgestash(&self) -> bool {
        self.0.iter().any(|directive| directive == EDGESTASH_TOKEN)
    }
}

impl Header for SurrogateControl {
    fn name() -> &'static HeaderName {
        &SURROGATE_CONTROL
    }

    fn decode<'i, I: Iterator<Item = &'i HeaderValue>>(values: &mut I) -> Result<Self, Error> {
        let Some(value) = values.next() else {
            return Err(Error::invalid());
        };

        let value = value.to_str().map_err(|_| Error::invalid())?;

        Ok(Self(split_entries(value).map(String::from).collect()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        let value = self.0.join(&format!("{SEP} "));
        values.extend(HeaderValue::from_str(&value));
    }
}
