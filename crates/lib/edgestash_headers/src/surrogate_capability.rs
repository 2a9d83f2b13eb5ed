use crate::{EDGESTASH_TOKEN, SEP, split_entries};
use headers::{Error, Header};
use http::{HeaderName, HeaderValue};

pub static SURROGATE_CAPABILITY: HeaderName = HeaderName::from_static("surrogate-capability");

/// Typed Surrogate-Capability header, sent by a CDN / edge to advertise
/// which surrogate protocols it can process.
///
/// All header lines are collected, values that are not valid UTF-8 are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurrogateCapability(Vec<String>);

impl SurrogateCapability {
    pub fn new<I, S>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(capabilities.into_iter().map(Into::into).collect())
    }

    pub fn capabilities(&self) -> &[String] {
        &self.0
    }

    /// `true` when any advertised capability contains the edgestash token.
    ///
    /// This is plain substring matching, the surrogate capability grammar
    /// is not validated.
    pub fn supports_edgestash(&self) -> bool {
        self.0
            .iter()
            .any(|capability| capability.contains(EDGESTASH_TOKEN))
    }
}

impl Header for SurrogateCapability {
    fn name() -> &'static HeaderName {
        &SURROGATE_CAPABILITY
    }

    fn decode<'i, I: Iterator<Item = &'i HeaderValue>>(values: &mut I) -> Result<Self, Error> {
        let mut values = values.peekable();
        if values.peek().is_none() {
            return Err(Error::invalid());
        }

        let capabilities = values
            .filter_map(|value| value.to_str().ok())
            .flat_map(split_entries)
            .map(String::from)
            .collect();

        Ok(Self(capabilities))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        let value = self.0.join(&format!("{SEP} "));
        values.extend(HeaderValue::from_str(&value));
    }
}
