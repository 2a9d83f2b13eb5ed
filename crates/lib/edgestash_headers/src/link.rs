use headers::{Error, Header};
use http::{HeaderName, HeaderValue, header::LINK};

/// link relation telling the edge where to fetch placeholder data from.
pub const EDGESTASH_REL: &str = "edgestash";

/// Typed `Link: <url>; rel=edgestash` header.
///
/// Every JSON document the edge has to fetch gets its own header line,
/// so this header only ever holds a single link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgestashLink(String);

impl EdgestashLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl Header for EdgestashLink {
    fn name() -> &'static HeaderName {
        &LINK
    }

    fn decode<'i, I: Iterator<Item = &'i HeaderValue>>(values: &mut I) -> Result<Self, Error> {
        let Some(value) = values.next() else {
            return Err(Error::invalid());
        };

        let value = value.to_str().map_err(|_| Error::invalid())?.trim();

        let (url, params) = value
            .strip_prefix('<')
            .and_then(|rest| rest.split_once('>'))
            .ok_or_else(Error::invalid)?;

        let is_edgestash = params
            .split(';')
            .map(str::trim)
            .filter_map(|param| param.split_once('='))
            .any(|(key, value)| {
                key.trim().eq_ignore_ascii_case("rel")
                    && value
                        .trim()
                        .trim_matches('"')
                        .eq_ignore_ascii_case(EDGESTASH_REL)
            });

        if url.is_empty() || !is_edgestash {
            return Err(Error::invalid());
        }

        Ok(Self(url.to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(HeaderValue::from_str(&format!(
            "<{}>; rel={EDGESTASH_REL}",
            self.0
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_typed_decode, test_typed_encode};
    use test_case::test_case;

    #[test_case("/user.json", "</user.json>; rel=edgestash"; "relative")]
    #[test_case(
        "https://api.example.com/cart.json?id=1",
        "<https://api.example.com/cart.json?id=1>; rel=edgestash";
        "absolute with query"
    )]
    fn test_encode(url: &str, expected: &str) {
        assert_eq!(test_typed_encode(EdgestashLink::new(url)), expected);
    }

    #[test]
    fn test_encode_invalid_url_emits_nothing() {
        assert_eq!(test_typed_encode(EdgestashLink::new("/broken\n.json")), "");
    }

    #[test_case("</user.json>; rel=edgestash", "/user.json"; "canonical")]
    #[test_case("  </user.json>;rel=\"edgestash\"  ", "/user.json"; "quoted rel without spaces")]
    #[test_case("</user.json>; crossorigin; REL=Edgestash", "/user.json"; "extra params")]
    fn test_decode(header: &str, expected: &str) -> anyhow::Result<()> {
        let decoded = test_typed_decode::<EdgestashLink, _>(header)?.unwrap();

        assert_eq!(decoded.url(), expected);

        Ok(())
    }

    #[test_case("</style.css>; rel=preload"; "other relation")]
    #[test_case("/user.json; rel=edgestash"; "missing brackets")]
    #[test_case("<>; rel=edgestash"; "empty url")]
    #[test_case(""; "empty")]
    fn test_decode_invalid(header: &str) {
        assert!(test_typed_decode::<EdgestashLink, _>(header).is_err());
    }
}
