use headers::Header;
use http::{HeaderMap, HeaderValue};

/// Append-only counterpart to [`headers::HeaderMapExt::typed_insert`].
///
/// `typed_insert` replaces every existing line with the same name, which would
/// drop `Surrogate-Control` or `Link` lines other layers already set.
pub trait HeaderMapAppendExt {
    fn typed_append<H: Header>(&mut self, header: &H);
}

impl HeaderMapAppendExt for HeaderMap {
    fn typed_append<H: Header>(&mut self, header: &H) {
        let mut values: Vec<HeaderValue> = Vec::with_capacity(1);
        header.encode(&mut values);

        for value in values {
            self.append(H::name(), value);
        }
    }
}
