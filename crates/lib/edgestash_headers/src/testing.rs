use headers::{Header, HeaderMapExt as _};
use http::{HeaderMap, HeaderValue};

/// decode a typed header from a single raw header line.
pub(crate) fn test_typed_decode<H, V>(value: V) -> anyhow::Result<Option<H>>
where
    H: Header,
    V: AsRef<str>,
{
    test_typed_decode_all(&[value])
}

/// decode a typed header from multiple header lines with the same name.
pub(crate) fn test_typed_decode_all<H>(values: &[impl AsRef<str>]) -> anyhow::Result<Option<H>>
where
    H: Header,
{
    let mut headers = HeaderMap::new();
    for value in values {
        headers.append(H::name(), HeaderValue::from_str(value.as_ref())?);
    }

    Ok(headers.typed_try_get::<H>()?)
}

/// encode a typed header, multiple values are joined with `\n`.
pub(crate) fn test_typed_encode<H: Header>(header: H) -> String {
    let mut values: Vec<HeaderValue> = Vec::new();
    header.encode(&mut values);

    values
        .iter()
        .map(|value| value.to_str().expect("test header values are ascii"))
        .collect::<Vec<_>>()
        .join("\n")
}
