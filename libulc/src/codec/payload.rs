// libulc/src/codec/payload.rs

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::Result;

/// URL-safe base64 without padding, the encoding of every binary field on the wire.
pub fn encode_payload(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a payload field.
///
/// Accepts the URL-safe and standard alphabets, with or without trailing
/// padding, and ignores embedded whitespace.
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>> {
    let normalized: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    Ok(URL_SAFE_NO_PAD.decode(normalized.trim_end_matches('='))?)
}

/// Serde adapter storing fixed-size byte values as payload strings.
pub(crate) mod as_payload {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S, B>(value: &B, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        B: AsRef<[u8]>,
    {
        serializer.serialize_str(&super::encode_payload(value.as_ref()))
    }

    pub fn deserialize<'de, D, B>(deserializer: D) -> Result<B, D::Error>
    where
        D: Deserializer<'de>,
        B: for<'a> TryFrom<&'a [u8], Error = crate::Error>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = super::decode_payload(&s).map_err(serde::de::Error::custom)?;
        B::try_from(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}
