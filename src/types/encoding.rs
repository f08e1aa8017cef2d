use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::models::RankingError;

pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, RankingError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| RankingError::UnknownEncoding(label.to_string()))
}

/// Decodes a whole report into UTF-8, honouring a leading byte order mark if present.
///
/// Malformed sequences are rejected instead of being replaced with U+FFFD.
pub fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Result<Cow<'a, str>, RankingError> {
    let (text, used, had_errors) = encoding.decode(bytes);

    if had_errors {
        return Err(RankingError::Decoding { encoding: used.name() });
    }

    Ok(text)
}
