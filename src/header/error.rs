//! Error types that can occur during header related operation.
use std::num::ParseIntError;

/// An error returned from [`Header::content_length`] when the recorded
/// value is not a valid unsigned 32-bit integer.
///
/// [`Header::content_length`]: super::Header::content_length
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed content-length {value:?}: {source}")]
pub struct InvalidContentLength {
    value: String,
    source: ParseIntError,
}

impl InvalidContentLength {
    pub(super) fn new(value: &str, source: ParseIntError) -> Self {
        Self {
            value: value.to_owned(),
            source,
        }
    }

    /// Returns the malformed header value as recorded.
    pub fn value(&self) -> &str {
        &self.value
    }
}
