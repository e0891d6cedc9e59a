use std::fmt;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64_ENGINE, Engine as _};
use serde::Deserialize;

use crate::error::Result;

/// PNG bytes in text form, safe to place in a URL query parameter.
///
/// The server keeps no copy: the image lives only as long as the browser
/// keeps sending this string back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn encode(bytes: &[u8]) -> Self {
        Self(BASE64_ENGINE.encode(bytes))
    }

    /// Decode back to the exact bytes that were encoded. The content is not
    /// checked to be a PNG.
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(BASE64_ENGINE.decode(self.0.trim())?)
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for EncodedImage {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
