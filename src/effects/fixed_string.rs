use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Display};

/// A string stored in exactly `N` bytes, NUL padded.
///
/// Text longer than `N` bytes is cut at the last UTF-8 character boundary
/// that fits, so the stored bytes are always valid UTF-8 up to the first NUL.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedString<const N: usize>([u8; N]);

impl<const N: usize> FixedString<N> {
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(N);
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let mut bytes = [0u8; N];
        bytes[..end].copy_from_slice(&text.as_bytes()[..end]);

        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Number of bytes before the NUL padding.
    pub fn len(&self) -> usize {
        self.0.iter().position(|byte| *byte == 0).unwrap_or(N)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0[..self.len()]).unwrap_or_default()
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> From<&str> for FixedString<N> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<const N: usize> Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedString<{}>({:?})", N, self.as_str())
    }
}

impl<const N: usize> Serialize for FixedString<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedString<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        Ok(Self::new(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_text_with_nul() {
        let name = FixedString::<7>::new("gen");

        assert_eq!(name.as_bytes(), b"gen\0\0\0\0");
        assert_eq!(name.len(), 3);
        assert_eq!(name.as_str(), "gen");
    }

    #[test]
    fn truncates_long_text() {
        let name = FixedString::<7>::new("GEN_INT5_LONG");

        assert_eq!(name.as_bytes(), b"GEN_INT");
        assert_eq!(name.as_str(), "GEN_INT");
    }

    #[test]
    fn truncates_on_char_boundary() {
        // 'é' is two bytes, the second one would land past the end
        let name = FixedString::<4>::new("abcé");

        assert_eq!(name.as_str(), "abc");
        assert_eq!(name.as_bytes(), b"abc\0");
    }

    #[test]
    fn empty_by_default() {
        let name = FixedString::<23>::default();

        assert!(name.is_empty());
        assert_eq!(name.as_str(), "");
    }
}
