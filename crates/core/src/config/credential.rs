use std::fmt;

/// An API key that may or may not be configured.
///
/// A missing key is a normal state: the feature depending on it either runs
/// unauthenticated or switches itself off.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Credential {
    Present(String),
    #[default]
    Absent,
}

impl Credential {
    /// Build from an optional key. Blank keys count as absent.
    pub fn from_option(key: Option<&str>) -> Self {
        match key.map(str::trim) {
            Some(k) if !k.is_empty() => Self::Present(k.to_string()),
            _ => Self::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Present(key) => Some(key),
            Self::Absent => None,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(_) => f.write_str("Present(<redacted>)"),
            Self::Absent => f.write_str("Absent"),
        }
    }
}
