//! OpenAI credential handling.

/// OpenAI API key, read once at startup.
///
/// Debug output is redacted so the key never ends up in logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::str::FromStr for ApiKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "ApiKey(<unset>)")
        } else {
            write!(f, "ApiKey(<redacted>)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("sk-secret-value");
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains("sk-secret-value"));
        assert_eq!(rendered, "ApiKey(<redacted>)");
        assert_eq!(key.expose(), "sk-secret-value");
        assert_eq!("sk-other".parse::<ApiKey>().unwrap().expose(), "sk-other");
    }

    #[test]
    fn test_unset_key() {
        let key = ApiKey::default();
        assert!(key.is_empty());
        assert_eq!(format!("{:?}", key), "ApiKey(<unset>)");
    }
}
