/// Identifier of an authenticated user, taken from the `sub` claim of the
/// verified bearer token.
///
/// Every use case that touches per-user data receives it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_inner_subject() {
        let user_id = UserId::new("author-42");
        assert_eq!(user_id.as_str(), "author-42");
    }

    #[test]
    fn should_display_as_raw_subject() {
        let user_id: UserId = "cook@example.org".into();
        assert_eq!(user_id.to_string(), "cook@example.org");
    }

    #[test]
    fn should_treat_same_subject_as_same_user() {
        let a = UserId::from("same".to_string());
        let b = UserId::new("same");
        let c = UserId::new("other");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
