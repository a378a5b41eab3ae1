use std::collections::BTreeSet;

/// Names that would shadow the fixed routes of the service.
pub const DEFAULT_RESERVED_NAMES: [&str; 5] = ["ui", "api", "ui.html", "error", "error.html"];

/// A case-insensitive set of codes that can never be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedNames {
    names: BTreeSet<String>,
}

impl ReservedNames {
    /// Creates an empty set. Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Adds extra names on top of the existing set.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in extra {
            let name = name.as_ref().trim();
            if !name.is_empty() {
                self.names.insert(name.to_lowercase());
            }
        }
        self
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains(&code.to_lowercase())
    }
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self::empty().with_extra(DEFAULT_RESERVED_NAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_reserved_in_any_case() {
        let reserved = ReservedNames::default();
        for name in ["ui", "UI", "Api", "ui.HTML", "ERROR", "Error.Html"] {
            assert!(reserved.contains(name), "{name} should be reserved");
        }
    }

    #[test]
    fn ordinary_codes_are_not_reserved() {
        let reserved = ReservedNames::default();
        assert!(!reserved.contains("abc123"));
        assert!(!reserved.contains("uix"));
        assert!(!reserved.contains("apis"));
    }

    #[test]
    fn extra_names_are_normalized() {
        let reserved = ReservedNames::default().with_extra(["  Admin ", ""]);
        assert!(reserved.contains("admin"));
        assert!(reserved.contains("ADMIN"));
        assert!(!reserved.contains(""));
    }
}
