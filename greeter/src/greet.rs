//! Core greeting formatter.

use tracing::debug;

/// Name greeted when the caller provides an empty name.
pub const DEFAULT_FALLBACK: &str = "world";

/// Stateless greeting formatter.
///
/// The only configuration is the fallback name substituted for an empty
/// input. Formatting is total over all string inputs and has no side
/// effects beyond a debug-level trace event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    fallback: String,
}

impl Greeter {
    /// Creates a greeter that substitutes `fallback` for empty names.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    /// Returns the configured fallback name.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Formats the greeting for `name`.
    ///
    /// An empty `name` greets the fallback name instead. Any non-empty
    /// name, including whitespace-only ones, is used verbatim.
    #[must_use]
    pub fn hello(&self, name: &str) -> String {
        let name = if name.is_empty() {
            self.fallback.as_str()
        } else {
            name
        };
        debug!(name, "formatting greeting");
        format!("Hello, {}!", name)
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fallback() {
        let greeter = Greeter::default();
        assert_eq!(greeter.fallback(), "world");
        assert_eq!(greeter.hello(""), "Hello, world!");
    }

    #[test]
    fn test_custom_fallback() {
        let greeter = Greeter::new("friend");
        assert_eq!(greeter.hello(""), "Hello, friend!");
        // A custom fallback never affects non-empty names
        assert_eq!(greeter.hello("Codex"), "Hello, Codex!");
    }

    #[test]
    fn test_name_used_verbatim() {
        let greeter = Greeter::default();
        assert_eq!(greeter.hello("O'Brien"), "Hello, O'Brien!");
        assert_eq!(greeter.hello(" "), "Hello,  !");
        assert_eq!(greeter.hello("émile"), "Hello, émile!");
    }

    #[test]
    fn test_repeated_calls_stable() {
        let greeter = Greeter::default();
        let first = greeter.hello("Codex");
        for _ in 0..10 {
            assert_eq!(greeter.hello("Codex"), first);
        }
    }
}
