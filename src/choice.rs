//! Choice definitions and response matching.
//!
//! This module defines how raw user responses are compared against a set of
//! choices: the normalization applied to both sides, the exact-match table
//! used by the fixed-choice prompt, and the unambiguous-prefix matcher used
//! by the legacy free-input prompt.

use indexmap::IndexMap;

/// Normalizes a string for comparison.
///
/// Strips leading and trailing whitespace, then applies Unicode default case
/// folding (so e.g. `"Straße"` and `"STRASSE"` compare equal). The result is
/// only ever used as a comparison key and is never displayed.
#[must_use]
pub fn normalize(s: &str) -> String {
    caseless::default_case_fold_str(s.trim())
}

/// A single logical choice: a canonical string plus the aliases that select it.
///
/// The canonical string is what gets returned to the caller, even when the
/// user typed one of the aliases. The alias list always contains the
/// canonical string as its first element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    canonical: String,
    aliases: Vec<String>,
}

impl Choice {
    /// Creates a choice with no aliases beyond the string itself.
    pub fn new(canonical: impl Into<String>) -> Self {
        let canonical = canonical.into();
        let aliases = vec![canonical.clone()];
        Self { canonical, aliases }
    }

    /// Creates a choice from an ordered alias list.
    ///
    /// The first alias is the canonical string.
    ///
    /// # Panics
    ///
    /// Panics if `aliases` is empty.
    pub fn with_aliases<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        assert!(!aliases.is_empty(), "a choice must have at least one alias");
        Self {
            canonical: aliases[0].clone(),
            aliases,
        }
    }

    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

impl From<&str> for Choice {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Choice {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl<S: Into<String>> From<Vec<S>> for Choice {
    fn from(aliases: Vec<S>) -> Self {
        Self::with_aliases(aliases)
    }
}

/// Lookup table mapping normalized alias keys to canonical choice strings.
///
/// Built once per prompt invocation. If two aliases normalize to the same
/// key, the later insertion silently overwrites the earlier one (last writer
/// wins). That is intentional permissive behavior, matching callers that rely
/// on alias shadowing, and must not be turned into an error.
#[derive(Debug)]
pub struct ChoiceTable {
    entries: IndexMap<String, String>,
}

impl ChoiceTable {
    /// Builds the table from a choice collection.
    #[must_use]
    pub fn build(choices: &[Choice]) -> Self {
        let mut entries = IndexMap::new();
        for choice in choices {
            for alias in choice.aliases() {
                entries.insert(normalize(alias), choice.canonical().to_string());
            }
        }
        Self { entries }
    }

    /// Looks up an already-normalized response key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

/// Outcome of a prefix-matcher lookup.
#[derive(Debug, PartialEq, Eq)]
pub enum PrefixLookup<'a> {
    /// The response selected exactly one choice (the original, non-normalized
    /// choice string).
    Match(&'a str),
    /// The response is a prefix of two or more choices with no exact match
    /// among them.
    Ambiguous,
    NotFound,
}

/// Resolves responses against choices by unambiguous-prefix matching.
///
/// Used by the legacy free-input prompt variant. Stores choices in their
/// original order as `(normalized, original)` pairs.
#[derive(Debug)]
pub struct PrefixMatcher {
    entries: Vec<(String, String)>,
}

impl PrefixMatcher {
    #[must_use]
    pub fn build(choices: &[&str]) -> Self {
        let entries = choices
            .iter()
            .map(|choice| (normalize(choice), (*choice).to_string()))
            .collect();
        Self { entries }
    }

    /// Looks up an already-normalized, non-empty response key.
    ///
    /// An exact equality always wins over ambiguity: with choices `"Foo"` and
    /// `"FooBar"`, the response `"foo"` resolves to `"Foo"`. The check is an
    /// explicit exact-equality pass before the prefix pass to keep the
    /// tie-break auditable.
    #[must_use]
    pub fn lookup(&self, key: &str) -> PrefixLookup<'_> {
        for (normalized, original) in &self.entries {
            if normalized == key {
                return PrefixLookup::Match(original);
            }
        }

        let matches: Vec<&String> = self
            .entries
            .iter()
            .filter(|(normalized, _)| normalized.starts_with(key))
            .map(|(_, original)| original)
            .collect();

        match matches.as_slice() {
            [] => PrefixLookup::NotFound,
            [original] => PrefixLookup::Match(original),
            _ => PrefixLookup::Ambiguous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize(" foo "), normalize("foo"));
        assert_eq!(normalize("\tfoo\n"), "foo");
    }

    #[test]
    fn test_normalize_case_folds() {
        assert_eq!(normalize("FOO"), "foo");
        assert_eq!(normalize("Straße"), normalize("STRASSE"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in [" Foo ", "BAR", "Straße", "", "  "] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_choice_from_string() {
        let choice = Choice::from("Foo");
        assert_eq!(choice.canonical(), "Foo");
        assert_eq!(choice.aliases(), ["Foo"]);
    }

    #[test]
    fn test_choice_with_aliases() {
        let choice = Choice::with_aliases(["f", "Foo"]);
        assert_eq!(choice.canonical(), "f");
        assert_eq!(choice.aliases(), ["f", "Foo"]);
    }

    #[test]
    #[should_panic(expected = "at least one alias")]
    fn test_choice_with_no_aliases_panics() {
        let _ = Choice::with_aliases(Vec::<String>::new());
    }

    #[test]
    fn test_table_lookup_returns_canonical() {
        let choices = [Choice::with_aliases(["f", "Foo"]), Choice::new("Bar")];
        let table = ChoiceTable::build(&choices);
        assert_eq!(table.lookup("foo"), Some("f"));
        assert_eq!(table.lookup("f"), Some("f"));
        assert_eq!(table.lookup("bar"), Some("Bar"));
        assert_eq!(table.lookup("qux"), None);
    }

    #[test]
    fn test_table_collision_last_writer_wins() {
        // Colliding normalized keys silently overwrite; not an error.
        let choices = [Choice::new("Foo"), Choice::new("FOO ")];
        let table = ChoiceTable::build(&choices);
        assert_eq!(table.lookup("foo"), Some("FOO "));
    }

    #[test]
    fn test_table_lookup_is_pure() {
        let choices = [Choice::new("Foo"), Choice::new("Bar")];
        let table = ChoiceTable::build(&choices);
        assert_eq!(table.lookup("foo"), table.lookup("foo"));
        assert_eq!(table.lookup("qux"), table.lookup("qux"));
    }

    #[test]
    fn test_prefix_unique_match() {
        let matcher = PrefixMatcher::build(&["Foo", "Bar", "Baz"]);
        assert_eq!(matcher.lookup("f"), PrefixLookup::Match("Foo"));
        assert_eq!(matcher.lookup("foo"), PrefixLookup::Match("Foo"));
    }

    #[test]
    fn test_prefix_ambiguous() {
        let matcher = PrefixMatcher::build(&["Foo", "Bar", "Baz"]);
        assert_eq!(matcher.lookup("ba"), PrefixLookup::Ambiguous);
    }

    #[test]
    fn test_prefix_not_found() {
        let matcher = PrefixMatcher::build(&["Foo", "Bar", "Baz"]);
        assert_eq!(matcher.lookup("qux"), PrefixLookup::NotFound);
    }

    #[test]
    fn test_prefix_exact_match_beats_ambiguity() {
        let matcher = PrefixMatcher::build(&["Foo", "FooBar", "Baz"]);
        assert_eq!(matcher.lookup("foo"), PrefixLookup::Match("Foo"));
        assert_eq!(matcher.lookup("foob"), PrefixLookup::Match("FooBar"));
        assert_eq!(matcher.lookup("fo"), PrefixLookup::Ambiguous);
    }
}
