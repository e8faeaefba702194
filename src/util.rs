//! Utilities to help with building problems
use std::borrow::Cow;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Useful to generate a list of unique valid variable names
#[derive(Debug, Default)]
pub struct UniqueNameGenerator {
    names: HashMap<u64, usize>,
}

impl UniqueNameGenerator {
    /// Create a new variable. Returns a valid variable name, never returned before by this generator.
    ///
    /// Letters, digits and underscores survive sanitization, so indexed
    /// names like `ship_0_2` keep their indices.
    ///
    /// ```
    /// use or_workbook::util::UniqueNameGenerator;
    ///
    /// let mut gen = UniqueNameGenerator::default();
    /// assert_eq!(gen.add_variable("x"), "x");
    /// assert_eq!(gen.add_variable("ship_0_2"), "ship_0_2");
    /// assert_eq!(gen.add_variable("total cost"), "totalcost"); // ' ' is not valid in a name
    /// assert_eq!(gen.add_variable("2nd"), "v2nd"); // names cannot start with a digit
    /// assert_eq!(gen.add_variable("x"), "x2"); // A variable with name x is already present
    /// ```
    pub fn add_variable<'a>(&mut self, name: &'a str) -> Cow<'a, str> {
        let mut stem = stem(name);
        let hash = calculate_hash(&stem);
        let n = self.names.entry(hash).or_insert(0);
        *n += 1;
        if *n >= 2 {
            stem = Cow::Owned(stem.into_owned() + &n.to_string());
        }
        stem
    }
}

fn stem(name: &str) -> Cow<str> {
    let valid = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let starts_well = name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_');
    if name.contains(|c: char| !valid(c)) || !starts_well {
        let mut owned: String = name.chars().filter(|&c| valid(c)).collect();
        if !owned.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
            owned.insert(0, 'v');
        }
        Cow::Owned(owned)
    } else {
        Cow::Borrowed(name)
    }
}

fn calculate_hash(t: &str) -> u64 {
    let mut s = DefaultHasher::new();
    t.hash(&mut s);
    s.finish()
}

/// Whether `needle` occurs anywhere in `haystack`.
/// Used to scan solver stdout for status markers.
pub fn buf_contains(haystack: &[u8], needle: &str) -> bool {
    let needle = needle.as_bytes();
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_becomes_v() {
        let mut gen = UniqueNameGenerator::default();
        assert_eq!(gen.add_variable("!#?/"), "v");
        assert_eq!(gen.add_variable(""), "v2");
    }

    #[test]
    fn buf_contains_finds_needles() {
        assert!(buf_contains(b"Optimal solution found", "Optimal"));
        assert!(!buf_contains(b"Optimal", "Optimal solution"));
    }
}
