//! `#property` substitution for label text
//!
//! Label text containing the `#` marker is resolved through the host before
//! it is split into lines. `PropertyMap` is a simple table-backed resolver
//! any host can embed.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Marker character that makes a label go through property resolution
pub const PROPERTY_MARKER: char = '#';

fn property_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"#[A-Za-z_][A-Za-z0-9_.]*").expect("property pattern is valid")
    })
}

/// Name -> value table, names are stored without the leading `#`
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    values: HashMap<String, String>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let name = name.as_ref().trim_start_matches(PROPERTY_MARKER);
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name.trim_start_matches(PROPERTY_MARKER))
            .map(String::as_str)
    }

    /// Replace every `#name` token with its value; unknown names become empty
    pub fn parse(&self, text: &str) -> String {
        if !text.contains(PROPERTY_MARKER) {
            return text.to_string();
        }
        property_pattern()
            .replace_all(text, |caps: &Captures| {
                let token = &caps[0];
                self.get(token).unwrap_or_default().to_string()
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown() {
        let mut props = PropertyMap::new();
        props.set("#title", "Blade Runner");
        props.set("channel", "BBC One");

        assert_eq!(
            props.parse("#channel: #title #missing!"),
            "BBC One: Blade Runner !"
        );
    }

    #[test]
    fn test_parse_without_marker_is_identity() {
        let props = PropertyMap::new();
        assert_eq!(props.parse("plain text"), "plain text");
    }

    #[test]
    fn test_dotted_names() {
        let mut props = PropertyMap::new();
        props.set("#Play.Current.Title", "Song");
        assert_eq!(props.parse("Now: #Play.Current.Title"), "Now: Song");
    }
}
