//! # Extraction Input
//!
//! Callers hand in either one text or an ordered list of texts. Both shapes
//! are represented by [`Texts`] and walked the same way.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, expecting = "a string or a list of strings")]
pub enum Texts {
    /// A single text, treated as a one-element list.
    One(String),
    /// An ordered list of texts.
    Many(Vec<String>),
}

impl Texts {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let texts: &[String] = match self {
            Texts::One(text) => std::slice::from_ref(text),
            Texts::Many(texts) => texts,
        };
        texts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        match self {
            Texts::One(_) => 1,
            Texts::Many(texts) => texts.len(),
        }
    }

    /// True when there is no text content at all to search.
    pub fn is_empty(&self) -> bool {
        self.iter().all(str::is_empty)
    }
}

impl Default for Texts {
    fn default() -> Self {
        Texts::Many(Vec::new())
    }
}

impl From<&str> for Texts {
    fn from(text: &str) -> Self {
        Texts::One(text.to_string())
    }
}

impl From<String> for Texts {
    fn from(text: String) -> Self {
        Texts::One(text)
    }
}

impl From<Vec<String>> for Texts {
    fn from(texts: Vec<String>) -> Self {
        Texts::Many(texts)
    }
}

impl From<&[&str]> for Texts {
    fn from(texts: &[&str]) -> Self {
        Texts::Many(texts.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Texts {
    fn from(texts: [&str; N]) -> Self {
        Texts::from(&texts[..])
    }
}

impl FromIterator<String> for Texts {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Texts::Many(iter.into_iter().collect())
    }
}
