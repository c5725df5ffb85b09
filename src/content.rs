//! The four Step 1 content fields and their validated values

use serde::Serialize;
use std::fmt;

use crate::error::{ContentError, Result};

/// One of the four creative-direction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentField {
    Concept,
    Inspiration,
    Mood,
    Genre,
}

impl ContentField {
    /// Fixed validation and write order
    pub const ALL: [ContentField; 4] = [
        ContentField::Concept,
        ContentField::Inspiration,
        ContentField::Mood,
        ContentField::Genre,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContentField::Concept => "concept",
            ContentField::Inspiration => "inspiration",
            ContentField::Mood => "mood",
            ContentField::Genre => "genre",
        }
    }

    /// File name under the project's `music/` directory
    pub fn file_name(self) -> String {
        format!("{}.txt", self.name())
    }
}

impl fmt::Display for ContentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated set of Step 1 values.
///
/// Every value is trimmed and non-empty; `new` is the only constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSet {
    values: [String; 4],
}

impl ContentSet {
    /// Trim and validate all four values, failing on the first empty one
    pub fn new(concept: &str, inspiration: &str, mood: &str, genre: &str) -> Result<Self> {
        Ok(Self {
            values: [
                non_empty(ContentField::Concept, concept)?,
                non_empty(ContentField::Inspiration, inspiration)?,
                non_empty(ContentField::Mood, mood)?,
                non_empty(ContentField::Genre, genre)?,
            ],
        })
    }

    pub fn get(&self, field: ContentField) -> &str {
        &self.values[field as usize]
    }

    /// Fields and their values in write order
    pub fn iter(&self) -> impl Iterator<Item = (ContentField, &str)> + '_ {
        ContentField::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }
}

/// Whitespace as trimmed from input: Unicode White_Space plus the
/// information separators U+001C..=U+001F.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn non_empty(field: ContentField, value: &str) -> Result<String> {
    let cleaned = value.trim_matches(is_trimmable);
    if cleaned.is_empty() {
        return Err(ContentError::Validation { field });
    }
    Ok(cleaned.to_string())
}
