use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One poem scraped from a poem page.
///
/// Field values are the page text exactly as extracted; `body` usually spans
/// many lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemRecord {
    pub title: String,
    pub poet: String,
    pub body: String,
}

/// A hyperlink found on a poet's page, before it is known to be a poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCandidate {
    /// The `href` attribute as written in the page (usually site-relative).
    pub href: String,
    /// Anchor text.
    pub text: String,
}

/// The three text fields pulled from a poem page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Poet,
    Body,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Poet => "poet",
            Field::Body => "body",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("poem has an empty {0}")]
    EmptyField(Field),
}

impl PoemRecord {
    pub fn new(
        title: impl Into<String>,
        poet: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            poet: poet.into(),
            body: body.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Poet => &self.poet,
            Field::Body => &self.body,
        }
    }

    /// Check that every field carries text. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in [Field::Title, Field::Poet, Field::Body] {
            if self.field(field).trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_record() {
        let poem = PoemRecord::new("O Captain! My Captain!", "Walt Whitman", "O Captain! my Captain!\nour fearful trip is done");
        assert_eq!(poem.validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_empty_field() {
        let poem = PoemRecord::new("", "Walt Whitman", "");
        assert_eq!(poem.validate(), Err(ValidationError::EmptyField(Field::Title)));

        let poem = PoemRecord::new("Title", "Walt Whitman", " \n\t ");
        assert_eq!(poem.validate(), Err(ValidationError::EmptyField(Field::Body)));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Title.to_string(), "title");
        assert_eq!(Field::Poet.to_string(), "poet");
        assert_eq!(Field::Body.to_string(), "body");
        assert_eq!(
            ValidationError::EmptyField(Field::Poet).to_string(),
            "poem has an empty poet"
        );
    }
}
