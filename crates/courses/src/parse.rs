//! Parsing for the `Key: value` issue template.
//!
//! The template asks for fields like this, one per line:
//!
//! ```text
//! Course code, if applicable: CS101
//! University hosting the course: University of Somewhere
//! Contact person: Jane Doe, jane@example.com
//! Concepts taught: Hoare logic, model checking
//! Tools used: Dafny, NuSMV
//! Webpage: https://example.com/cs101
//! ```
//!
//! Anything that doesn't fit that shape is ignored.
use std::collections::HashMap;

use log::trace;

/// Separates a key from its value on each line
pub const SEPARATOR: &str = ": ";

/// Characters that end a line. `\r\n` splits twice, leaving an empty line that is dropped.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// A field we know how to read from an issue body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Code,
    Institution,
    Contact,
    Concepts,
    Tools,
    Webpage,
    YearLevel,
    Reviewed,
}

/// Maps the (lower-cased) keys used in the issue template to our fields
const KEYS: &[(&str, Field)] = &[
    ("course code, if applicable", Field::Code),
    ("university hosting the course", Field::Institution),
    ("contact person", Field::Contact),
    ("concepts taught", Field::Concepts),
    ("tools used", Field::Tools),
    ("webpage", Field::Webpage),
    ("year/level", Field::YearLevel),
    ("reviewed", Field::Reviewed),
];

impl Field {
    /// Look up the field for a key as written in the issue
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        KEYS.iter().find(|(k, _)| *k == key).map(|(_, f)| *f)
    }

    /// The name this field is exported under
    pub fn name(self) -> &'static str {
        match self {
            Field::Code => "course_code",
            Field::Institution => "course_institution",
            Field::Contact => "course_contact",
            Field::Concepts => "course_concepts",
            Field::Tools => "course_tools",
            Field::Webpage => "course_webpage",
            Field::YearLevel => "course_year_level",
            Field::Reviewed => "course_reviewed",
        }
    }
}

/// Raw field values read from one issue body, trimmed but otherwise untouched
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedBody(HashMap<Field, String>);

impl ParsedBody {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn take(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Field, String)> for ParsedBody {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        ParsedBody(iter.into_iter().collect())
    }
}

/// Read the known fields out of an issue body.
///
/// Lines must contain the separator exactly once. Later lines win if a field is repeated.
pub fn parse_body(body: &str) -> ParsedBody {
    body.split(LINE_BREAKS)
        .filter_map(|line| {
            let mut parts = line.split(SEPARATOR);
            let (key, value) = (parts.next()?, parts.next()?);
            if parts.next().is_some() {
                trace!("dropping line with several separators: {:?}", line);
                return None;
            }

            match Field::from_key(key) {
                Some(field) => Some((field, value.trim().to_string())),
                None => {
                    trace!("dropping unknown key {:?}", key);
                    None
                }
            }
        })
        .collect()
}
