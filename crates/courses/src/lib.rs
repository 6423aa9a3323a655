//! Builds the static course catalogue from course-submission issues.
//!
//! Each open issue describes one course using a `Key: value` template. We parse
//! the body, tidy up the free-text fields, and export everything as a script
//! the courses page includes directly.
pub mod aggregate;
pub mod export;
pub mod labels;
pub mod normalize;
pub mod parse;
pub mod record;
pub mod url;

pub use export::Catalogue;
pub use record::{build_courses, CourseRecord, Courses};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Placeholder for fields a submission left out
pub const UNKNOWN: &str = "Unknown";

/// Placeholder link used when there's no usable webpage
pub const NO_WEBPAGE: &str = "#";

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {}", .0)]
    IOError(#[from] std::io::Error),

    #[error("serde error: {}", .0)]
    SerdeError(#[from] serde_json::Error),

    #[error("country list should be a JSON object of names")]
    BadCountries,
}
