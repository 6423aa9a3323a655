use fmcourses_client::issues::Issue;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    normalize::normalize_keyword,
    parse::{parse_body, Field, ParsedBody},
    url::is_valid_url,
    NO_WEBPAGE, UNKNOWN,
};

/// One course, as shown on the courses page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub course_code: Option<String>,
    pub course_institution: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub course_contact: Option<String>,
    pub course_concepts: Vec<String>,
    pub course_tools: Vec<String>,
    pub course_webpage: String,
    pub course_year_level: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub course_reviewed: Option<String>,
    pub course_title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub course_country: Option<String>,
}

/// The result of processing every issue
#[derive(Debug, Default, Clone)]
pub struct Courses {
    pub records: Vec<CourseRecord>,

    /// Email addresses split off the contact field, in issue order
    pub emails: Vec<String>,
}

impl CourseRecord {
    /// Build a record from an issue, pushing any contact email onto `emails`
    pub fn from_issue(issue: &Issue, emails: &mut Vec<String>) -> Self {
        let mut parsed = parse_body(issue.body_text());
        let n = issue.number;

        let course_contact = parsed.take(Field::Contact).map(|contact| {
            let (name, email) = split_contact(&contact);
            if let Some(email) = email {
                emails.push(email.to_string());
            }
            name.to_string()
        });

        CourseRecord {
            course_code: parsed.take(Field::Code),
            course_institution: or_unknown(n, Field::Institution, &mut parsed),
            course_contact,
            course_concepts: keyword_list(n, Field::Concepts, &parsed),
            course_tools: keyword_list(n, Field::Tools, &parsed),
            course_webpage: webpage(n, parsed.get(Field::Webpage)),
            course_year_level: or_unknown(n, Field::YearLevel, &mut parsed),
            course_reviewed: parsed.take(Field::Reviewed),
            course_title: issue.title.clone(),
            course_country: issue.labels.first().map(|l| l.name.clone()),
        }
    }
}

/// Build records for every issue, in order
pub fn build_courses(issues: &[Issue]) -> Courses {
    let mut courses = Courses::default();
    for issue in issues {
        let record = CourseRecord::from_issue(issue, &mut courses.emails);
        courses.records.push(record);
    }
    info!("built {} course records", courses.records.len());

    courses
}

fn or_unknown(n: u64, field: Field, parsed: &mut ParsedBody) -> String {
    parsed.take(field).unwrap_or_else(|| {
        debug!("#{}: no {}, using {:?}", n, field.name(), UNKNOWN);
        UNKNOWN.to_string()
    })
}

/// Split a comma separated list of keywords and normalise each one.
///
/// Empty pieces (`"SAT,"`) are kept; only a missing or empty value gets the placeholder.
fn keyword_list(n: u64, field: Field, parsed: &ParsedBody) -> Vec<String> {
    match parsed.get(field) {
        Some(raw) if !raw.is_empty() => raw.split(',').map(normalize_keyword).collect(),
        _ => {
            debug!("#{}: no {}, using {:?}", n, field.name(), [UNKNOWN]);
            vec![UNKNOWN.to_string()]
        }
    }
}

/// Pick out a usable link from the webpage field, or the placeholder.
pub fn webpage(n: u64, raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        debug!("#{}: no webpage", n);
        return NO_WEBPAGE.to_string();
    };

    let url = raw.split_whitespace().next().unwrap_or("");
    if !is_valid_url(url) {
        debug!("#{}: ignoring invalid webpage {:?}", n, raw);
        return NO_WEBPAGE.to_string();
    }

    url.strip_suffix('/').unwrap_or(url).to_string()
}

/// Split `Name, email` into its parts. Anything after the first comma counts as the email.
///
/// The name is kept exactly as written.
pub fn split_contact(contact: &str) -> (&str, Option<&str>) {
    match contact.split_once(',') {
        Some((name, email)) => (name, Some(email.trim())),
        None => (contact, None),
    }
}
