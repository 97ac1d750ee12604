use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static COURSE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+)([0-9]+)$").expect("course code pattern"));

/// Splits a course code into its subject prefix and number suffix.
///
/// Returns `None` for anything that does not match `^[A-Z]+[0-9]+$`;
/// malformed codes are excluded rather than reported.
pub fn decompose(code: &str) -> Option<(&str, &str)> {
    let caps = COURSE_CODE.captures(code)?;
    // Both groups are non-optional in the pattern.
    let subject = caps.get(1)?.as_str();
    let number = caps.get(2)?.as_str();
    Some((subject, number))
}

/// Lookup structure behind the cascading subject/number dropdowns.
///
/// Built once from the catalog the server ships with the page and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseIndex {
    subjects: Vec<String>,
    numbers_by_subject: HashMap<String, Vec<String>>,
}

impl CourseIndex {
    /// Builds the index from a flat list of course codes.
    ///
    /// Codes that fail to decompose are dropped. Subjects come out
    /// deduplicated and sorted lexicographically; numbers within a subject
    /// are sorted by numeric value.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut subjects = Vec::new();
        let mut numbers_by_subject: HashMap<String, Vec<String>> = HashMap::new();
        for code in codes {
            let Some((subject, number)) = decompose(code.as_ref()) else {
                continue;
            };
            if !subjects.iter().any(|s| s == subject) {
                subjects.push(subject.to_string());
            }
            numbers_by_subject
                .entry(subject.to_string())
                .or_default()
                .push(number.to_string());
        }
        subjects.sort();
        for numbers in numbers_by_subject.values_mut() {
            numbers.sort_by(|a, b| cmp_numeric(a, b));
        }
        Self {
            subjects,
            numbers_by_subject,
        }
    }

    /// Builds the index from a pre-structured subject -> numbers catalog.
    ///
    /// Subject order is taken from the source as-is; the flat-list path
    /// sorts instead. Numbers are still sorted numerically.
    pub fn from_catalog<I>(catalog: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut subjects = Vec::new();
        let mut numbers_by_subject: HashMap<String, Vec<String>> = HashMap::new();
        for (subject, numbers) in catalog {
            if !subjects.iter().any(|s| *s == subject) {
                subjects.push(subject.clone());
            }
            numbers_by_subject
                .entry(subject)
                .or_default()
                .extend(numbers);
        }
        for numbers in numbers_by_subject.values_mut() {
            numbers.sort_by(|a, b| cmp_numeric(a, b));
        }
        Self {
            subjects,
            numbers_by_subject,
        }
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Number list for a subject, in stored (numeric-ascending) order.
    /// Unknown subjects yield an empty slice.
    pub fn numbers(&self, subject: &str) -> &[String] {
        self.numbers_by_subject
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_subject(&self, subject: &str) -> bool {
        self.numbers_by_subject.contains_key(subject)
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// Orders digit strings by magnitude, so "9" precedes "10". Works for
/// digit strings of any length; leading zeroes do not affect the value.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
