//! Email request and draft value types.

use crate::domain::{AppError, ChallengeRecord};

/// Output language every draft is written in.
pub const TARGET_LANGUAGE: &str = "Dutch";

/// A challenge paired with the company the email is addressed to.
#[derive(Debug, Clone, Copy)]
pub struct EmailRequest<'a> {
    record: &'a ChallengeRecord,
    company_name: &'a str,
}

impl<'a> EmailRequest<'a> {
    /// Pair a selected record with a company name.
    ///
    /// Fails when no record was resolved or the company name is blank.
    pub fn new(
        record: Option<&'a ChallengeRecord>,
        company_name: &'a str,
    ) -> Result<Self, AppError> {
        let record = record.ok_or_else(|| AppError::validation("No challenge selected"))?;
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return Err(AppError::validation("Company name must not be empty"));
        }
        Ok(Self { record, company_name })
    }

    pub fn record(&self) -> &'a ChallengeRecord {
        self.record
    }

    pub fn company_name(&self) -> &'a str {
        self.company_name
    }
}

/// Rendered instruction text handed to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptText(String);

impl PromptText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PromptText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

const SUBJECT_LABELS: &[&str] = &["subject:", "onderwerp:"];

/// A generated email: subject line and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    pub raw: String,
}

impl EmailDraft {
    /// Split completion text into subject and body.
    ///
    /// The first non-empty line is the subject (with any `Subject:` or
    /// `Onderwerp:` label and markdown emphasis removed); the rest is the body.
    /// A single line is the subject when it carries a label, otherwise the body.
    /// Returns `None` for blank text.
    pub fn from_completion(text: &str) -> Option<Self> {
        let raw = text.trim();
        if raw.is_empty() {
            return None;
        }

        let mut lines = raw.lines();
        let first = lines.next().unwrap_or_default();
        let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

        if body.is_empty() {
            let (subject, body) = match labelled_subject(first) {
                Some(subject) => (subject, String::new()),
                None => (String::new(), raw.to_string()),
            };
            return Some(Self { subject, body, raw: raw.to_string() });
        }

        Some(Self { subject: clean_subject(first), body, raw: raw.to_string() })
    }
}

fn strip_emphasis(line: &str) -> &str {
    line.trim().trim_start_matches('#').trim().trim_matches('*').trim()
}

/// Subject text when the line starts with a subject label.
fn labelled_subject(line: &str) -> Option<String> {
    let line = strip_emphasis(line);
    SUBJECT_LABELS.iter().find_map(|label| {
        let prefix = line.get(..label.len())?;
        prefix
            .eq_ignore_ascii_case(label)
            .then(|| line[label.len()..].trim().trim_matches('*').trim().to_string())
    })
}

fn clean_subject(line: &str) -> String {
    labelled_subject(line).unwrap_or_else(|| strip_emphasis(line).to_string())
}

impl std::fmt::Display for EmailDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.subject.is_empty() {
            write!(f, "{}", self.body)
        } else {
            write!(f, "Subject: {}\n\n{}", self.subject, self.body)
        }
    }
}
