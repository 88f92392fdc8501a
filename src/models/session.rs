use super::FieldMap;
use crate::config::SessionConfig;
use crate::error::ScaffoldError;

// Exact label text used by the propose-session issue form.
pub const LABEL_TITLE: &str = "Session title";
pub const LABEL_PRESENTER: &str = "Presenter";
pub const LABEL_TYPE: &str = "Session type";
pub const LABEL_DATE: &str = "Session date (YYYY-MM-DD)";
pub const LABEL_ABSTRACT: &str = "Abstract (paste text)";
pub const LABEL_BIBTEX: &str = "BibTeX (optional)";
pub const LABEL_DOI: &str = "DOI (optional)";
pub const LABEL_NOTES: &str = "Notes (optional)";

/// One proposed session, as read from a submitted issue form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRecord {
    pub title: String,
    pub presenter: String,
    pub session_type: String,
    pub date: String,
    pub abstract_text: String,
    pub bibtex: String,
    pub doi: String,
    pub notes: String,
}

impl SessionRecord {
    /// Builds a record from parsed form fields.
    ///
    /// An empty `Session title` falls back to the issue title with the
    /// configured prefix (e.g. `[Session]`) removed. An empty or absent
    /// `Session type` becomes the configured default.
    pub fn from_fields(fields: &FieldMap, issue_title: &str, defaults: &SessionConfig) -> Self {
        let field = |label: &str| fields.get(label).unwrap_or("").trim().to_string();

        let mut title = field(LABEL_TITLE);
        if title.is_empty() {
            title = issue_title
                .strip_prefix(defaults.title_prefix.as_str())
                .unwrap_or(issue_title)
                .trim()
                .to_string();
        }

        let mut session_type = field(LABEL_TYPE);
        if session_type.is_empty() {
            session_type = defaults.default_type.clone();
        }

        Self {
            title,
            presenter: field(LABEL_PRESENTER),
            session_type,
            date: field(LABEL_DATE),
            abstract_text: field(LABEL_ABSTRACT),
            bibtex: field(LABEL_BIBTEX),
            doi: field(LABEL_DOI),
            notes: field(LABEL_NOTES),
        }
    }

    /// Names of the required fields that are empty, in a fixed order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("presenter", &self.presenter),
            ("date", &self.date),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<(), ScaffoldError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ScaffoldError::MissingFields(missing))
        }
    }

    /// Front-matter categories list, e.g. `[paper-discussion]`.
    pub fn categories(&self) -> String {
        format!("[{}]", self.session_type)
    }
}
