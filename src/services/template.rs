use crate::models::SessionRecord;

pub const TOKEN_TITLE: &str = "{{TITLE}}";
pub const TOKEN_AUTHOR: &str = "{{AUTHOR}}";
pub const TOKEN_DATE: &str = "{{DATE}}";
pub const TOKEN_CATEGORIES: &str = "{{CATEGORIES}}";
pub const TOKEN_ABSTRACT: &str = "{{ABSTRACT}}";

/// Replacement text for each template token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateValues {
    pub title: String,
    pub author: String,
    pub date: String,
    pub categories: String,
    pub abstract_text: String,
}

impl TemplateValues {
    pub fn from_record(record: &SessionRecord, abstract_placeholder: &str) -> Self {
        let abstract_text = if record.abstract_text.is_empty() {
            abstract_placeholder.to_string()
        } else {
            record.abstract_text.clone()
        };

        Self {
            title: record.title.clone(),
            author: record.presenter.clone(),
            date: record.date.clone(),
            categories: record.categories(),
            abstract_text,
        }
    }

    fn replacements(&self) -> [(&'static str, &str); 5] {
        [
            (TOKEN_TITLE, self.title.as_str()),
            (TOKEN_AUTHOR, self.author.as_str()),
            (TOKEN_DATE, self.date.as_str()),
            (TOKEN_CATEGORIES, self.categories.as_str()),
            (TOKEN_ABSTRACT, self.abstract_text.as_str()),
        ]
    }
}

/// Literal token replacement, applied in token order. Anything that is not
/// one of the five known tokens is left untouched.
pub fn fill(template: &str, values: &TemplateValues) -> String {
    values
        .replacements()
        .into_iter()
        .fold(template.to_string(), |doc, (token, value)| {
            doc.replace(token, value)
        })
}
