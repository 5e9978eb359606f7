//! Records that can be laid out as report rows.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// One row of a report: a fixed number of text fields plus the two labels the
/// report aggregates on.
pub trait Record {
    /// Number of values returned by [`fields`](Record::fields). Must match the
    /// number of configured columns.
    const FIELD_COUNT: usize;

    /// The cell text, in column order. Values are raw; sanitizing happens at
    /// render time.
    fn fields(&self) -> Vec<Cow<'_, str>>;

    /// Free-text category label, counted when it names a known [`Category`].
    fn category(&self) -> &str;

    /// Free-text classification label; picks the badge colors.
    fn classification(&self) -> &str;
}

/// A generated test case, in the shape the generation service returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_data: Option<String>,
    #[serde(default)]
    pub expected_result: String,
    #[serde(default)]
    pub category: String,
    /// Classification label. Kept as text so unknown labels still render.
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Record for TestCase {
    const FIELD_COUNT: usize = 7;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.category.as_str()),
            Cow::Borrowed(self.kind.as_str()),
            Cow::Owned(self.steps.join("\n")),
            Cow::Borrowed(self.test_data.as_deref().unwrap_or("")),
            Cow::Borrowed(self.expected_result.as_str()),
        ]
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn classification(&self) -> &str {
        &self.kind
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CaseList {
    Bare(Vec<TestCase>),
    Wrapped { cases: Vec<TestCase> },
}

/// Parses test cases from either a bare JSON array or an object with a
/// `cases` array (the generation response shape; other keys are ignored).
pub fn parse_test_cases(json: &str) -> Result<Vec<TestCase>, serde_json::Error> {
    Ok(match serde_json::from_str(json)? {
        CaseList::Bare(cases) | CaseList::Wrapped { cases } => cases,
    })
}

/// The classifications a test case can carry. Anything else is
/// [`Unrecognized`](Classification::Unrecognized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Sanity,
    Regression,
    Performance,
    Security,
    Unrecognized,
}

impl Classification {
    pub const ALL: [Classification; 5] = [
        Classification::Sanity,
        Classification::Regression,
        Classification::Performance,
        Classification::Security,
        Classification::Unrecognized,
    ];

    /// Matches a label case-insensitively, ignoring surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL[..4]
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
            .unwrap_or(Classification::Unrecognized)
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::Sanity => "Sanity",
            Classification::Regression => "Regression",
            Classification::Performance => "Performance",
            Classification::Security => "Security",
            Classification::Unrecognized => "Other",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The named test case categories that get counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Positive,
    Negative,
    Edge,
    Authorization,
    NonFunctional,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Positive,
        Category::Negative,
        Category::Edge,
        Category::Authorization,
        Category::NonFunctional,
    ];

    /// `None` for labels outside the named set.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Edge => "Edge",
            Category::Authorization => "Authorization",
            Category::NonFunctional => "Non-Functional",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_generation_shape() {
        let json = r#"{
            "id": "TC-001",
            "title": "Login with valid credentials",
            "steps": ["Open login page", "Enter valid email", "Click login button"],
            "expectedResult": "Dashboard is shown",
            "category": "Positive",
            "type": "Sanity"
        }"#;
        let case: TestCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.test_data, None);
        assert_eq!(case.classification(), "Sanity");

        let fields = case.fields();
        assert_eq!(fields.len(), TestCase::FIELD_COUNT);
        assert_eq!(fields[3], "Sanity");
        assert_eq!(fields[4], "Open login page\nEnter valid email\nClick login button");
        assert_eq!(fields[5], "");
    }

    #[test]
    fn accepts_bare_and_wrapped_lists() {
        let case = r#"{"id":"1","title":"t","steps":[],"expectedResult":"e","category":"Edge","type":"Security"}"#;
        let bare = parse_test_cases(&format!("[{}]", case)).unwrap();
        let wrapped = parse_test_cases(&format!(
            r#"{{"cases":[{case},{case}],"model":"m","promptTokens":1,"completionTokens":2}}"#
        ))
        .unwrap();
        assert_eq!(bare.len(), 1);
        assert_eq!(wrapped.len(), 2);
        assert!(parse_test_cases(r#"{"items":[]}"#).is_err());
    }

    #[test]
    fn classification_labels() {
        assert_eq!(Classification::from_label("Regression"), Classification::Regression);
        assert_eq!(Classification::from_label(" security "), Classification::Security);
        assert_eq!(Classification::from_label("Smoke"), Classification::Unrecognized);
        assert_eq!(Classification::from_label("Other"), Classification::Unrecognized);
        assert_eq!(Classification::from_label(""), Classification::Unrecognized);
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::from_label("Non-Functional"), Some(Category::NonFunctional));
        assert_eq!(Category::from_label("edge"), Some(Category::Edge));
        assert_eq!(Category::from_label("Usability"), None);
    }
}
