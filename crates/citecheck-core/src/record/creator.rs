use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Role a creator plays for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum CreatorRole {
    Author,
    Editor,
    Translator,
    Contributor,
    InstitutionalAuthor,
    Reviewer,
    SeriesEditor,
}

impl CreatorRole {
    /// Roles that count when looking up a record's primary author.
    pub fn is_author(self) -> bool {
        matches!(self, CreatorRole::Author | CreatorRole::InstitutionalAuthor)
    }
}

/// A person or institution credited on a record.
///
/// People carry a last name; institutions carry a single `institution` name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub role: CreatorRole,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
}

impl Creator {
    pub fn person(role: CreatorRole, first_name: Option<&str>, last_name: &str) -> Self {
        Self {
            role,
            first_name: first_name.map(str::to_string),
            last_name: Some(last_name.to_string()),
            institution: None,
        }
    }

    /// An institution credited under a single name.
    pub fn institution(name: &str) -> Self {
        Self {
            role: CreatorRole::InstitutionalAuthor,
            first_name: None,
            last_name: None,
            institution: Some(name.to_string()),
        }
    }

    /// The name used to tell creators apart: the last name for people,
    /// the institutional name otherwise. Blank values count as absent.
    pub fn family_name(&self) -> Option<&str> {
        non_blank(self.last_name.as_deref()).or_else(|| non_blank(self.institution.as_deref()))
    }

    /// Whether this creator can be identified at all.
    pub fn is_identifiable(&self) -> bool {
        self.family_name().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
