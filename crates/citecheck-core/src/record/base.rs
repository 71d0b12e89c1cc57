use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::creator::Creator;
use super::date::PartialDate;
use super::field::RecordField;
use super::kind::RecordKind;

/// One bibliographic entry as supplied by the host.
///
/// Dates and identifiers stay as raw strings so that malformed values reach
/// the validator and become issues instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Opaque identifier, unique within a batch.
    pub id: String,
    pub kind: RecordKind,
    pub title: String,
    /// Ordered; the first author-role creator is the primary author.
    #[serde(default)]
    pub creators: Vec<Creator>,
    /// `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`.
    pub date: Option<String>,
    pub publisher: Option<String>,
    pub publication_venue: Option<String>,
    pub place: Option<String>,
    pub doi: Option<String>,
    pub isbn: Option<String>,
    pub issn: Option<String>,
    pub url: Option<String>,
    pub pages: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub notes: Option<String>,
}

impl Record {
    /// A record with only the identifying triple set.
    pub fn new(id: impl Into<String>, kind: RecordKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            creators: Vec::new(),
            date: None,
            publisher: None,
            publication_venue: None,
            place: None,
            doi: None,
            isbn: None,
            issn: None,
            url: None,
            pages: None,
            volume: None,
            issue: None,
            tags: BTreeSet::new(),
            notes: None,
        }
    }

    /// The trimmed value of a string field, `None` when absent or blank.
    /// `Creators` and `Identifiers` are not string fields and always yield `None`.
    pub fn text(&self, field: RecordField) -> Option<&str> {
        let raw = match field {
            RecordField::Title => Some(self.title.as_str()),
            RecordField::Date => self.date.as_deref(),
            RecordField::Publisher => self.publisher.as_deref(),
            RecordField::PublicationVenue => self.publication_venue.as_deref(),
            RecordField::Place => self.place.as_deref(),
            RecordField::Doi => self.doi.as_deref(),
            RecordField::Isbn => self.isbn.as_deref(),
            RecordField::Issn => self.issn.as_deref(),
            RecordField::Url => self.url.as_deref(),
            RecordField::Pages => self.pages.as_deref(),
            RecordField::Volume => self.volume.as_deref(),
            RecordField::Issue => self.issue.as_deref(),
            RecordField::Creators | RecordField::Identifiers => None,
        };
        raw.map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether a field carries a usable value.
    pub fn has(&self, field: RecordField) -> bool {
        match field {
            RecordField::Creators => !self.creators.is_empty(),
            RecordField::Identifiers => self.has_persistent_identifier(),
            other => self.text(other).is_some(),
        }
    }

    /// DOI, ISBN, or URL present (well-formed or not).
    pub fn has_persistent_identifier(&self) -> bool {
        self.has(RecordField::Doi) || self.has(RecordField::Isbn) || self.has(RecordField::Url)
    }

    /// Whether the record lacks both a DOI and an ISBN.
    pub fn lacks_doi_and_isbn(&self) -> bool {
        !self.has(RecordField::Doi) && !self.has(RecordField::Isbn)
    }

    /// The parsed date, if present and well-formed.
    pub fn partial_date(&self) -> Option<PartialDate> {
        self.text(RecordField::Date).and_then(PartialDate::parse)
    }

    /// Publication year, if the date parses.
    pub fn year(&self) -> Option<i32> {
        self.partial_date().map(|d| d.year)
    }

    /// First creator with an author role.
    pub fn primary_author(&self) -> Option<&Creator> {
        self.creators.iter().find(|c| c.role.is_author())
    }

    /// Title case-folded, trimmed, and with inner whitespace collapsed.
    pub fn normalized_title(&self) -> String {
        self.title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Identity equality: two records are equal if they share an id.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
