use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::RecordField;
use RecordField::{Creators, Date, PublicationVenue, Publisher, Title, Url};

/// The closed set of bibliographic record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Book,
    BookSection,
    JournalArticle,
    ConferencePaper,
    Thesis,
    Webpage,
    Manuscript,
    Report,
    Preprint,
    Patent,
}

impl RecordKind {
    /// All kinds, in declaration order.
    pub const ALL: [RecordKind; 10] = [
        RecordKind::Book,
        RecordKind::BookSection,
        RecordKind::JournalArticle,
        RecordKind::ConferencePaper,
        RecordKind::Thesis,
        RecordKind::Webpage,
        RecordKind::Manuscript,
        RecordKind::Report,
        RecordKind::Preprint,
        RecordKind::Patent,
    ];

    /// Fields every record of this kind must carry.
    pub fn required_fields(self) -> &'static [RecordField] {
        match self {
            RecordKind::Book => &[Title, Creators, Publisher, Date],
            RecordKind::BookSection => &[Title, Creators, PublicationVenue, Date],
            RecordKind::JournalArticle => &[Title, Creators, PublicationVenue, Date],
            RecordKind::ConferencePaper => &[Title, Creators, PublicationVenue, Date],
            RecordKind::Thesis => &[Title, Creators, Publisher, Date],
            RecordKind::Webpage => &[Title, Url, Date],
            RecordKind::Manuscript => &[Title, Creators],
            RecordKind::Report => &[Title, Creators, Date],
            RecordKind::Preprint => &[Title, Creators, Date],
            RecordKind::Patent => &[Title, Creators, Date],
        }
    }

    /// Kinds that are not expected to carry a DOI, ISBN, or URL.
    pub fn is_identifier_exempt(self) -> bool {
        matches!(self, RecordKind::Manuscript)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Book => "book",
            RecordKind::BookSection => "book-section",
            RecordKind::JournalArticle => "journal-article",
            RecordKind::ConferencePaper => "conference-paper",
            RecordKind::Thesis => "thesis",
            RecordKind::Webpage => "webpage",
            RecordKind::Manuscript => "manuscript",
            RecordKind::Report => "report",
            RecordKind::Preprint => "preprint",
            RecordKind::Patent => "patent",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
