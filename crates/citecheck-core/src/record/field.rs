use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fields a validation issue can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Title,
    Creators,
    Date,
    Publisher,
    PublicationVenue,
    Place,
    Doi,
    Isbn,
    Issn,
    Url,
    Pages,
    Volume,
    Issue,
    /// The DOI/ISBN/URL group as a whole.
    Identifiers,
}

impl RecordField {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::Title => "title",
            RecordField::Creators => "creators",
            RecordField::Date => "date",
            RecordField::Publisher => "publisher",
            RecordField::PublicationVenue => "publication_venue",
            RecordField::Place => "place",
            RecordField::Doi => "doi",
            RecordField::Isbn => "isbn",
            RecordField::Issn => "issn",
            RecordField::Url => "url",
            RecordField::Pages => "pages",
            RecordField::Volume => "volume",
            RecordField::Issue => "issue",
            RecordField::Identifiers => "identifiers",
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
