//! Format checks shared by the rule passes and the scorer.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static DOI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^10\.\d{4,}/\S+$").unwrap());

/// A single page or a range; en dashes are common in exported data.
static PAGES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(?:[-\u{2013}]\d+)?$").unwrap());

static ISSN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-?\d{3}[\dXx]$").unwrap());

/// Resolver prefixes stripped before matching a DOI.
const DOI_PREFIXES: [&str; 4] = ["https://doi.org/", "http://doi.org/", "https://dx.doi.org/", "doi:"];

/// Strip resolver prefixes and surrounding whitespace from a DOI.
pub fn normalize_doi(doi: &str) -> &str {
    let trimmed = doi.trim();
    DOI_PREFIXES
        .iter()
        .find_map(|p| {
            trimmed
                .get(..p.len())
                .filter(|head| head.eq_ignore_ascii_case(p))
                .map(|_| &trimmed[p.len()..])
        })
        .unwrap_or(trimmed)
}

pub fn is_well_formed_doi(doi: &str) -> bool {
    DOI_RE.is_match(normalize_doi(doi))
}

/// 10 or 13 digits once hyphens and spaces are gone; ISBN-10 may end in X.
pub fn is_well_formed_isbn(isbn: &str) -> bool {
    let compact: Vec<char> = isbn.chars().filter(|c| *c != '-' && !c.is_whitespace()).collect();
    match compact.len() {
        13 => compact.iter().all(|c| c.is_ascii_digit()),
        10 => {
            compact[..9].iter().all(|c| c.is_ascii_digit())
                && (compact[9].is_ascii_digit() || compact[9] == 'X' || compact[9] == 'x')
        }
        _ => false,
    }
}

pub fn is_well_formed_issn(issn: &str) -> bool {
    ISSN_RE.is_match(issn.trim())
}

/// Parses as an absolute URL with an http(s) scheme and a host.
pub fn is_well_formed_url(url: &str) -> bool {
    Url::parse(url.trim())
        .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
}

pub fn is_well_formed_pages(pages: &str) -> bool {
    PAGES_RE.is_match(pages.trim())
}
