//! Group records by normalized title.

use std::collections::HashMap;

use citecheck_core::record::Record;

/// Records sharing one normalized title, in batch order.
#[derive(Debug, Clone)]
pub struct TitleGroup<'a> {
    pub normalized_title: String,
    pub records: Vec<&'a Record>,
}

impl TitleGroup<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Only groups of two or more can hold a conflict.
    pub fn is_duplicate(&self) -> bool {
        self.records.len() > 1
    }

    /// Every unordered pair `(i, j)` with `i < j`.
    pub fn pairs(&self) -> impl Iterator<Item = (&Record, &Record)> + '_ {
        self.records.iter().enumerate().flat_map(move |(i, a)| {
            self.records[i + 1..].iter().map(move |b| (*a, *b))
        })
    }
}

/// Build groups in O(n). Groups keep first-appearance order; blank titles
/// are not grouped since they carry no identity.
pub fn group_by_title<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<TitleGroup<'a>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<TitleGroup<'a>> = Vec::new();

    for record in records {
        let title = record.normalized_title();
        if title.is_empty() {
            continue;
        }
        match index.get(&title) {
            Some(&i) => groups[i].records.push(record),
            None => {
                index.insert(title.clone(), groups.len());
                groups.push(TitleGroup {
                    normalized_title: title,
                    records: vec![record],
                });
            }
        }
    }

    groups
}
