//! Case-insensitive text filtering over the icon catalog.

use super::IconRecord;

/// Trim and case-fold a raw query into the needle used for matching.
pub fn normalize_query(query: &str) -> String {
    fold_case(query.trim())
}

/// Lower-case one char at a time so a fragment folds the same way inside a longer word.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Whether `record` matches an already-normalized `needle`.
///
/// An empty needle matches everything. A missing symbol never matches.
pub fn record_matches(record: &IconRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    contains_folded(&record.display_name, needle)
        || contains_folded(&record.name, needle)
        || record
            .symbol
            .as_deref()
            .is_some_and(|symbol| contains_folded(symbol, needle))
}

/// Records matching `query`, in catalog order.
pub fn filter_icons<'a>(records: &'a [IconRecord], query: &str) -> Vec<&'a IconRecord> {
    let needle = normalize_query(query);
    records
        .iter()
        .filter(|record| record_matches(record, &needle))
        .collect()
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle_lower.is_ascii() {
        let needle = needle_lower.as_bytes();
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }
    fold_case(haystack).contains(needle_lower)
}

/// Cached indices of the records matching the current query.
///
/// Recomputed only when the normalized query or the catalog generation changes.
#[derive(Debug, Default)]
pub struct FilteredView {
    key: Option<ViewKey>,
    indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    generation: u64,
    needle: String,
}

impl FilteredView {
    /// Bring the view in line with `(records, query)`. Returns `true` when it was recomputed.
    pub fn refresh(&mut self, records: &[IconRecord], generation: u64, query: &str) -> bool {
        let needle = normalize_query(query);
        let narrowing = match &self.key {
            Some(key) if key.generation == generation && key.needle == needle => return false,
            // A longer needle that extends the previous one can only shrink the match set.
            Some(key) => key.generation == generation && needle.starts_with(&key.needle),
            None => false,
        };
        self.indices = if narrowing {
            self.indices
                .iter()
                .copied()
                .filter(|&idx| {
                    records
                        .get(idx)
                        .is_some_and(|record| record_matches(record, &needle))
                })
                .collect()
        } else {
            records
                .iter()
                .enumerate()
                .filter(|(_, record)| record_matches(record, &needle))
                .map(|(idx, _)| idx)
                .collect()
        };
        self.key = Some(ViewKey { generation, needle });
        true
    }

    /// Drop the cached result so the next `refresh` recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.indices.clear();
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Matching records paired with their catalog index.
    pub fn iter<'a>(
        &'a self,
        records: &'a [IconRecord],
    ) -> impl Iterator<Item = (usize, &'a IconRecord)> + 'a {
        self.indices
            .iter()
            .filter_map(move |&idx| records.get(idx).map(|record| (idx, record)))
    }
}
