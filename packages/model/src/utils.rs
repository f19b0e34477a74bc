use std::collections::BTreeSet;

/// Lowercase, hyphen-separated form of `text` suitable for URLs and file names
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// One greater than the largest `_<number>` suffix among `ids` (1 if none)
///
/// When the largest suffix is `u64::MAX`, falls back to the lowest suffix
/// not used by any id.
pub fn next_suffix<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    let used: BTreeSet<u64> = ids
        .filter_map(|id| id.rsplit_once('_'))
        .filter_map(|(_, suffix)| suffix.parse::<u64>().ok())
        .collect();

    match used.last() {
        None => 1,
        Some(max) => max
            .checked_add(1)
            .or_else(|| (1..u64::MAX).find(|n| !used.contains(n)))
            .unwrap_or_default(),
    }
}
