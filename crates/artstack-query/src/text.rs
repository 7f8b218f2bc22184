//! Text normalization for case-insensitive matching and ordering.

use unicode_normalization::UnicodeNormalization;

/// Canonical casefold policy: NFKC + Unicode lowercase.
///
/// Used for every case-insensitive comparison in the query engine — free
/// text matching, tag matching, and name ordering — so that "search" and
/// "sort" agree on what equal strings are.
pub fn fold_case(input: &str) -> String {
    input.nfkc().collect::<String>().to_lowercase()
}
