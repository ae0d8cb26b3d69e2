//! Cross-source matching between catalog books and bestseller entries.
//!
//! The two sources share no identifier scheme beyond an optional ISBN-13, so
//! matching falls back to a permissive text comparison of title and author.
//! The substring rule tolerates subtitles and initials, at the price of false
//! positives for short titles contained in longer ones.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::types::ListedBook;
use crate::book::Book;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Does `entry` refer to `book`?
///
/// 1. Equal ISBN-13 on both sides.
/// 2. Otherwise the title and the primary author must both fuzzily match.
///    With no known author the title alone decides.
pub fn matches(book: &Book, entry: &ListedBook) -> bool {
    if isbn13_matches(book, entry) {
        return true;
    }

    let title_match = same_text(&book.title, entry.title.as_deref().unwrap_or_default());
    let author_match = match book.primary_author() {
        Some(author) => same_text(author, entry.author.as_deref().unwrap_or_default()),
        None => true,
    };

    title_match && author_match
}

fn isbn13_matches(book: &Book, entry: &ListedBook) -> bool {
    match (book.isbn.as_deref(), entry.primary_isbn13.as_deref()) {
        (Some(ours), Some(theirs)) => ours.len() == 13 && ours == theirs,
        _ => false,
    }
}

/// Lower-cased, punctuation stripped, whitespace collapsed and trimmed.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Equal after normalization, or one contains the other.
///
/// Empty text is contained in everything, so a missing entry field never
/// rules a match out on its own.
pub fn same_text(a: &str, b: &str) -> bool {
    let x = normalize_text(a);
    let y = normalize_text(b);

    x == y || x.contains(&y) || y.contains(&x)
}
