//! Pure string helpers for budget-constrained text.
//!
//! All limits are expressed in characters (not bytes); every truncation
//! degrades to a hard character cut as a last resort so non-empty input
//! never produces empty output.

use std::sync::LazyLock;

use regex::Regex;

/// Regex to collapse whitespace runs (including newlines) into one space.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Dotted abbreviations, lowercased, as collected by the walk-back
/// (final period excluded): "e.g." scans as "e.g".
const DOTTED_ABBREVIATIONS: &[&str] = &["e.g", "i.e", "u.s", "u.k", "e.u", "a.m", "p.m"];

/// Plain abbreviations and honorifics that end in a period mid-sentence.
const PLAIN_ABBREVIATIONS: &[&str] = &[
    "vs", "etc", "cf", "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "sr", "jr", "st", "fig",
    "vol", "dept", "approx",
];

/// Characters that may trail a sentence terminator before the whitespace.
const CLOSERS: &[char] = &['"', '\u{201d}', '\u{2019}', '\'', ')', ']'];

/// Collapse whitespace runs to single spaces and trim.
pub(crate) fn normalize_ws(text: &str) -> String {
    WHITESPACE_COLLAPSE_REGEX
        .replace_all(text, " ")
        .trim()
        .to_string()
}

/// Character count of a string (budgets are per-character, not per-byte).
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` at the last word boundary before `max_chars`, never mid-word.
///
/// Falls back to a hard character cut when no boundary exists in range.
/// Used for slide titles.
pub fn truncate_at_word(text: &str, max_chars: usize) -> String {
    let max_chars = max_chars.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }
    let window = &chars[..max_chars];
    match window.iter().rposition(|c| c.is_whitespace()) {
        Some(cut) if cut > 0 => window[..cut].iter().collect::<String>().trim_end().to_string(),
        _ => window.iter().collect(),
    }
}

/// Condense `text` into at most `max_chars` characters.
///
/// Prefers the last sentence boundary inside the window; falls back to a
/// word boundary (with a trailing ellipsis), then to a hard cut. The result
/// is non-empty for non-empty input.
pub fn condense(text: &str, max_chars: usize) -> String {
    let max_chars = max_chars.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }

    if let Some(&cut) = sentence_cut_points(&chars)
        .iter()
        .rev()
        .find(|&&cut| cut <= max_chars)
    {
        return chars[..cut].iter().collect::<String>().trim_end().to_string();
    }

    let window = &chars[..max_chars];
    if let Some(cut) = window.iter().rposition(|c| c.is_whitespace())
        && cut > 0
    {
        let mut out: String = window[..cut].iter().collect::<String>().trim_end().to_string();
        out.push('\u{2026}');
        return out;
    }

    let mut out: String = chars[..max_chars - 1].iter().collect();
    out.push('\u{2026}');
    out
}

/// Split `text` into sentences at terminal punctuation, abbreviation-aware.
///
/// `e.g.`, honorifics, initials and decimal numbers do not trigger a split.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    for cut in sentence_cut_points(&chars) {
        let sentence: String = chars[start..cut].iter().collect::<String>().trim().to_string();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = cut;
    }
    let tail: String = chars[start..].iter().collect::<String>().trim().to_string();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Exclusive char indices at which a sentence ends (terminator plus any
/// trailing closers included).
fn sentence_cut_points(chars: &[char]) -> Vec<usize> {
    let mut cuts = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if c != '.' && c != '!' && c != '?' {
            continue;
        }

        // Absorb closing quotes/brackets after the terminator.
        let mut end = i + 1;
        while end < chars.len() && CLOSERS.contains(&chars[end]) {
            end += 1;
        }
        // A terminator only ends a sentence before whitespace or end of text.
        // This also rules out decimal numbers ("3.14") and URLs.
        if end < chars.len() && !chars[end].is_whitespace() {
            continue;
        }
        if c == '.' && is_abbreviation_period(chars, i) {
            continue;
        }
        cuts.push(end);
    }
    cuts
}

/// Whether the period at `idx` terminates an abbreviation or initial rather
/// than a sentence.
fn is_abbreviation_period(chars: &[char], idx: usize) -> bool {
    let mut start = idx;
    while start > 0 {
        let prev = chars[start - 1];
        if prev.is_alphanumeric() || prev == '.' {
            start -= 1;
        } else {
            break;
        }
    }
    if start == idx {
        // Period with no word attached ("..", ellipsis runs).
        return false;
    }
    let word: String = chars[start..idx].iter().collect::<String>().to_lowercase();
    let word = word.trim_matches('.');
    if word.len() == 1 && word.chars().all(|c| c.is_alphabetic()) {
        // Single-letter initial: "John F. Kennedy", inner periods of "U.S.".
        return true;
    }
    DOTTED_ABBREVIATIONS.contains(&word) || PLAIN_ABBREVIATIONS.contains(&word)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/text.rs"]
mod tests;
