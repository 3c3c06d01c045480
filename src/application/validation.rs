// Heuristic gate in front of the pipeline. Permissive on purpose: it only
// filters out fragments and keyboard noise, it is not a grammar check.
use once_cell::sync::Lazy;
use regex::Regex;

const MIN_WORDS: usize = 3;
const SHORT_WORD_MAX_CHARS: usize = 2;
const MAX_SHORT_WORD_RATIO: f64 = 0.7;

// ASCII letters plus the Arabic letters from alef-with-hamza to yeh.
static LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z\x{0623}-\x{064A}]").expect("letter pattern is valid"));

// Unicode whitespace plus the ASCII information separators FS, GS, RS, US.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn words(text: &str) -> Vec<&str> {
    text.split(is_separator).filter(|w| !w.is_empty()).collect()
}

/// Whether `text` plausibly is a natural-language sentence.
pub fn is_valid(text: &str) -> bool {
    let words = words(text);
    if words.len() < MIN_WORDS {
        return false;
    }

    if !LETTER.is_match(text) {
        return false;
    }

    let short_words = words
        .iter()
        .filter(|w| w.chars().count() <= SHORT_WORD_MAX_CHARS)
        .count();

    (short_words as f64) <= (words.len() as f64) * MAX_SHORT_WORD_RATIO
}
