//! Input normalisation and keyword containment.

/// Lower-cased, trimmed form of raw user input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Keywords this short must be a whole word ("yo" is not "you", "sup" is not "support").
const WHOLE_WORD_MAX_CHARS: usize = 3;

/// True when `text` contains `keyword` starting at the beginning of a word.
///
/// Longer keywords match any continuation, so "demo" hits "demos" and
/// "email" hits "emailed", while "hi" never hits inside "this". Keywords of
/// up to three characters must also end the word.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    let whole_word = keyword.chars().count() <= WHOLE_WORD_MAX_CHARS;
    text.match_indices(keyword).any(|(start, _)| {
        let starts_word = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        if !starts_word {
            return false;
        }
        !whole_word
            || text[start + keyword.len()..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric())
    })
}

/// An unordered set of keywords; any single hit is a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet(pub &'static [&'static str]);

impl KeywordSet {
    /// First keyword of the set found in `text`, in declaration order.
    pub fn first_match(&self, text: &str) -> Option<&'static str> {
        self.0.iter().copied().find(|k| contains_keyword(text, k))
    }

    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}

/// Parse a leading numeric menu shortcut (`1`..`5`, optionally `[n]`).
///
/// Only the first token counts, so "1 but also pricing help" is still shortcut 1.
pub fn numeric_shortcut(normalized: &str) -> Option<u8> {
    let token = normalized.split_whitespace().next()?;
    let token = token.trim_end_matches(['.', ',', ':', ')', '!']);
    let digits = token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(token);
    match digits {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        "4" => Some(4),
        "5" => Some(5),
        _ => None,
    }
}
