//! Candidate name heuristics.
//!
//! Three tiers, first success wins:
//! 1. a `Name:` / `Full Name:` label anywhere in the text;
//! 2. the first plausible header line among the first 20 non-empty lines;
//! 3. the first adjacent pair of capitalized words anywhere in the text.
//!
//! Every candidate must pass `is_valid_name` before it is returned.

use std::sync::LazyLock;

use regex::Regex;

/// Header lines containing any of these (case-insensitive substring) are
/// section titles or contact lines, not names.
const STOP_WORDS: &[&str] = &[
    "resume",
    "cv",
    "curriculum",
    "vitae",
    "profile",
    "summary",
    "objective",
    "experience",
    "education",
    "skills",
    "contact",
    "information",
    "personal",
    "details",
    "phone",
    "email",
    "mobile",
    "address",
    "linkedin",
    "github",
];

/// A name part equal to one of these (case-insensitive) fails validation.
const RESERVED_PARTS: &[&str] = &["resume", "email", "phone", "contact", "address", "skills"];

const MAX_HEADER_LINES: usize = 20;
const MIN_LINE_CHARS: usize = 3;
const MAX_LINE_CHARS: usize = 80;
const MIN_PART_CHARS: usize = 2;
const MAX_PART_CHARS: usize = 20;

/// One capitalized name word: `Smith`, `McDonald`, `O'Brien`, `Garcia-Lopez`.
const WORD: &str = r"(?:[A-Z]')?[A-Z][a-z]+(?:[A-Z][a-z]+)?(?:-[A-Z]?[a-z]+)*";

static LABELED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:(?i:full)\s+)?(?i:name)\s*:[ \t]*({WORD}(?:[ \t]+{WORD}){{1,3}})"
    ))
    .expect("static regex is valid")
});

/// Start-anchored header-line patterns, tried in order. The trailing
/// non-letter guard stops a match from ending mid-word.
static HEADER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Two or more capitalized words, optional trailing initial.
        format!(r"^({WORD}(?:\s+{WORD})+(?:\s+[A-Z]\.?)?)(?:$|[^A-Za-z])"),
        // First M. Last
        format!(r"^({WORD}\s+[A-Z]\.\s*{WORD})(?:$|[^A-Za-z])"),
        // Exactly three capitalized words.
        format!(r"^({WORD}\s+{WORD}\s+{WORD})(?:$|[^A-Za-z])"),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static regex is valid"))
    .collect()
});

static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]{1,14}\b").expect("static regex is valid"));

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3,}").expect("static regex is valid"));

static NAME_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z'-]*\.?$").expect("static regex is valid"));

/// Best-effort candidate name, or `None` when no tier produces a valid one.
pub fn extract_name(text: &str) -> Option<String> {
    from_label(text)
        .or_else(|| from_header_lines(text))
        .or_else(|| from_word_pairs(text))
}

/// Validates a candidate: 2–4 parts, each 2–20 characters, capitalized,
/// letters with optional apostrophes/hyphens and a trailing period, and no
/// reserved word.
pub fn is_valid_name(candidate: &str) -> bool {
    let parts: Vec<&str> = candidate.split_whitespace().collect();
    if !(2..=4).contains(&parts.len()) {
        return false;
    }
    parts.iter().all(|part| {
        let len = part.chars().count();
        (MIN_PART_CHARS..=MAX_PART_CHARS).contains(&len)
            && part.chars().next().is_some_and(char::is_uppercase)
            && NAME_PART.is_match(part)
            && !RESERVED_PARTS
                .iter()
                .any(|reserved| part.eq_ignore_ascii_case(reserved))
    })
}

fn from_label(text: &str) -> Option<String> {
    let candidate = LABELED_NAME.captures(text)?.get(1)?.as_str().trim();
    is_valid_name(candidate).then(|| candidate.to_string())
}

fn from_header_lines(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_HEADER_LINES)
        .filter(|line| is_header_candidate(line))
        .find_map(|line| {
            HEADER_PATTERNS.iter().find_map(|re| {
                let candidate = re.captures(line)?.get(1)?.as_str().trim();
                is_valid_name(candidate).then(|| candidate.to_string())
            })
        })
}

fn from_word_pairs(text: &str) -> Option<String> {
    let words: Vec<&str> = CAPITALIZED_WORD
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();
    words.windows(2).find_map(|pair| {
        let candidate = format!("{} {}", pair[0], pair[1]);
        (is_valid_name(&candidate) && !contains_stop_word(&candidate)).then_some(candidate)
    })
}

/// Rejects lines that look like section headings, contact details or prose.
fn is_header_candidate(line: &str) -> bool {
    let len = line.chars().count();
    if !(MIN_LINE_CHARS..=MAX_LINE_CHARS).contains(&len) {
        return false;
    }
    if contains_stop_word(line) || line.contains('@') || DIGIT_RUN.is_match(line) {
        return false;
    }
    if line.matches('.').count() > 2 {
        return false;
    }
    !(len > 8 && is_all_caps(line))
}

fn contains_stop_word(s: &str) -> bool {
    let lowered = s.to_lowercase();
    STOP_WORDS.iter().any(|word| lowered.contains(word))
}

fn is_all_caps(s: &str) -> bool {
    s.chars().any(char::is_alphabetic) && !s.chars().any(char::is_lowercase)
}
