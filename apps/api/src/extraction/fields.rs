//! Field extraction by deterministic pattern and keyword matching over plain text.
//!
//! Every extractor here is total. Email, phone and name walk an ordered list
//! of precompiled patterns and commit to the first acceptable match; skills
//! and tools scan a static vocabulary. Absence becomes a sentinel value in
//! `extract_fields`, never an error.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::name::extract_name;
use crate::extraction::vocabulary::{SKILL_KEYWORDS, TOOL_KEYWORDS};
use crate::models::resume::{ResumeFields, NOT_FOUND, NOT_SPECIFIED};

/// A phone candidate needs at least this many digits to be accepted.
const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        r"(?i)\be-?mail\s*:\s*([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})",
    ])
});

/// Priority order: Indian formats first, then US, international, bare
/// digit runs, and finally labeled free-form numbers.
static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // +91 98765 43210, +91-9876543210, 0091 9876543210
        r"(?:\+91|\b0091)[-.\s]?[6-9]\d{4}[-.\s]?\d{5}\b",
        // 9876543210, 98765-43210, 987-654-3210
        r"\b[6-9](?:\d{9}|\d{4}-\d{5}|\d{2}-\d{3}-\d{4})\b",
        // (+91) 98765 43210
        r"\(\+?91\)[-.\s]?[6-9]\d{4}[-.\s]?\d{5}\b",
        // 555-123-4567
        r"\b\d{3}-\d{3}-\d{4}\b",
        // (555) 123-4567
        r"\(\d{3}\)[-.\s]?\d{3}[-.\s]?\d{4}\b",
        // +44 207 946 0958
        r"\+\d{1,3}[-.\s]?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b",
        r"\b\d{10}\b",
        r"(?i)\b(?:phone|mobile|tel|contact)(?:\s*(?:no\.?|number|#))?\s*:\s*([+(]?\d[\d\s().+-]{8,}\d)",
    ])
});

static EXPERIENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)[+\s]*(?:years?|yrs?)\s+(?:of\s+)?experience")
        .expect("static regex is valid")
});

static SKILL_MATCHERS: LazyLock<Vec<KeywordMatcher>> =
    LazyLock::new(|| SKILL_KEYWORDS.iter().map(|&kw| KeywordMatcher::new(kw)).collect());

static TOOL_MATCHERS: LazyLock<Vec<KeywordMatcher>> =
    LazyLock::new(|| TOOL_KEYWORDS.iter().map(|&kw| KeywordMatcher::new(kw)).collect());

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static regex is valid"))
        .collect()
}

/// Runs the full extractor battery over `text`.
pub fn extract_fields(text: &str, filename: &str) -> ResumeFields {
    let email = extract_email(text);
    let domain = email
        .as_deref()
        .and_then(|e| e.split_once('@'))
        .map(|(_, domain)| domain.to_string());

    ResumeFields {
        name: extract_name(text).unwrap_or_else(|| NOT_FOUND.to_string()),
        email: email.unwrap_or_else(|| NOT_FOUND.to_string()),
        phone: extract_phone(text).unwrap_or_else(|| NOT_FOUND.to_string()),
        domain: domain.unwrap_or_else(|| NOT_FOUND.to_string()),
        skills: extract_skills(text),
        tools: extract_tools(text),
        experience: extract_experience(text).unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        filename: filename.to_string(),
    }
}

/// First pattern that matches anywhere wins; its capture group if it has
/// one, otherwise the whole match.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(text)?;
        caps.get(1)
            .or_else(|| caps.get(0))
            .map(|m| m.as_str().to_string())
    })
}

/// Tries each phone pattern in priority order; a pattern's first match is
/// accepted only if it still carries at least ten digits after cleanup.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let raw = caps.get(1).or_else(|| caps.get(0))?.as_str();
        let cleaned = clean_phone(raw);
        let digits = cleaned.chars().filter(char::is_ascii_digit).count();
        (digits >= MIN_PHONE_DIGITS).then_some(cleaned)
    })
}

fn clean_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || "+-().".contains(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Title-cased, deduplicated, sorted skill names, or `["Not specified"]`.
pub fn extract_skills(text: &str) -> Vec<String> {
    match_vocabulary(text, &SKILL_MATCHERS)
}

/// Same rules as skills over the tool vocabulary.
pub fn extract_tools(text: &str) -> Vec<String> {
    match_vocabulary(text, &TOOL_MATCHERS)
}

/// `"<N> years"` from phrases like "5+ years of experience".
pub fn extract_experience(text: &str) -> Option<String> {
    EXPERIENCE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|years| format!("{} years", years.as_str()))
}

fn match_vocabulary(text: &str, matchers: &[KeywordMatcher]) -> Vec<String> {
    let lowered = text.to_lowercase();
    let found: BTreeSet<String> = matchers
        .iter()
        .filter(|m| m.matches(text, &lowered))
        .map(|m| title_case(m.keyword))
        .collect();

    if found.is_empty() {
        vec![NOT_SPECIFIED.to_string()]
    } else {
        found.into_iter().collect()
    }
}

/// One vocabulary entry with its precompiled matching rule.
struct KeywordMatcher {
    keyword: &'static str,
    rule: MatchRule,
}

enum MatchRule {
    /// Case-insensitive search delimited by word boundaries.
    Word(Regex),
    /// Case-insensitive substring containment. Can hit inside longer phrases.
    Phrase,
}

impl KeywordMatcher {
    fn new(keyword: &'static str) -> Self {
        let rule = if keyword.contains(' ') {
            MatchRule::Phrase
        } else {
            MatchRule::Word(word_regex(keyword))
        };
        KeywordMatcher { keyword, rule }
    }

    fn matches(&self, text: &str, lowered: &str) -> bool {
        match &self.rule {
            MatchRule::Word(re) => re.is_match(text),
            MatchRule::Phrase => lowered.contains(self.keyword),
        }
    }
}

/// `\b` only makes sense next to word characters, so keywords such as
/// `c++` or `c#` get a boundary on the leading side only.
fn word_regex(keyword: &str) -> Regex {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let lead = if is_word(keyword.chars().next()) { r"\b" } else { "" };
    let trail = if is_word(keyword.chars().last()) { r"\b" } else { "" };
    Regex::new(&format!("(?i){lead}{}{trail}", regex::escape(keyword)))
        .expect("escaped keyword is a valid regex")
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_plain_match_is_exact() {
        let text = "Jane Doe\nReach me at jane.doe@example.com, any time.";
        assert_eq!(extract_email(text).as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_email_missing_is_none() {
        assert_eq!(extract_email("no address here @ all"), None);
    }

    #[test]
    fn test_email_labeled_variant_captures_address() {
        let re = &EMAIL_PATTERNS[1];
        let caps = re.captures("E-mail: sam.lee@corp.io").unwrap();
        assert_eq!(&caps[1], "sam.lee@corp.io");
    }

    #[test]
    fn test_phone_indian_country_code_wins() {
        let text = "Office 555-123-4567\nMobile +91-9876543210";
        let phone = extract_phone(text).unwrap();
        assert_eq!(phone, "+91-9876543210");
        assert!(phone.chars().filter(char::is_ascii_digit).count() >= 10);
    }

    #[test]
    fn test_phone_bare_indian_mobile() {
        assert_eq!(
            extract_phone("Call 98765-43210 after 6pm").as_deref(),
            Some("98765-43210")
        );
    }

    #[test]
    fn test_phone_us_formats() {
        assert_eq!(
            extract_phone("Phone 555-123-4567").as_deref(),
            Some("555-123-4567")
        );
        assert_eq!(
            extract_phone("Cell (555) 123-4567").as_deref(),
            Some("(555) 123-4567")
        );
    }

    #[test]
    fn test_phone_international() {
        assert_eq!(
            extract_phone("London +44 207 946 0958").as_deref(),
            Some("+44 207 946 0958")
        );
    }

    #[test]
    fn test_phone_us_pattern_outranks_international() {
        // The hyphenated tail satisfies the higher-priority US pattern first.
        assert_eq!(
            extract_phone("London +44-207-946-0958").as_deref(),
            Some("207-946-0958")
        );
    }

    #[test]
    fn test_phone_labeled_free_form() {
        assert_eq!(
            extract_phone("Tel: 0 20 7946 0958 1").as_deref(),
            Some("0 20 7946 0958 1")
        );
    }

    #[test]
    fn test_phone_short_numbers_rejected() {
        assert_eq!(extract_phone("Room 555-1234, zip 94103"), None);
    }

    #[test]
    fn test_skills_case_variants_collapse_to_one() {
        let text = "Python developer. Wrote python scripts daily.";
        assert_eq!(extract_skills(text), vec!["Python".to_string()]);
    }

    #[test]
    fn test_skills_sorted_and_title_cased() {
        let text = "Stack: Rust, Docker, Kubernetes, machine learning and C++";
        assert_eq!(
            extract_skills(text),
            vec!["C++", "Docker", "Kubernetes", "Machine Learning", "Rust"]
        );
    }

    #[test]
    fn test_skills_word_boundary_excludes_substrings() {
        // "javascript" must not also yield "java"; "rusty" is not "rust".
        let skills = extract_skills("Fluent in JavaScript, rusty at knitting");
        assert_eq!(skills, vec!["Javascript".to_string()]);
    }

    #[test]
    fn test_skills_hardware_domain() {
        let skills = extract_skills("RTL design in Verilog and SystemVerilog on Xilinx FPGA");
        assert_eq!(
            skills,
            vec!["Fpga", "Rtl Design", "Systemverilog", "Verilog", "Xilinx"]
        );
    }

    #[test]
    fn test_skills_none_found_is_sentinel() {
        assert_eq!(
            extract_skills("Gardening, cooking and long walks."),
            vec![NOT_SPECIFIED.to_string()]
        );
    }

    #[test]
    fn test_tools_detected() {
        assert_eq!(
            extract_tools("Tracked work in JIRA, designed in Figma"),
            vec!["Figma", "Jira"]
        );
        assert_eq!(extract_tools("nothing"), vec![NOT_SPECIFIED.to_string()]);
    }

    #[test]
    fn test_experience_phrase() {
        assert_eq!(
            extract_experience("Engineer with 7+ years of experience in backend").as_deref(),
            Some("7 years")
        );
        assert_eq!(
            extract_experience("3 yrs experience").as_deref(),
            Some("3 years")
        );
        assert_eq!(extract_experience("fresh graduate"), None);
    }

    #[test]
    fn test_title_case_matches_keyword_shapes() {
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("c#"), "C#");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
    }

    #[test]
    fn test_extract_fields_uses_sentinels() {
        let fields = extract_fields("lorem ipsum", "blank.txt");
        assert_eq!(fields.name, NOT_FOUND);
        assert_eq!(fields.email, NOT_FOUND);
        assert_eq!(fields.phone, NOT_FOUND);
        assert_eq!(fields.domain, NOT_FOUND);
        assert_eq!(fields.skills, vec![NOT_SPECIFIED.to_string()]);
        assert_eq!(fields.tools, vec![NOT_SPECIFIED.to_string()]);
        assert_eq!(fields.experience, NOT_SPECIFIED);
        assert_eq!(fields.filename, "blank.txt");
    }

    #[test]
    fn test_extract_fields_domain_follows_email() {
        let fields = extract_fields("John Smith\njohn@acme.dev", "john.txt");
        assert_eq!(fields.email, "john@acme.dev");
        assert_eq!(fields.domain, "acme.dev");
    }
}
