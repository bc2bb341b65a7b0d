use regex::Regex;
use std::sync::LazyLock;

/// A compiled lexical rule pattern.
pub struct RiskPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

/// Case-insensitive alternation of whole words. `None` only if the
/// pattern fails to compile, which `failed_patterns` reports.
fn whole_words(words: &[&str]) -> Option<Regex> {
    let alternation = words
        .iter()
        .map(|w| {
            w.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).ok()
}

macro_rules! word_pattern {
    ($name:ident, $words:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| whole_words($words));
    };
}

pub const MEDICAL_KEYWORDS: &[&str] = &[
    "symptom",
    "diagnosis",
    "treatment",
    "medicine",
    "dose",
    "therapy",
    "disease",
];

pub const LEGAL_KEYWORDS: &[&str] = &["law", "legal", "court", "contract", "sue", "liability"];

pub const FINANCIAL_KEYWORDS: &[&str] = &[
    "invest",
    "investment",
    "tax",
    "loan",
    "profit",
    "stock",
    "trading",
];

pub const POLICY_KEYWORDS: &[&str] = &["hack", "bypass", "exploit", "illegal", "piracy"];

/// Decision-seeking phrasing. Multi-word entries tolerate any run of whitespace.
pub const ADVICE_PHRASES: &[&str] = &["should i", "is it safe", "what happens if"];

word_pattern!(RE_MEDICAL, MEDICAL_KEYWORDS);
word_pattern!(RE_LEGAL, LEGAL_KEYWORDS);
word_pattern!(RE_FINANCIAL, FINANCIAL_KEYWORDS);
word_pattern!(RE_POLICY, POLICY_KEYWORDS);
word_pattern!(RE_ADVICE, ADVICE_PHRASES);

pub fn all_patterns() -> Vec<RiskPattern> {
    vec![
        RiskPattern {
            name: "policy_violation",
            regex: &RE_POLICY,
        },
        RiskPattern {
            name: "advice_seeking",
            regex: &RE_ADVICE,
        },
        RiskPattern {
            name: "medical",
            regex: &RE_MEDICAL,
        },
        RiskPattern {
            name: "legal",
            regex: &RE_LEGAL,
        },
        RiskPattern {
            name: "financial",
            regex: &RE_FINANCIAL,
        },
    ]
}

/// Names of patterns that failed to compile.
pub fn failed_patterns() -> Vec<&'static str> {
    all_patterns()
        .into_iter()
        .filter(|p| p.regex.is_none())
        .map(|p| p.name)
        .collect()
}

/// Whether `pattern` matches anywhere in `text`.
pub fn matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}
