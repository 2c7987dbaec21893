//! Free-text department phrases -> canonical department codes.

const DEPARTMENT_SYNONYMS: [(&str, &[&str]); 5] = [
    (
        "CSE",
        &[
            "cse",
            "computer science",
            "computer science & engineering",
            "computer science and engineering",
        ],
    ),
    (
        "AIML",
        &[
            "aiml",
            "ai",
            "ai & ml",
            "artificial intelligence",
            "artificial intelligence & machine learning",
        ],
    ),
    (
        "ECE",
        &[
            "ece",
            "electronics",
            "electronics and communication",
            "electronics & communication engineering",
        ],
    ),
    (
        "BCA",
        &["bca", "computer applications", "bachelor of computer applications"],
    ),
    ("ME", &["me", "mechanical", "mechanical engineering"]),
];

/// Maps a phrase like "computer science" to `"CSE"`. Unknown phrases come back
/// uppercased so they simply match no students or courses.
pub fn map_department_name(raw: &str) -> String {
    let phrase = raw.trim().to_lowercase();
    DEPARTMENT_SYNONYMS
        .iter()
        .find(|(_, synonyms)| synonyms.contains(&phrase.as_str()))
        .map(|(code, _)| (*code).to_string())
        .unwrap_or_else(|| phrase.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_map_to_codes() {
        assert_eq!(map_department_name("Computer Science"), "CSE");
        assert_eq!(map_department_name("  ai & ml "), "AIML");
        assert_eq!(map_department_name("electronics & communication engineering"), "ECE");
        assert_eq!(map_department_name("bachelor of computer applications"), "BCA");
        assert_eq!(map_department_name("mechanical"), "ME");
    }

    #[test]
    fn unknown_phrases_are_uppercased_verbatim() {
        assert_eq!(map_department_name("civil"), "CIVIL");
        assert_eq!(map_department_name(" Bio Tech "), "BIO TECH");
    }
}
