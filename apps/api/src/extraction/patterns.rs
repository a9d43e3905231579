#![allow(dead_code)]

//! Header vocabulary for resume section detection.
//!
//! The section boundary rules live here as data: one lookup table keyed by
//! the normalized form of a line, mapping to either "start collecting a
//! section" or "stop collecting". Adding a synonym or routing a new header
//! to an existing bucket is an insertion on `PatternTable`, not a code
//! change in the scanner.

use std::collections::HashMap;

/// A resume section this service collects. Closed set; "no active section"
/// is `Option<Section>` in the scanner, never a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Skills,
    Projects,
    Education,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Skills, Section::Projects, Section::Education];

    /// The output key this section serializes under.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
        }
    }
}

/// What a recognized header line does to the scan state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRule {
    /// Opens the given section.
    Start(Section),
    /// Closes whatever section is active without opening another.
    Stop,
}

/// Built-in start phrases, per section.
const SKILLS_HEADERS: &[&str] = &["skills", "technical skills"];
const PROJECTS_HEADERS: &[&str] = &["projects", "academic projects", "major projects"];
const EDUCATION_HEADERS: &[&str] = &["education", "academic background"];

/// Built-in stop phrases. These headers open sections this service does not
/// collect; lines after them are ignored until a tracked header appears.
const STOP_HEADERS: &[&str] = &[
    "experience",
    "certifications",
    "internships",
    "profile",
    "achievements",
];

/// Whole-line header rules, keyed by normalized phrase.
///
/// A line matches a rule only when its entire normalized form equals a
/// registered phrase. A line that merely contains a keyword ("5 years of
/// Experience") is content, not a header. Misfiled content is visible and
/// fixable by the user; a phantom section boundary is not.
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: HashMap<String, HeaderRule>,
}

impl PatternTable {
    /// An empty table, for fully custom vocabularies. Most callers want
    /// `PatternTable::default()`.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registers a phrase that opens `section`. Overwrites any earlier rule
    /// for the same phrase, so a start rule added after a stop rule wins.
    pub fn insert_start(&mut self, phrase: &str, section: Section) {
        self.rules
            .insert(normalize_phrase(phrase), HeaderRule::Start(section));
    }

    /// Registers a phrase that closes the active section.
    pub fn insert_stop(&mut self, phrase: &str) {
        self.rules.insert(normalize_phrase(phrase), HeaderRule::Stop);
    }

    /// The rule for `line`, if its whole normalized form is a registered
    /// phrase.
    pub fn lookup(&self, line: &str) -> Option<HeaderRule> {
        self.rules.get(&normalize_phrase(line)).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for PatternTable {
    /// The built-in header vocabulary.
    fn default() -> Self {
        let mut table = Self::empty();
        for &phrase in SKILLS_HEADERS {
            table.insert_start(phrase, Section::Skills);
        }
        for &phrase in PROJECTS_HEADERS {
            table.insert_start(phrase, Section::Projects);
        }
        for &phrase in EDUCATION_HEADERS {
            table.insert_start(phrase, Section::Education);
        }
        for &phrase in STOP_HEADERS {
            table.insert_stop(phrase);
        }
        table
    }
}

/// Normalized form used for rule matching: trimmed, lowercased, inner runs
/// of whitespace collapsed to single spaces. "  Technical   SKILLS " and
/// "technical skills" share one key.
fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_recognizes_all_start_phrases() {
        let table = PatternTable::default();
        for &phrase in SKILLS_HEADERS {
            assert_eq!(
                table.lookup(phrase),
                Some(HeaderRule::Start(Section::Skills)),
                "{phrase} must open skills"
            );
        }
        for &phrase in PROJECTS_HEADERS {
            assert_eq!(
                table.lookup(phrase),
                Some(HeaderRule::Start(Section::Projects)),
                "{phrase} must open projects"
            );
        }
        for &phrase in EDUCATION_HEADERS {
            assert_eq!(
                table.lookup(phrase),
                Some(HeaderRule::Start(Section::Education)),
                "{phrase} must open education"
            );
        }
    }

    #[test]
    fn test_default_table_recognizes_all_stop_phrases() {
        let table = PatternTable::default();
        for &phrase in STOP_HEADERS {
            assert_eq!(
                table.lookup(phrase),
                Some(HeaderRule::Stop),
                "{phrase} must stop collection"
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = PatternTable::default();
        assert_eq!(
            table.lookup("SKILLS"),
            Some(HeaderRule::Start(Section::Skills))
        );
        assert_eq!(
            table.lookup("sKiLlS"),
            Some(HeaderRule::Start(Section::Skills))
        );
        assert_eq!(table.lookup("EXPERIENCE"), Some(HeaderRule::Stop));
    }

    #[test]
    fn test_lookup_ignores_surrounding_whitespace() {
        let table = PatternTable::default();
        assert_eq!(
            table.lookup("  skills  "),
            Some(HeaderRule::Start(Section::Skills))
        );
        assert_eq!(
            table.lookup("\teducation\t"),
            Some(HeaderRule::Start(Section::Education))
        );
    }

    #[test]
    fn test_lookup_collapses_inner_whitespace() {
        let table = PatternTable::default();
        assert_eq!(
            table.lookup("technical    skills"),
            Some(HeaderRule::Start(Section::Skills))
        );
        assert_eq!(
            table.lookup("academic \t background"),
            Some(HeaderRule::Start(Section::Education))
        );
    }

    #[test]
    fn test_line_containing_keyword_is_not_a_header() {
        let table = PatternTable::default();
        assert_eq!(table.lookup("5 years of Experience"), None);
        assert_eq!(table.lookup("my projects overview"), None);
        assert_eq!(table.lookup("skills:"), None, "punctuation breaks the whole-line match");
    }

    #[test]
    fn test_keyword_prefix_is_not_a_header() {
        let table = PatternTable::default();
        assert_eq!(table.lookup("skillset"), None);
        assert_eq!(table.lookup("educational"), None);
    }

    #[test]
    fn test_insert_start_adds_custom_synonym() {
        let mut table = PatternTable::default();
        table.insert_start("core competencies", Section::Skills);
        assert_eq!(
            table.lookup("Core   Competencies"),
            Some(HeaderRule::Start(Section::Skills))
        );
    }

    #[test]
    fn test_insert_start_overrides_builtin_stop() {
        let mut table = PatternTable::default();
        assert_eq!(table.lookup("experience"), Some(HeaderRule::Stop));
        table.insert_start("experience", Section::Projects);
        assert_eq!(
            table.lookup("experience"),
            Some(HeaderRule::Start(Section::Projects))
        );
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let table = PatternTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("skills"), None);
        assert_eq!(table.lookup("experience"), None);
    }

    #[test]
    fn test_default_table_has_all_builtin_phrases() {
        let table = PatternTable::default();
        let expected = SKILLS_HEADERS.len()
            + PROJECTS_HEADERS.len()
            + EDUCATION_HEADERS.len()
            + STOP_HEADERS.len();
        assert_eq!(table.len(), expected);
    }

    #[test]
    fn test_section_output_keys() {
        assert_eq!(Section::Skills.as_str(), "skills");
        assert_eq!(Section::Projects.as_str(), "projects");
        assert_eq!(Section::Education.as_str(), "education");
    }
}
