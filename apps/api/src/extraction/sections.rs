#![allow(dead_code)]

//! Resume section extraction.
//!
//! One linear scan over normalized lines, tracking which tracked header was
//! seen most recently. Header and stop lines drive the state and are
//! consumed; every other line lands verbatim in the bucket of the active
//! section, or in the unclassified spill when no section is active. The
//! scan is pure: no I/O, no shared state, identical output for identical
//! input.

use serde::{Deserialize, Serialize};

use crate::extraction::patterns::{HeaderRule, PatternTable, Section};

/// The three content buckets, serialized with exactly the keys `skills`,
/// `projects` and `education`. Lines keep their source order; an empty
/// bucket is an empty array, never absent and never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSections {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

impl ResumeSections {
    /// Borrows one bucket by label.
    pub fn bucket(&self, section: Section) -> &[String] {
        match section {
            Section::Skills => &self.skills,
            Section::Projects => &self.projects,
            Section::Education => &self.education,
        }
    }

    fn bucket_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Skills => &mut self.skills,
            Section::Projects => &mut self.projects,
            Section::Education => &mut self.education,
        }
    }

    /// Total classified lines across all buckets.
    pub fn line_count(&self) -> usize {
        self.skills.len() + self.projects.len() + self.education.len()
    }
}

/// Everything one scan produced: the three buckets plus the lines seen
/// before any tracked header or after a stop header. Callers decide what to
/// do with the spill; the ingest layer logs its size and moves on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionScan {
    pub sections: ResumeSections,
    pub unclassified: Vec<String>,
}

/// Line-oriented resume section classifier.
///
/// Holds only its pattern table, so it is cheap to clone and safe to share
/// across concurrent requests. `SectionExtractor::default()` carries the
/// built-in header vocabulary.
#[derive(Debug, Clone, Default)]
pub struct SectionExtractor {
    table: PatternTable,
}

impl SectionExtractor {
    /// An extractor over a custom vocabulary.
    pub fn new(table: PatternTable) -> Self {
        Self { table }
    }

    /// Scans `text` and returns the buckets plus the unclassified spill.
    pub fn scan(&self, text: &str) -> SectionScan {
        let mut scan = SectionScan::default();
        let mut active: Option<Section> = None;

        for line in normalized_lines(text) {
            match self.table.lookup(line) {
                Some(HeaderRule::Start(section)) => active = Some(section),
                Some(HeaderRule::Stop) => active = None,
                None => match active {
                    Some(section) => scan.sections.bucket_mut(section).push(line.to_string()),
                    None => scan.unclassified.push(line.to_string()),
                },
            }
        }

        scan
    }
}

/// Classifies `text` with the built-in header vocabulary and returns the
/// three buckets. The convenience form of `SectionExtractor::scan`.
pub fn extract_sections(text: &str) -> ResumeSections {
    SectionExtractor::default().scan(text).sections
}

/// Trimmed, non-empty lines of `text`, in source order. Splits on both `\n`
/// and `\r` so CRLF and bare-CR documents normalize identically; the empty
/// fragment a CRLF pair produces is dropped with the other blank lines.
pub fn normalized_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::patterns::PatternTable;

    #[test]
    fn test_basic_segmentation() {
        let text = "Skills\nPython\nSQL\nProjects\nPortfolio site\nEducation\nB.Tech CS";
        let sections = extract_sections(text);
        assert_eq!(sections.skills, vec!["Python", "SQL"]);
        assert_eq!(sections.projects, vec!["Portfolio site"]);
        assert_eq!(sections.education, vec!["B.Tech CS"]);
    }

    #[test]
    fn test_stop_header_discards_following_content() {
        let text = "Skills\nPython\nExperience\nSenior Dev at Foo\nEducation\nMBA";
        let scan = SectionExtractor::default().scan(text);
        assert_eq!(scan.sections.skills, vec!["Python"]);
        assert!(scan.sections.projects.is_empty());
        assert_eq!(scan.sections.education, vec!["MBA"]);
        for section in Section::ALL {
            assert!(
                !scan.sections.bucket(section).iter().any(|l| l == "Senior Dev at Foo"),
                "content after a stop header must not reach any bucket"
            );
        }
        assert_eq!(scan.unclassified, vec!["Senior Dev at Foo"]);
    }

    #[test]
    fn test_empty_input_yields_empty_buckets() {
        let scan = SectionExtractor::default().scan("");
        assert!(scan.sections.skills.is_empty());
        assert!(scan.sections.projects.is_empty());
        assert!(scan.sections.education.is_empty());
        assert!(scan.unclassified.is_empty());
    }

    #[test]
    fn test_whitespace_only_input_yields_empty_buckets() {
        let scan = SectionExtractor::default().scan("   \n\t\n  \r\n");
        assert_eq!(scan.sections.line_count(), 0);
        assert!(scan.unclassified.is_empty());
    }

    #[test]
    fn test_header_recognized_despite_case_and_padding() {
        let text = "  SKILLS  \nRust";
        let sections = extract_sections(text);
        assert_eq!(sections.skills, vec!["Rust"]);
    }

    #[test]
    fn test_no_headers_means_everything_unclassified() {
        let text = "John Doe\njohn@example.com\nSome free text";
        let scan = SectionExtractor::default().scan(text);
        assert_eq!(scan.sections.line_count(), 0);
        assert_eq!(
            scan.unclassified,
            vec!["John Doe", "john@example.com", "Some free text"]
        );
    }

    #[test]
    fn test_preamble_before_first_header_is_unclassified() {
        let text = "Jane Doe\nBackend Engineer\nSkills\nGo";
        let scan = SectionExtractor::default().scan(text);
        assert_eq!(scan.sections.skills, vec!["Go"]);
        assert_eq!(scan.unclassified, vec!["Jane Doe", "Backend Engineer"]);
    }

    #[test]
    fn test_section_reopens_and_keeps_appending() {
        let text = "Skills\nPython\nProfile\nabout me\nSkills\nSQL";
        let sections = extract_sections(text);
        assert_eq!(sections.skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_new_header_switches_section_without_stop() {
        let text = "Skills\nPython\nEducation\nB.Sc\nProjects\nCompiler";
        let sections = extract_sections(text);
        assert_eq!(sections.skills, vec!["Python"]);
        assert_eq!(sections.education, vec!["B.Sc"]);
        assert_eq!(sections.projects, vec!["Compiler"]);
    }

    #[test]
    fn test_content_line_with_keyword_stays_content() {
        let text = "Skills\n5 years of Experience\nPython";
        let sections = extract_sections(text);
        assert_eq!(sections.skills, vec!["5 years of Experience", "Python"]);
    }

    #[test]
    fn test_content_keeps_inner_whitespace_verbatim() {
        let text = "Skills\n  C++  (advanced)  ";
        let sections = extract_sections(text);
        assert_eq!(sections.skills, vec!["C++  (advanced)"]);
    }

    #[test]
    fn test_blank_lines_inside_sections_are_dropped() {
        let text = "Skills\n\n   \nPython\n\nSQL";
        let sections = extract_sections(text);
        assert_eq!(sections.skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_crlf_and_bare_cr_line_endings() {
        let crlf = "Skills\r\nPython\r\nSQL";
        let bare_cr = "Skills\rPython\rSQL";
        let lf = "Skills\nPython\nSQL";
        assert_eq!(extract_sections(crlf), extract_sections(lf));
        assert_eq!(extract_sections(bare_cr), extract_sections(lf));
    }

    #[test]
    fn test_header_lines_never_land_in_buckets() {
        let text = "Skills\nTechnical Skills\nPython\nProjects\nEducation\nAcademic Background\nMBA";
        let scan = SectionExtractor::default().scan(text);
        let header_phrases = ["skills", "technical skills", "projects", "education", "academic background"];
        for section in Section::ALL {
            for line in scan.sections.bucket(section) {
                assert!(
                    !header_phrases.contains(&line.to_lowercase().as_str()),
                    "header line {line:?} leaked into a bucket"
                );
            }
        }
    }

    #[test]
    fn test_every_input_line_is_consumed_or_placed() {
        let text = "Intro line\nSkills\nPython\nSQL\nExperience\nSenior Dev\nEducation\nMBA\n";
        let input_lines = normalized_lines(text).count();
        let scan = SectionExtractor::default().scan(text);
        let headers_consumed = 3; // Skills, Experience, Education
        assert_eq!(
            scan.sections.line_count() + scan.unclassified.len() + headers_consumed,
            input_lines
        );
    }

    #[test]
    fn test_scan_is_deterministic() {
        let text = "Skills\nPython\nProjects\nThing one\nEducation\nB.Tech";
        let extractor = SectionExtractor::default();
        assert_eq!(extractor.scan(text), extractor.scan(text));
    }

    #[test]
    fn test_serialized_sections_have_exactly_three_keys() {
        let value = serde_json::to_value(ResumeSections::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        for key in ["skills", "projects", "education"] {
            assert!(
                object.get(key).map(|v| v.is_array()).unwrap_or(false),
                "{key} must always serialize as an array"
            );
        }
    }

    #[test]
    fn test_sections_deserialize_with_missing_keys() {
        let sections: ResumeSections = serde_json::from_str(r#"{"skills": ["Rust"]}"#).unwrap();
        assert_eq!(sections.skills, vec!["Rust"]);
        assert!(sections.projects.is_empty());
        assert!(sections.education.is_empty());
    }

    #[test]
    fn test_custom_vocabulary_end_to_end() {
        let mut table = PatternTable::empty();
        table.insert_start("competencies", Section::Skills);
        table.insert_stop("referees");
        let extractor = SectionExtractor::new(table);

        let text = "Competencies\nRust\nReferees\nDr. Smith";
        let scan = extractor.scan(text);
        assert_eq!(scan.sections.skills, vec!["Rust"]);
        assert_eq!(scan.unclassified, vec!["Dr. Smith"]);
    }

    #[test]
    fn test_normalized_lines_order_and_trim() {
        let lines: Vec<&str> = normalized_lines("  a \n\n b\r\nc ").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalized_lines_empty_input() {
        assert_eq!(normalized_lines("").count(), 0);
        assert_eq!(normalized_lines("\n\r\n  \n").count(), 0);
    }
}
