//! Keyword-gap analysis against curated per-job-type keyword lists

use crate::processing::classifier::JobType;
use crate::processing::document::ResumeDocument;
use log::debug;

pub const DEFAULT_MAX_KEYWORDS: usize = 5;

/// Appended after every domain list, including for the `general` job type.
pub const GENERAL_KEYWORDS: &[&str] = &[
    "communication",
    "teamwork",
    "problem-solving",
    "leadership",
    "time management",
    "analytical",
    "detail-oriented",
    "collaboration",
];

/// Domain keywords for a job type. The `general` domain list is the general
/// list itself, so a general resume sees every general keyword twice.
pub fn domain_keywords(job_type: JobType) -> &'static [&'static str] {
    match job_type {
        JobType::Software => &["git", "agile", "api", "testing", "ci/cd", "docker", "aws", "rest", "sql", "linux"],
        JobType::Data => &[
            "sql",
            "python",
            "excel",
            "tableau",
            "power bi",
            "statistics",
            "analytics",
            "visualization",
            "etl",
            "data modeling",
        ],
        JobType::Web => &[
            "html",
            "css",
            "javascript",
            "react",
            "node.js",
            "responsive",
            "api",
            "git",
            "typescript",
            "frontend",
        ],
        JobType::Mobile => &[
            "ios",
            "android",
            "swift",
            "kotlin",
            "react native",
            "flutter",
            "mobile",
            "app",
            "ui/ux",
            "api",
        ],
        JobType::Design => &[
            "figma",
            "adobe",
            "ui/ux",
            "wireframe",
            "prototype",
            "user research",
            "design system",
            "sketch",
            "illustrator",
            "photoshop",
        ],
        JobType::Marketing => &[
            "seo",
            "analytics",
            "social media",
            "content",
            "campaigns",
            "google ads",
            "email marketing",
            "crm",
            "hubspot",
            "metrics",
        ],
        JobType::Management => &[
            "agile",
            "scrum",
            "jira",
            "leadership",
            "stakeholder",
            "roadmap",
            "kpi",
            "budget",
            "team",
            "strategy",
        ],
        JobType::General => GENERAL_KEYWORDS,
    }
}

/// Candidate keywords in evaluation order: domain list first, then the general list.
pub fn candidate_keywords(job_type: JobType) -> Vec<&'static str> {
    domain_keywords(job_type)
        .iter()
        .chain(GENERAL_KEYWORDS.iter())
        .copied()
        .collect()
}

/// Capitalise the first letter of every space-separated word.
pub fn title_case(keyword: &str) -> String {
    keyword
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// A keyword counts as present when the resume text contains it, or when it
/// and any scored skill contain one another. The two-way substring test
/// over-matches short terms ("ui" inside "build").
fn is_present(keyword: &str, resume_text: &str, skills: &[String]) -> bool {
    resume_text.contains(keyword)
        || skills
            .iter()
            .any(|skill| skill.contains(keyword) || keyword.contains(skill.as_str()))
}

pub fn find_missing_keywords_with_limit(
    doc: &ResumeDocument,
    job_type: JobType,
    aggregated_text: &str,
    limit: usize,
) -> Vec<String> {
    let resume_text = aggregated_text.to_lowercase();
    let skills: Vec<String> = doc.skills.scored().map(|skill| skill.to_lowercase()).collect();

    let mut missing = Vec::new();
    for keyword in candidate_keywords(job_type) {
        if missing.len() >= limit {
            break;
        }
        if !is_present(keyword, &resume_text, &skills) {
            missing.push(title_case(keyword));
        }
    }

    debug!("Found {} missing keywords for job type '{}'", missing.len(), job_type);
    missing
}

pub fn find_missing_keywords(doc: &ResumeDocument, job_type: JobType, aggregated_text: &str) -> Vec<String> {
    find_missing_keywords_with_limit(doc, job_type, aggregated_text, DEFAULT_MAX_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::Skills;

    fn with_skills(technical: &[&str], soft: &[&str]) -> ResumeDocument {
        ResumeDocument {
            skills: Skills {
                technical: technical.iter().map(|s| s.to_string()).collect(),
                soft: soft.iter().map(|s| s.to_string()).collect(),
                languages: vec![],
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_domain_lists_have_ten_keywords() {
        for job_type in JobType::ALL {
            let expected = if job_type == JobType::General { 8 } else { 10 };
            assert_eq!(domain_keywords(job_type).len(), expected, "{}", job_type);
        }
        assert_eq!(GENERAL_KEYWORDS.len(), 8);
    }

    #[test]
    fn test_general_list_is_appended() {
        let candidates = candidate_keywords(JobType::Software);
        assert_eq!(candidates.len(), 18);
        assert_eq!(candidates[0], "git");
        assert_eq!(candidates[10], "communication");

        let general = candidate_keywords(JobType::General);
        assert_eq!(general.len(), 16);
        assert_eq!(general[..8], general[8..]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("power bi"), "Power Bi");
        assert_eq!(title_case("ci/cd"), "Ci/cd");
        assert_eq!(title_case("problem-solving"), "Problem-solving");
        assert_eq!(title_case("node.js"), "Node.js");
    }

    #[test]
    fn test_empty_document_software_gaps() {
        let doc = ResumeDocument::default();
        let missing = find_missing_keywords(&doc, JobType::Software, "");
        assert_eq!(missing, vec!["Git", "Agile", "Api", "Testing", "Ci/cd"]);
    }

    #[test]
    fn test_skill_suppresses_keyword() {
        let doc = with_skills(&["Docker", "Git", "Agile"], &[]);
        let missing = find_missing_keywords(&doc, JobType::Software, "docker git agile");
        assert!(!missing.contains(&"Docker".to_string()));
        assert_eq!(missing, vec!["Api", "Testing", "Ci/cd", "Aws", "Rest"]);
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let doc = ResumeDocument::default();
        let missing = find_missing_keywords(&doc, JobType::Software, "Used GIT and AGILE daily");
        assert_eq!(missing[0], "Api");
    }

    #[test]
    fn test_bidirectional_skill_match() {
        // keyword inside skill
        let doc = with_skills(&["REST APIs"], &[]);
        let missing = find_missing_keywords_with_limit(&doc, JobType::Software, "", 18);
        assert!(!missing.contains(&"Rest".to_string()));
        assert!(!missing.contains(&"Api".to_string()));

        // skill inside keyword
        let doc = with_skills(&["CI"], &[]);
        let missing = find_missing_keywords_with_limit(&doc, JobType::Software, "", 18);
        assert!(!missing.contains(&"Ci/cd".to_string()));
    }

    #[test]
    fn test_languages_do_not_suppress() {
        let mut doc = ResumeDocument::default();
        doc.skills.languages.push("Git".to_string());
        let missing = find_missing_keywords(&doc, JobType::Software, "");
        assert_eq!(missing[0], "Git");
    }

    #[test]
    fn test_stops_after_limit() {
        let doc = ResumeDocument::default();
        assert_eq!(find_missing_keywords(&doc, JobType::Data, "").len(), 5);
        assert_eq!(find_missing_keywords_with_limit(&doc, JobType::Data, "", 3).len(), 3);
        assert!(find_missing_keywords_with_limit(&doc, JobType::Data, "", 0).is_empty());
    }

    #[test]
    fn test_general_job_type_reaches_general_list() {
        let doc = with_skills(&[], &["Communication"]);
        let missing = find_missing_keywords(&doc, JobType::General, "");
        assert_eq!(
            missing,
            vec!["Teamwork", "Problem-solving", "Leadership", "Time Management", "Analytical"]
        );
    }

    #[test]
    fn test_general_job_type_repeats_gaps_up_to_limit() {
        let doc = with_skills(
            &[],
            &["Communication", "Teamwork", "Problem-solving", "Leadership", "Time management"],
        );
        let missing = find_missing_keywords(&doc, JobType::General, "");
        assert_eq!(
            missing,
            vec!["Analytical", "Detail-oriented", "Collaboration", "Analytical", "Detail-oriented"]
        );
    }

    #[test]
    fn test_all_present_yields_nothing() {
        let text = candidate_keywords(JobType::Management).join(" ");
        let doc = ResumeDocument::default();
        assert!(find_missing_keywords(&doc, JobType::Management, &text).is_empty());
    }
}
