//! ATS analysis engine: composes aggregation, classification, rubric scoring
//! and keyword-gap analysis into a single report

use crate::processing::aggregator::aggregate_text;
use crate::processing::classifier::{classify_job_type, JobType};
use crate::processing::document::ResumeDocument;
use crate::processing::keywords::{find_missing_keywords_with_limit, DEFAULT_MAX_KEYWORDS};
use crate::processing::rubric::{score_resume_with_limit, Breakdown, Tip, DEFAULT_MAX_TIPS};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of scoring one document snapshot. Recomputed from scratch per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub score: u8,
    pub breakdown: Breakdown,
    pub tips: Vec<Tip>,
    pub missing_keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreRating::Excellent,
            60..=79 => ScoreRating::Good,
            _ => ScoreRating::NeedsWork,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent! Your resume is ATS-ready.",
            ScoreRating::Good => "Good progress! A few improvements needed.",
            ScoreRating::NeedsWork => "Needs work. Follow the tips below.",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreRating::Excellent => write!(f, "EXCELLENT"),
            ScoreRating::Good => write!(f, "GOOD"),
            ScoreRating::NeedsWork => write!(f, "NEEDS WORK"),
        }
    }
}

/// A report together with the job type it was scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    pub report: ScoreReport,
    pub job_type: JobType,
    pub rating: ScoreRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLimits {
    pub max_tips: usize,
    pub max_keywords: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            max_tips: DEFAULT_MAX_TIPS,
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }
}

/// Stateless scoring engine. Safe to share and call concurrently.
#[derive(Debug, Clone, Default)]
pub struct AtsEngine {
    limits: ReportLimits,
}

impl AtsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ReportLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> ReportLimits {
        self.limits
    }

    pub fn analyze(&self, doc: &ResumeDocument) -> AtsAnalysis {
        let text = aggregate_text(doc).to_lowercase();
        let job_type = classify_job_type(doc);

        let rubric = score_resume_with_limit(doc, &text, self.limits.max_tips);
        let missing_keywords = find_missing_keywords_with_limit(doc, job_type, &text, self.limits.max_keywords);

        debug!(
            "ATS score {} ({} tips, {} missing keywords)",
            rubric.score,
            rubric.tips.len(),
            missing_keywords.len()
        );

        AtsAnalysis {
            rating: ScoreRating::from_score(rubric.score),
            job_type,
            report: ScoreReport {
                score: rubric.score,
                breakdown: rubric.breakdown,
                tips: rubric.tips,
                missing_keywords,
            },
        }
    }

    pub fn report(&self, doc: &ResumeDocument) -> ScoreReport {
        self.analyze(doc).report
    }
}

/// Score a document with the default limits (5 tips, 5 keywords).
pub fn compute_ats_report(doc: &ResumeDocument) -> ScoreReport {
    AtsEngine::new().report(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::{Experience, PersonalInfo, Skills};

    fn scenario_document() -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "j@x.com".to_string(),
                phone: "123".to_string(),
                ..Default::default()
            },
            experience: vec![Experience {
                company: "Acme".to_string(),
                title: "Engineer".to_string(),
                responsibilities: vec!["Built things".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_report() {
        let report = compute_ats_report(&scenario_document());

        assert_eq!(report.score, 25);
        assert_eq!(report.breakdown.personal_info, 50);
        assert_eq!(report.breakdown.experience, 65);
        assert_eq!(report.breakdown.education, 0);
        assert_eq!(report.tips[0].tip, "Add your location");
        assert_eq!(report.tips.len(), 5);
        // "Engineer" classifies as software; nothing from that list is present.
        assert_eq!(report.missing_keywords, vec!["Git", "Agile", "Api", "Testing", "Ci/cd"]);
    }

    #[test]
    fn test_empty_document_report() {
        let analysis = AtsEngine::new().analyze(&ResumeDocument::default());

        assert_eq!(analysis.report.score, 0);
        assert_eq!(analysis.report.breakdown, Breakdown::default());
        assert_eq!(analysis.report.tips.len(), 5);
        assert_eq!(analysis.report.tips[0].tip, "Add your full name");
        assert_eq!(analysis.job_type, JobType::General);
        assert_eq!(analysis.rating, ScoreRating::NeedsWork);
        assert_eq!(
            analysis.report.missing_keywords,
            vec!["Communication", "Teamwork", "Problem-solving", "Leadership", "Time Management"]
        );
    }

    #[test]
    fn test_deterministic() {
        let doc = scenario_document();
        let first = serde_json::to_string(&compute_ats_report(&doc)).unwrap();
        let second = serde_json::to_string(&compute_ats_report(&doc)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_experience_is_monotonic() {
        let mut doc = scenario_document();
        let before = compute_ats_report(&doc);

        doc.experience.push(Experience {
            company: "Globex".to_string(),
            title: "Engineer".to_string(),
            responsibilities: vec!["Wrote code".to_string(), "Reviewed code".to_string()],
            ..Default::default()
        });
        let after = compute_ats_report(&doc);

        assert!(after.breakdown.experience >= before.breakdown.experience);
        assert!(after.score >= before.score);
    }

    #[test]
    fn test_docker_skill_never_reported_missing() {
        let doc = ResumeDocument {
            personal_info: PersonalInfo {
                title: "Backend Engineer".to_string(),
                ..Default::default()
            },
            skills: Skills {
                technical: vec!["Docker".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let analysis = AtsEngine::with_limits(ReportLimits {
            max_tips: 5,
            max_keywords: 18,
        })
        .analyze(&doc);

        assert_eq!(analysis.job_type, JobType::Software);
        assert!(!analysis.report.missing_keywords.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(ScoreRating::from_score(100), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(80), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(79), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(60), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(59), ScoreRating::NeedsWork);
        assert_eq!(ScoreRating::NeedsWork.message(), "Needs work. Follow the tips below.");
    }

    #[test]
    fn test_report_json_shape() {
        let value = serde_json::to_value(compute_ats_report(&ResumeDocument::default())).unwrap();
        assert!(value.get("missingKeywords").is_some());
        assert!(value["breakdown"].get("personalInfo").is_some());
        assert_eq!(value["tips"][0]["category"], "Personal Info");
    }
}
