//! Fixed-weight rubric scoring, section breakdown and improvement tips
//!
//! The weighted score and the per-section breakdown are computed by two
//! independent passes. Both read the same predicate helpers below so the
//! two views can never disagree on what "filled in" means.

use crate::processing::document::{Experience, PersonalInfo, ResumeDocument};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_MAX_TIPS: usize = 5;

/// Resume sections that appear in tips and in the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "Personal Info")]
    PersonalInfo,
    #[serde(rename = "Experience")]
    Experience,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Skills")]
    Skills,
    #[serde(rename = "Projects")]
    Projects,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::PersonalInfo => "Personal Info",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub category: Section,
    pub tip: String,
}

impl Tip {
    fn new(category: Section, tip: &str) -> Self {
        Self {
            category,
            tip: tip.to_string(),
        }
    }
}

/// Per-section completion percentages, each in 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub personal_info: u8,
    pub experience: u8,
    pub education: u8,
    pub skills: u8,
    pub projects: u8,
}

impl Breakdown {
    pub fn sections(&self) -> [(Section, u8); 5] {
        [
            (Section::PersonalInfo, self.personal_info),
            (Section::Experience, self.experience),
            (Section::Education, self.education),
            (Section::Skills, self.skills),
            (Section::Projects, self.projects),
        ]
    }
}

/// Raw rubric totals before truncation and rounding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubricEvaluation {
    pub earned: u32,
    pub max_possible: u32,
    pub tips: Vec<Tip>,
}

impl RubricEvaluation {
    pub fn percentage(&self) -> u8 {
        percentage(self.earned, self.max_possible)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricScore {
    pub score: u8,
    pub breakdown: Breakdown,
    pub tips: Vec<Tip>,
}

// ---------------------------------------------------------------------------
// Rubric tables
// ---------------------------------------------------------------------------

pub const PERSONAL_INFO_MAX: u32 = 20;
pub const EXPERIENCE_MAX: u32 = 30;
pub const EDUCATION_MAX: u32 = 15;
pub const SKILLS_MAX: u32 = 20;
pub const PROJECTS_MAX: u32 = 10;
pub const CERTIFICATIONS_MAX: u32 = 5;

pub const MAX_POSSIBLE: u32 =
    PERSONAL_INFO_MAX + EXPERIENCE_MAX + EDUCATION_MAX + SKILLS_MAX + PROJECTS_MAX + CERTIFICATIONS_MAX;

pub const MIN_SUMMARY_CHARS: usize = 50;

pub struct PersonalInfoItem {
    pub points: u32,
    pub tip: &'static str,
    pub check: fn(&PersonalInfo) -> bool,
}

pub const PERSONAL_INFO_ITEMS: &[PersonalInfoItem] = &[
    PersonalInfoItem { points: 4, tip: "Add your full name", check: has_full_name },
    PersonalInfoItem { points: 4, tip: "Add your email address", check: has_email },
    PersonalInfoItem { points: 4, tip: "Add your phone number", check: has_phone },
    PersonalInfoItem { points: 3, tip: "Add your location", check: has_location },
    PersonalInfoItem { points: 3, tip: "Add your LinkedIn profile", check: has_linkedin },
    PersonalInfoItem {
        points: 2,
        tip: "Add a professional summary (50+ characters)",
        check: has_substantial_summary,
    },
];

pub struct EntryCriterion {
    pub points: u32,
    pub check: fn(&Experience) -> bool,
}

const EXPERIENCE_BASE_POINTS: u32 = 10;
const EXPERIENCE_ENTRY_CAP: u32 = 20;

pub const EXPERIENCE_ENTRY_CRITERIA: &[EntryCriterion] = &[
    EntryCriterion { points: 3, check: has_company_and_title },
    EntryCriterion { points: 4, check: has_detailed_responsibilities },
    EntryCriterion { points: 3, check: has_quantified_responsibility },
];

const EXPERIENCE_BREAKDOWN_BASE: u32 = 50;

const EXPERIENCE_BREAKDOWN_CRITERIA: &[EntryCriterion] = &[
    EntryCriterion { points: 15, check: has_company_and_title },
    EntryCriterion { points: 10, check: has_detailed_responsibilities },
];

const NO_EXPERIENCE_TIP: &str = "Add at least one work experience";
const ACTION_VERBS_TIP: &str = "Use strong action verbs (Led, Managed, Developed, etc.)";
const QUANTIFIED_IMPACT_TIP: &str = "Add quantifiable achievements (%, $, numbers)";
const NO_EDUCATION_TIP: &str = "Add your educational background";
const NO_PROJECTS_TIP: &str = "Add projects to showcase your work";

pub struct SkillTier {
    pub min_skills: usize,
    pub points: u32,
    pub percent: u8,
    pub tip: Option<&'static str>,
}

/// Checked top-down; the first tier whose threshold is met applies.
pub const SKILL_TIERS: &[SkillTier] = &[
    SkillTier { min_skills: 8, points: 20, percent: 100, tip: None },
    SkillTier { min_skills: 5, points: 15, percent: 75, tip: Some("Add more skills (aim for 8+)") },
    SkillTier { min_skills: 3, points: 10, percent: 50, tip: Some("Add more skills to improve ATS match") },
    SkillTier { min_skills: 1, points: 5, percent: 25, tip: Some("Add more technical and soft skills") },
];

const NO_SKILLS_TIER: SkillTier = SkillTier {
    min_skills: 0,
    points: 0,
    percent: 0,
    tip: Some("Add your technical and soft skills"),
};

static METRIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[0-9]+%|[0-9]+ |\$[0-9]+").expect("metric pattern must compile"));

static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?-u:\b)(led|managed|developed|created|implemented|designed|improved|increased|decreased|achieved|delivered|built|launched|optimized|analyzed|coordinated)(?-u:\b)",
    )
    .expect("action verb pattern must compile")
});

static QUANTIFIED_IMPACT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[0-9]+%|[0-9]+\+|\$[0-9]+|[0-9]+ (users|customers|projects|clients|team)")
        .expect("quantified impact pattern must compile")
});

// ---------------------------------------------------------------------------
// Shared predicates
// ---------------------------------------------------------------------------

pub fn has_full_name(info: &PersonalInfo) -> bool {
    !info.full_name.is_empty()
}

pub fn has_email(info: &PersonalInfo) -> bool {
    !info.email.is_empty()
}

pub fn has_phone(info: &PersonalInfo) -> bool {
    !info.phone.is_empty()
}

pub fn has_location(info: &PersonalInfo) -> bool {
    !info.location.is_empty()
}

pub fn has_linkedin(info: &PersonalInfo) -> bool {
    !info.linkedin.is_empty()
}

pub fn has_substantial_summary(info: &PersonalInfo) -> bool {
    info.summary.chars().count() >= MIN_SUMMARY_CHARS
}

pub fn has_company_and_title(exp: &Experience) -> bool {
    !exp.company.is_empty() && !exp.title.is_empty()
}

pub fn has_detailed_responsibilities(exp: &Experience) -> bool {
    exp.responsibilities.iter().filter(|r| !r.is_empty()).count() >= 2
}

pub fn has_quantified_responsibility(exp: &Experience) -> bool {
    exp.responsibilities.iter().any(|r| METRIC_RE.is_match(r))
}

pub fn uses_action_verbs(text: &str) -> bool {
    ACTION_VERB_RE.is_match(text)
}

pub fn shows_quantified_impact(text: &str) -> bool {
    QUANTIFIED_IMPACT_RE.is_match(text)
}

pub fn skill_tier(skill_count: usize) -> &'static SkillTier {
    SKILL_TIERS
        .iter()
        .find(|tier| skill_count >= tier.min_skills)
        .unwrap_or(&NO_SKILLS_TIER)
}

fn percentage(earned: u32, max_possible: u32) -> u8 {
    if max_possible == 0 {
        return 0;
    }
    let ratio = earned as f64 / max_possible as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

// ---------------------------------------------------------------------------
// Weighted score pass
// ---------------------------------------------------------------------------

/// Walk the rubric in order, accumulating points and collecting every tip.
///
/// `text` is the aggregated resume text; it is only used for the action
/// verb and quantified impact checks.
pub fn evaluate(doc: &ResumeDocument, text: &str) -> RubricEvaluation {
    let mut earned = 0;
    let mut tips = Vec::new();

    for item in PERSONAL_INFO_ITEMS {
        if (item.check)(&doc.personal_info) {
            earned += item.points;
        } else {
            tips.push(Tip::new(Section::PersonalInfo, item.tip));
        }
    }

    let has_experience = !doc.experience.is_empty();
    if has_experience {
        let entry_points: u32 = doc
            .experience
            .iter()
            .map(|exp| criteria_points(EXPERIENCE_ENTRY_CRITERIA, exp))
            .sum();
        earned += EXPERIENCE_BASE_POINTS + entry_points.min(EXPERIENCE_ENTRY_CAP);
    } else {
        tips.push(Tip::new(Section::Experience, NO_EXPERIENCE_TIP));
    }

    if has_experience && !uses_action_verbs(text) {
        tips.push(Tip::new(Section::Experience, ACTION_VERBS_TIP));
    }
    if has_experience && !shows_quantified_impact(text) {
        tips.push(Tip::new(Section::Experience, QUANTIFIED_IMPACT_TIP));
    }

    if !doc.education.is_empty() {
        earned += EDUCATION_MAX;
    } else {
        tips.push(Tip::new(Section::Education, NO_EDUCATION_TIP));
    }

    let tier = skill_tier(doc.skills.scored_count());
    earned += tier.points;
    if let Some(tip) = tier.tip {
        tips.push(Tip::new(Section::Skills, tip));
    }

    if !doc.projects.is_empty() {
        earned += PROJECTS_MAX;
    } else {
        tips.push(Tip::new(Section::Projects, NO_PROJECTS_TIP));
    }

    if !doc.certifications.is_empty() {
        earned += CERTIFICATIONS_MAX;
    }

    debug!("Rubric earned {}/{} points with {} tips", earned, MAX_POSSIBLE, tips.len());

    RubricEvaluation {
        earned,
        max_possible: MAX_POSSIBLE,
        tips,
    }
}

fn criteria_points(criteria: &[EntryCriterion], exp: &Experience) -> u32 {
    criteria
        .iter()
        .filter(|criterion| (criterion.check)(exp))
        .map(|criterion| criterion.points)
        .sum()
}

// ---------------------------------------------------------------------------
// Breakdown pass
// ---------------------------------------------------------------------------

pub fn section_breakdown(doc: &ResumeDocument) -> Breakdown {
    Breakdown {
        personal_info: personal_info_percent(&doc.personal_info),
        experience: experience_percent(&doc.experience),
        education: if doc.education.is_empty() { 0 } else { 100 },
        skills: skill_tier(doc.skills.scored_count()).percent,
        projects: if doc.projects.is_empty() { 0 } else { 100 },
    }
}

fn personal_info_percent(info: &PersonalInfo) -> u8 {
    let filled = PERSONAL_INFO_ITEMS
        .iter()
        .filter(|item| (item.check)(info))
        .count();
    percentage(filled as u32, PERSONAL_INFO_ITEMS.len() as u32)
}

fn experience_percent(entries: &[Experience]) -> u8 {
    if entries.is_empty() {
        return 0;
    }
    let total: u32 = EXPERIENCE_BREAKDOWN_BASE
        + entries
            .iter()
            .map(|exp| criteria_points(EXPERIENCE_BREAKDOWN_CRITERIA, exp))
            .sum::<u32>();
    total.min(100) as u8
}

/// Score a document: rounded percentage, breakdown and the first `max_tips` tips.
pub fn score_resume_with_limit(doc: &ResumeDocument, text: &str, max_tips: usize) -> RubricScore {
    let evaluation = evaluate(doc, text);
    let score = evaluation.percentage();
    let mut tips = evaluation.tips;
    tips.truncate(max_tips);

    RubricScore {
        score,
        breakdown: section_breakdown(doc),
        tips,
    }
}

pub fn score_resume(doc: &ResumeDocument, text: &str) -> RubricScore {
    score_resume_with_limit(doc, text, DEFAULT_MAX_TIPS)
}
