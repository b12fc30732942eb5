//! Coarse job-type classification via an ordered rule table

use crate::processing::document::ResumeDocument;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Data,
    Software,
    Web,
    Mobile,
    Design,
    Marketing,
    Management,
    General,
}

impl JobType {
    pub const ALL: [JobType; 8] = [
        JobType::Data,
        JobType::Software,
        JobType::Web,
        JobType::Mobile,
        JobType::Design,
        JobType::Marketing,
        JobType::Management,
        JobType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Data => "data",
            JobType::Software => "software",
            JobType::Web => "web",
            JobType::Mobile => "mobile",
            JobType::Design => "design",
            JobType::Marketing => "marketing",
            JobType::Management => "management",
            JobType::General => "general",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        JobType::ALL
            .iter()
            .copied()
            .find(|job_type| job_type.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = JobType::ALL.iter().map(JobType::as_str).collect();
                format!("Invalid job type: {}. Supported: {}", s, known.join(", "))
            })
    }
}

/// First matching rule wins. Resumes routinely hit several of these, so the
/// order is the tie-break and must not be rearranged.
const JOB_TYPE_RULES: &[(JobType, &str)] = &[
    (JobType::Data, r"data|analyst|analytics|bi|business intelligence|sql|tableau|power bi"),
    (JobType::Software, r"software|developer|engineer|backend|fullstack|programming"),
    (JobType::Web, r"frontend|web|react|javascript|html|css|ui developer"),
    (JobType::Mobile, r"mobile|ios|android|app developer|react native|flutter"),
    (JobType::Design, r"design|ux|ui|graphic|creative|figma|adobe"),
    (JobType::Marketing, r"marketing|seo|content|social media|digital marketing"),
    (JobType::Management, r"manager|lead|director|management|scrum|agile"),
];

static COMPILED_RULES: Lazy<Vec<(JobType, Regex)>> = Lazy::new(|| {
    JOB_TYPE_RULES
        .iter()
        .map(|(job_type, pattern)| {
            let regex = Regex::new(&format!("(?i){}", pattern)).expect("job type rule must compile");
            (*job_type, regex)
        })
        .collect()
});

/// Text the classifier looks at: headline title, summary, every experience
/// title and all technical skills, lowercased.
pub fn classification_sample(doc: &ResumeDocument) -> String {
    let mut parts: Vec<&str> = vec![
        doc.personal_info.title.as_str(),
        doc.personal_info.summary.as_str(),
    ];
    parts.extend(doc.experience.iter().map(|exp| exp.title.as_str()));
    parts.extend(doc.skills.technical.iter().map(String::as_str));

    parts.join(" ").to_lowercase()
}

pub fn classify_text(sample: &str) -> JobType {
    COMPILED_RULES
        .iter()
        .find(|(_, regex)| regex.is_match(sample))
        .map(|(job_type, _)| *job_type)
        .unwrap_or(JobType::General)
}

pub fn classify_job_type(doc: &ResumeDocument) -> JobType {
    let job_type = classify_text(&classification_sample(doc));
    debug!("Classified resume as job type '{}'", job_type);
    job_type
}
