//! Structured resume document model
//!
//! Every field is optional on the wire. Missing keys, explicit `null`s and
//! empty strings all collapse to the same empty value so the scoring
//! engine never has to distinguish between them.

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Skills,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub selected_template: String,
    pub last_saved: Option<String>,
}

impl ResumeDocument {
    /// Pretty JSON for an empty document, with every section present.
    pub fn skeleton_json() -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(&Self::default())?)
    }

    /// Write the empty-document skeleton to `path`, creating parent directories.
    pub fn write_skeleton(path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::skeleton_json()?)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub portfolio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Technologies,
    #[serde(deserialize_with = "nullable_strings")]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gpa: String,
    #[serde(deserialize_with = "null_as_default")]
    pub honors: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Technologies,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub credential_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
}

/// Technologies are free text in the editor, but older snapshots store a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Technologies {
    Text(String),
    #[serde(deserialize_with = "nullable_strings")]
    List(Vec<String>),
}

impl Default for Technologies {
    fn default() -> Self {
        Technologies::Text(String::new())
    }
}

impl Technologies {
    /// Flatten to the text used for keyword scanning. Lists join with `,`.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Technologies::Text(text) => Cow::Borrowed(text.as_str()),
            Technologies::List(items) => Cow::Owned(items.join(",")),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Technologies::Text(text) => text.is_empty(),
            Technologies::List(items) => items.iter().all(|item| item.is_empty()),
        }
    }
}

impl From<&str> for Technologies {
    fn from(text: &str) -> Self {
        Technologies::Text(text.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Languages,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Languages,
    ];
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCategory::Technical => write!(f, "technical"),
            SkillCategory::Soft => write!(f, "soft"),
            SkillCategory::Languages => write!(f, "languages"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "nullable_strings")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "nullable_strings")]
    pub soft: Vec<String>,
    #[serde(deserialize_with = "nullable_strings")]
    pub languages: Vec<String>,
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Languages => &self.languages,
        }
    }

    fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Languages => &mut self.languages,
        }
    }

    /// Add a trimmed skill to a category. Blank values and duplicates are rejected.
    pub fn add(&mut self, category: SkillCategory, skill: &str) -> bool {
        let value = skill.trim();
        let entries = self.get_mut(category);
        if value.is_empty() || entries.iter().any(|existing| existing == value) {
            return false;
        }
        entries.push(value.to_string());
        true
    }

    /// Skills that count towards the rubric: technical and soft, languages excluded.
    pub fn scored(&self) -> impl Iterator<Item = &String> {
        self.technical.iter().chain(self.soft.iter())
    }

    pub fn scored_count(&self) -> usize {
        self.technical.len() + self.soft.len()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_default_to_empty() {
        let doc: ResumeDocument = serde_json::from_str(r#"{"personalInfo": {"fullName": "Jane"}}"#).unwrap();

        assert_eq!(doc.personal_info.full_name, "Jane");
        assert!(doc.personal_info.email.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.skills.technical.is_empty());
        assert!(doc.skills.languages.is_empty());
    }

    #[test]
    fn test_nulls_are_treated_as_empty() {
        let json = r#"{
            "personalInfo": {"fullName": null, "summary": null},
            "experience": [{"company": "Acme", "title": null, "responsibilities": ["Shipped", null]}],
            "skills": {"technical": null, "soft": ["Teamwork"]},
            "projects": null,
            "lastSaved": null
        }"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();

        assert!(doc.personal_info.full_name.is_empty());
        assert_eq!(doc.experience[0].title, "");
        assert_eq!(doc.experience[0].responsibilities, vec!["Shipped".to_string(), String::new()]);
        assert!(doc.skills.technical.is_empty());
        assert_eq!(doc.skills.soft, vec!["Teamwork".to_string()]);
        assert!(doc.projects.is_empty());
        assert!(doc.last_saved.is_none());
    }

    #[test]
    fn test_technologies_accepts_text_or_list() {
        let doc: ResumeDocument = serde_json::from_str(
            r#"{"projects": [{"technologies": "Rust, Tokio"}, {"technologies": ["React", "Node.js"]}]}"#,
        )
        .unwrap();

        assert_eq!(doc.projects[0].technologies.as_text(), "Rust, Tokio");
        assert_eq!(doc.projects[1].technologies.as_text(), "React,Node.js");
        assert!(Technologies::default().is_empty());
    }

    #[test]
    fn test_null_inside_technologies_list() {
        let doc: ResumeDocument = serde_json::from_str(
            r#"{"experience": [{"company": "Acme", "technologies": ["Rust", null, "Go"]}]}"#,
        )
        .unwrap();

        assert_eq!(doc.experience[0].company, "Acme");
        assert_eq!(doc.experience[0].technologies.as_text(), "Rust,,Go");
    }

    #[test]
    fn test_skeleton_lists_every_section() {
        let skeleton = ResumeDocument::skeleton_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&skeleton).unwrap();

        for key in ["personalInfo", "experience", "education", "skills", "projects", "certifications"] {
            assert!(value.get(key).is_some(), "{}", key);
        }
        let parsed: ResumeDocument = serde_json::from_str(&skeleton).unwrap();
        assert_eq!(parsed, ResumeDocument::default());
    }

    #[test]
    fn test_skill_category_accessor() {
        let mut skills = Skills::default();
        assert!(skills.add(SkillCategory::Technical, "  Rust "));
        assert!(!skills.add(SkillCategory::Technical, "Rust"));
        assert!(!skills.add(SkillCategory::Soft, "   "));
        assert!(skills.add(SkillCategory::Languages, "French"));

        assert_eq!(skills.get(SkillCategory::Technical), ["Rust".to_string()]);
        assert_eq!(skills.get(SkillCategory::Languages).len(), 1);
        assert_eq!(skills.scored_count(), 1);
        assert_eq!(SkillCategory::ALL.len(), 3);
        assert_eq!(SkillCategory::Languages.to_string(), "languages");
    }

    #[test]
    fn test_camel_case_round_trip_keys() {
        let doc = ResumeDocument::default();
        let value = serde_json::to_value(&doc).unwrap();

        assert!(value.get("personalInfo").is_some());
        assert!(value.get("selectedTemplate").is_some());
        assert!(value["personalInfo"].get("fullName").is_some());
    }
}
