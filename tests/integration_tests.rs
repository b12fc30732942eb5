//! Integration tests for the ATS scorer

use ats_scorer::input::DocumentLoader;
use ats_scorer::output::formatter::{save_report_to_file, ReportGenerator};
use ats_scorer::output::ReportEnvelope;
use ats_scorer::processing::analyzer::{compute_ats_report, AtsEngine, ReportLimits, ScoreRating};
use ats_scorer::processing::classifier::JobType;
use ats_scorer::processing::document::{Experience, ResumeDocument};
use ats_scorer::config::OutputFormat;
use std::path::Path;
use tempfile::TempDir;

#[tokio::test]
async fn test_score_complete_json_resume() {
    let mut loader = DocumentLoader::new();
    let doc = loader.load(Path::new("tests/fixtures/sample_resume.json")).await.unwrap();

    let analysis = AtsEngine::new().analyze(&doc);
    let report = &analysis.report;

    assert_eq!(report.score, 92);
    assert_eq!(report.breakdown.personal_info, 100);
    assert_eq!(report.breakdown.experience, 100);
    assert_eq!(report.breakdown.skills, 100);
    assert!(report.tips.is_empty());
    assert_eq!(analysis.rating, ScoreRating::Excellent);

    // "SQL" in the technical skills trips the data rule before software.
    assert_eq!(analysis.job_type, JobType::Data);
    assert_eq!(
        report.missing_keywords,
        vec!["Python", "Excel", "Tableau", "Power Bi", "Statistics"]
    );
}

#[tokio::test]
async fn test_score_partial_toml_resume() {
    let mut loader = DocumentLoader::new();
    let doc = loader.load(Path::new("tests/fixtures/sample_resume.toml")).await.unwrap();

    let analysis = AtsEngine::new().analyze(&doc);
    let report = &analysis.report;

    assert_eq!(report.score, 38);
    assert_eq!(report.breakdown.personal_info, 33);
    assert_eq!(report.breakdown.experience, 75);
    assert_eq!(report.breakdown.education, 0);
    assert_eq!(report.breakdown.skills, 50);
    assert_eq!(report.breakdown.projects, 0);

    let tips: Vec<&str> = report.tips.iter().map(|t| t.tip.as_str()).collect();
    assert_eq!(
        tips,
        vec![
            "Add your phone number",
            "Add your location",
            "Add your LinkedIn profile",
            "Add a professional summary (50+ characters)",
            "Add your educational background",
        ]
    );

    assert_eq!(analysis.job_type, JobType::Data);
    assert_eq!(
        report.missing_keywords,
        vec!["Excel", "Power Bi", "Statistics", "Analytics", "Visualization"]
    );
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut loader = DocumentLoader::new();
    let path = Path::new("tests/fixtures/sample_resume.json");

    let first = loader.load(path).await.unwrap();
    assert_eq!(loader.cache_size(), 1);

    let second = loader.load(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(loader.cache_size(), 1);

    loader.clear_cache();
    assert_eq!(loader.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut loader = DocumentLoader::new().with_cache(false);
    loader.load(Path::new("tests/fixtures/sample_resume.json")).await.unwrap();
    assert_eq!(loader.cache_size(), 0);
}

#[tokio::test]
async fn test_reload_picks_up_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.json");
    std::fs::write(&path, r#"{"personalInfo": {"fullName": "Jo"}}"#).unwrap();

    let mut loader = DocumentLoader::new();
    let before = compute_ats_report(&loader.load(&path).await.unwrap());

    std::fs::write(&path, r#"{"personalInfo": {"fullName": "Jo", "email": "jo@example.com"}}"#).unwrap();
    let cached = compute_ats_report(&loader.load(&path).await.unwrap());
    let reloaded = compute_ats_report(&loader.reload(&path).await.unwrap());

    assert_eq!(before, cached);
    assert_eq!(reloaded.score, before.score + 4);
    assert_eq!(loader.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut loader = DocumentLoader::new();
    let result = loader.load(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut loader = DocumentLoader::new();
    let result = loader.load(Path::new("tests/fixtures/nonexistent.json")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_malformed_json() {
    let mut loader = DocumentLoader::new();
    let result = loader.load(Path::new("tests/fixtures/broken.json")).await;
    assert!(result.is_err());
    assert_eq!(loader.cache_size(), 0);
}

#[test]
fn test_report_bounds_hold_for_large_documents() {
    let entry = Experience {
        company: "Acme".to_string(),
        title: "Engineer".to_string(),
        responsibilities: vec!["Grew revenue 50%".to_string(), "Led 9 people".to_string()],
        ..Default::default()
    };
    let mut doc = ResumeDocument::default();
    doc.experience = vec![entry; 25];

    let report = compute_ats_report(&doc);
    assert!(report.score <= 100);
    assert!(report.tips.len() <= 5);
    assert!(report.missing_keywords.len() <= 5);
    for (_, value) in report.breakdown.sections() {
        assert!(value <= 100);
    }
}

#[test]
fn test_limits_from_engine() {
    let engine = AtsEngine::with_limits(ReportLimits {
        max_tips: 2,
        max_keywords: 1,
    });
    let report = engine.report(&ResumeDocument::default());
    assert_eq!(report.tips.len(), 2);
    assert_eq!(report.missing_keywords, vec!["Communication"]);
}

#[tokio::test]
async fn test_saved_json_report_round_trips_analysis() {
    let mut loader = DocumentLoader::new();
    let doc = loader.load(Path::new("tests/fixtures/sample_resume.json")).await.unwrap();
    let analysis = AtsEngine::new().analyze(&doc);
    let envelope = ReportEnvelope::new(analysis.clone(), Some("sample_resume.json".to_string()));

    let content = ReportGenerator::with_options(false, false, true, true)
        .generate_report(&envelope, &OutputFormat::Json)
        .unwrap();

    let dir = TempDir::new().unwrap();
    let target = dir.path().join("reports").join("sample_ats.json");
    save_report_to_file(&content, &target).unwrap();

    let saved: ReportEnvelope = serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(saved.analysis, analysis);
}

#[tokio::test]
async fn test_init_skeleton_scores_empty_baseline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new").join("resume.json");
    ResumeDocument::write_skeleton(&path).unwrap();

    let mut loader = DocumentLoader::new();
    let doc = loader.load(&path).await.unwrap();
    assert_eq!(doc, ResumeDocument::default());

    let report = compute_ats_report(&doc);
    assert_eq!(report.score, 0);
    for (_, value) in report.breakdown.sections() {
        assert_eq!(value, 0);
    }
    assert_eq!(report.tips[0].tip, "Add your full name");
}
