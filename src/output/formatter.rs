//! Output formatters for ATS reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ReportEnvelope;
use crate::processing::analyzer::ScoreRating;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting ATS reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ReportEnvelope) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with embedded styling
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

const BAR_WIDTH: usize = 20;

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Score Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #333; max-width: 720px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .score { font-size: 2.5em; font-weight: bold; }
        .excellent { color: #28a745; }
        .good { color: #ffc107; }
        .needs-work { color: #dc3545; }
        .bar { background: #e9ecef; border-radius: 4px; height: 8px; }
        .fill { background: #007acc; border-radius: 4px; height: 8px; }
        .row { margin: 10px 0; }
        .tag { display: inline-block; background: #e9ecef; border-radius: 12px; padding: 4px 10px; margin: 3px; }
        .metadata { margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>ATS Score</h1>
        <p class="score {{ rating_class }}">{{ score }}%</p>
        <p>{{ rating_message }}</p>

        <h2>Breakdown</h2>
        {% for row in breakdown %}
        <div class="row">
            <div>{{ row.label }} <strong>{{ row.value }}%</strong></div>
            <div class="bar"><div class="fill" style="width: {{ row.value }}%"></div></div>
        </div>
        {% endfor %}

        {% if !tips.is_empty() %}
        <h2>Improvement Tips</h2>
        <ul>
        {% for tip in tips %}
            <li><strong>{{ tip.category }}:</strong> {{ tip.tip }}</li>
        {% endfor %}
        </ul>
        {% endif %}

        {% if !missing_keywords.is_empty() %}
        <h2>Missing Keywords</h2>
        <div>
        {% for keyword in missing_keywords %}<span class="tag">{{ keyword }}</span>{% endfor %}
        </div>
        {% endif %}

        <div class="metadata">
            Job type: {{ job_type }} | Source: {{ source }} | Generated: {{ generated_at }} | ats-scorer v{{ version }}
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    score: u8,
    rating_class: String,
    rating_message: String,
    breakdown: Vec<HtmlBreakdownRow>,
    tips: Vec<HtmlTip>,
    missing_keywords: Vec<String>,
    job_type: String,
    source: String,
    generated_at: String,
    version: String,
}

#[derive(Debug, Clone)]
struct HtmlBreakdownRow {
    label: String,
    value: u8,
}

#[derive(Debug, Clone)]
struct HtmlTip {
    category: String,
    tip: String,
}

fn progress_bar(value: u8) -> String {
    let filled = (value as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_score_badge(&self, rating: ScoreRating) -> String {
        let color = match rating {
            ScoreRating::Excellent => Color::Green,
            ScoreRating::Good => Color::Yellow,
            ScoreRating::NeedsWork => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", rating.to_string().color(color).bold())
        } else {
            format!("[{}]", rating)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, envelope: &ReportEnvelope) -> Result<String> {
        let analysis = &envelope.analysis;
        let report = &analysis.report;
        let mut output = String::new();

        output.push_str(&self.format_header("ATS SCORE"));
        output.push_str(&format!(
            "Score: {}% {}\n",
            report.score,
            self.format_score_badge(analysis.rating)
        ));
        output.push_str(&format!("{}\n", self.colorize(analysis.rating.message(), Color::Cyan)));

        output.push_str(&self.format_header("Breakdown"));
        for (section, value) in report.breakdown.sections() {
            output.push_str(&format!("  {:<14} {} {:>3}%\n", section.label(), progress_bar(value), value));
        }

        if !report.tips.is_empty() {
            output.push_str(&self.format_header("Improvement Tips"));
            for (i, tip) in report.tips.iter().enumerate() {
                if self.detailed {
                    output.push_str(&format!(
                        "  {}. {} {}\n",
                        i + 1,
                        tip.tip,
                        self.colorize(&format!("({})", tip.category), Color::BrightBlack)
                    ));
                } else {
                    output.push_str(&format!("  {}. {}\n", i + 1, tip.tip));
                }
            }
        }

        if !report.missing_keywords.is_empty() {
            output.push_str(&self.format_header("Missing Keywords"));
            output.push_str(&format!(
                "  {}\n",
                self.colorize(&report.missing_keywords.join(", "), Color::Yellow)
            ));
        }

        if self.detailed {
            output.push_str(&self.format_header("Details"));
            output.push_str(&format!("  Job type: {}\n", analysis.job_type));
            output.push_str(&format!("  Source: {}\n", envelope.source_display()));
            output.push_str(&format!("  Generated: {}\n", envelope.generated_at_display()));
        }

        if analysis.rating == ScoreRating::Excellent {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("Great job! Your resume is ready to submit.", Color::Green)
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, envelope: &ReportEnvelope) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(envelope)?
        } else {
            serde_json::to_string(envelope)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(rating: ScoreRating) -> &'static str {
        match rating {
            ScoreRating::Excellent => "🟢 Excellent",
            ScoreRating::Good => "🟡 Good",
            ScoreRating::NeedsWork => "🔴 Needs Work",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, envelope: &ReportEnvelope) -> Result<String> {
        let analysis = &envelope.analysis;
        let report = &analysis.report;
        let mut output = String::new();

        output.push_str("# ATS Score Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Source:** `{}`\n\n",
                envelope.generated_at_display(),
                envelope.source_display()
            ));
        }

        output.push_str(&format!(
            "**Score:** {}% {}\n\n",
            report.score,
            Self::markdown_score_badge(analysis.rating)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", analysis.rating.message()));
        output.push_str(&format!("**Job type:** {}\n\n", analysis.job_type));

        output.push_str("## Breakdown\n\n");
        output.push_str("| Section | Score |\n");
        output.push_str("|---------|-------|\n");
        for (section, value) in report.breakdown.sections() {
            output.push_str(&format!("| {} | {}% |\n", section.label(), value));
        }
        output.push('\n');

        if !report.tips.is_empty() {
            output.push_str("## Improvement Tips\n\n");
            for (i, tip) in report.tips.iter().enumerate() {
                output.push_str(&format!("{}. **{}:** {}\n", i + 1, tip.category, tip.tip));
            }
            output.push('\n');
        }

        if !report.missing_keywords.is_empty() {
            output.push_str("## Missing Keywords\n\n");
            for keyword in &report.missing_keywords {
                output.push_str(&format!("- {}\n", keyword));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n");
            output.push_str(&format!("Generated by ats-scorer v{}\n", envelope.metadata.scorer_version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, envelope: &ReportEnvelope) -> HtmlTemplate {
        let analysis = &envelope.analysis;
        let report = &analysis.report;

        let rating_class = match analysis.rating {
            ScoreRating::Excellent => "excellent",
            ScoreRating::Good => "good",
            ScoreRating::NeedsWork => "needs-work",
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            score: report.score,
            rating_class: rating_class.to_string(),
            rating_message: analysis.rating.message().to_string(),
            breakdown: report
                .breakdown
                .sections()
                .iter()
                .map(|(section, value)| HtmlBreakdownRow {
                    label: section.label().to_string(),
                    value: *value,
                })
                .collect(),
            tips: report
                .tips
                .iter()
                .map(|tip| HtmlTip {
                    category: tip.category.label().to_string(),
                    tip: tip.tip.clone(),
                })
                .collect(),
            missing_keywords: report.missing_keywords.clone(),
            job_type: analysis.job_type.to_string(),
            source: envelope.source_display().to_string(),
            generated_at: envelope.generated_at_display(),
            version: envelope.metadata.scorer_version.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, envelope: &ReportEnvelope) -> Result<String> {
        let template = self.create_template_data(envelope);
        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &ReportEnvelope, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    match format {
        OutputFormat::Console => format!("{}_ats.txt", base_name),
        OutputFormat::Json => format!("{}_ats.json", base_name),
        OutputFormat::Markdown => format!("{}_ats.md", base_name),
        OutputFormat::Html => format!("{}_ats.html", base_name),
    }
}
