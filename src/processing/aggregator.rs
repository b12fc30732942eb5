//! Flattens a resume document into a single text blob for keyword scanning

use crate::processing::document::ResumeDocument;

/// Concatenate the scannable parts of a document, separated by single spaces.
///
/// Order: summary, title, each experience (title, company, technologies,
/// responsibilities), technical/soft/language skills, each project (title,
/// description, technologies), each certification (name, issuer).
///
/// Case is preserved; callers lowercase once before matching.
pub fn aggregate_text(doc: &ResumeDocument) -> String {
    let mut texts: Vec<String> = Vec::new();

    texts.push(doc.personal_info.summary.clone());
    texts.push(doc.personal_info.title.clone());

    for exp in &doc.experience {
        texts.push(exp.title.clone());
        texts.push(exp.company.clone());
        texts.push(exp.technologies.as_text().into_owned());
        texts.push(exp.responsibilities.join(" "));
    }

    texts.push(doc.skills.technical.join(" "));
    texts.push(doc.skills.soft.join(" "));
    texts.push(doc.skills.languages.join(" "));

    for project in &doc.projects {
        texts.push(project.title.clone());
        texts.push(project.description.clone());
        texts.push(project.technologies.as_text().into_owned());
    }

    for cert in &doc.certifications {
        texts.push(cert.name.clone());
        texts.push(cert.issuer.clone());
    }

    texts.join(" ")
}
