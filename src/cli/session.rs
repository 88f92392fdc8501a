use crate::error::ScaffoldError;
use crate::models::SessionRecord;
use crate::services::issue_form;
use crate::services::scaffold::{ScaffoldOutcome, Scaffolder};
use crate::Config;
use anyhow::Result;
use std::path::Path;

/// Raw inputs handed over by the issue automation.
#[derive(Debug, Clone, Default)]
pub struct IssueInput {
    pub body: String,
    pub title: String,
    pub number: String,
}

pub fn run(
    config_path: &Path,
    root: &Path,
    issue: &IssueInput,
    dry_run: bool,
) -> Result<ScaffoldOutcome> {
    if issue.body.trim().is_empty() {
        return Err(ScaffoldError::EmptyBody.into());
    }

    let config = Config::load_or_default(config_path)?;

    tracing::info!("Scaffolding session from issue #{}", issue.number);
    let fields = issue_form::parse(&issue.body);
    let record = SessionRecord::from_fields(&fields, &issue.title, &config.session);

    if let Err(e) = record.validate() {
        tracing::error!("Parsed fields: {}", serde_json::to_string(&fields)?);
        return Err(e.into());
    }

    let scaffolder = Scaffolder::new(&config, root);
    let outcome = if dry_run {
        scaffolder.dry_run(&record)?
    } else {
        scaffolder.scaffold(&record)?
    };

    tracing::info!("  Slug:     {}", outcome.slug);
    tracing::info!("  Title:    {}", record.title);
    tracing::info!("  Author:   {}", record.presenter);
    tracing::info!("  Date:     {}", record.date);
    tracing::info!("  Type:     {}", record.session_type);

    Ok(outcome)
}
