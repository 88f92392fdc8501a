use crate::services::issue_form;
use anyhow::Result;

pub fn run(body: &str) -> Result<()> {
    let fields = issue_form::parse(body);
    tracing::debug!("Parsed {} fields", fields.len());
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}
