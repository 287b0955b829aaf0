use crate::output::print_json;
use anyhow::Context;
use missiondeck_core::{config::Config, document::IssueLevel, store::PackStore};
use std::path::Path;

pub fn run(root: &Path, date: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root)?;
    let store = PackStore::open(root, &config);
    let doc = store
        .load(date)?
        .with_context(|| format!("no pack for {date}"))?;

    let issues = doc.validate();

    if json {
        print_json(&issues)?;
    } else if issues.is_empty() {
        println!("{}: {} missions, no issues.", date, doc.missions.len());
    } else {
        for issue in &issues {
            let level = match issue.level {
                IssueLevel::Error => "error",
                IssueLevel::Warning => "warning",
            };
            println!("{level}: {}", issue.message);
        }
    }

    if doc.has_errors() {
        anyhow::bail!("pack {date} failed validation");
    }
    Ok(())
}
