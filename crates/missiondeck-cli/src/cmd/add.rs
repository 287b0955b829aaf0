use crate::output::print_json;
use anyhow::Context;
use missiondeck_core::{
    config::Config,
    render::{render, GeneratedMission},
    store::PackStore,
};
use std::path::Path;

pub fn run(root: &Path, from: &Path, date: Option<&str>, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root)?;
    let store = PackStore::open(root, &config);

    let data = std::fs::read_to_string(from)
        .with_context(|| format!("failed to read {}", from.display()))?;
    let missions: Vec<GeneratedMission> = serde_json::from_str(&data)
        .with_context(|| format!("invalid mission batch in {}", from.display()))?;
    if missions.is_empty() {
        anyhow::bail!("mission batch in {} is empty", from.display());
    }

    let date = match date {
        Some(d) => d.to_string(),
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };

    let markdown = render(&missions, &date, &config.pack_title());
    let outcome = store.append(&date, &markdown)?;
    tracing::debug!(
        date = %date,
        merged = outcome.merged,
        total = outcome.total_missions,
        "stored mission batch"
    );

    if json {
        print_json(&serde_json::json!({
            "date": date,
            "merged": outcome.merged,
            "total_missions": outcome.total_missions,
        }))?;
    } else if outcome.merged {
        println!(
            "Merged {} missions into {} (now {} total).",
            missions.len(),
            date,
            outcome.total_missions
        );
    } else {
        println!("Stored {} with {} missions.", date, outcome.total_missions);
    }
    Ok(())
}
