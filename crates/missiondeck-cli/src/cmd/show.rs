use crate::output::print_json;
use anyhow::Context;
use missiondeck_core::{config::Config, document::MissionDocument, store::PackStore};
use std::path::Path;

pub fn run(root: &Path, date: &str, raw: bool, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root)?;
    let store = PackStore::open(root, &config);
    let doc = store
        .load(date)?
        .with_context(|| format!("no pack for {date}"))?;
    print_document(&doc, raw, json)
}

pub(crate) fn print_document(doc: &MissionDocument, raw: bool, json: bool) -> anyhow::Result<()> {
    if raw {
        print!("{}", doc.raw);
        if !doc.raw.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    if json {
        return print_json(doc);
    }

    println!("{} — {} missions", doc.date, doc.missions.len());
    for mission in &doc.missions {
        println!("\n[{}] {}", mission.index, mission.title);
        if !mission.time_estimate.is_empty() {
            println!("    time:       {}", mission.time_estimate);
        }
        if !mission.difficulty.is_empty() {
            println!("    difficulty: {}", mission.difficulty);
        }
        if !mission.tools.is_empty() {
            println!("    tools:      {}", mission.tools);
        }
        if let Some(source) = &mission.source {
            println!("    source:     {}", source.label);
        }
        println!("    steps:      {}", mission.steps.len());
        println!("    slug:       {}", mission.slug);
    }
    Ok(())
}
