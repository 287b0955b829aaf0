use crate::output::print_json;
use anyhow::Context;
use missiondeck_core::{config::Config, glossary, store::PackStore};
use std::path::Path;

pub fn run(root: &Path, date: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root)?;
    let store = PackStore::open(root, &config);
    let doc = store
        .load(date)?
        .with_context(|| format!("no pack for {date}"))?;

    if json {
        let entries: Vec<serde_json::Value> = doc
            .missions
            .iter()
            .map(|m| {
                let terms: Vec<&str> = glossary::terms_in(&m.description)
                    .iter()
                    .map(|t| t.term)
                    .collect();
                serde_json::json!({ "slug": m.slug, "terms": terms })
            })
            .collect();
        return print_json(&entries);
    }

    let mut any = false;
    for mission in &doc.missions {
        let terms = glossary::terms_in(&mission.description);
        if terms.is_empty() {
            continue;
        }
        any = true;
        println!("[{}] {}", mission.index, mission.title);
        for term in terms {
            println!("  {} — {}", term.term, term.definition);
        }
    }
    if !any {
        println!("No glossary terms found in {date}.");
    }
    Ok(())
}
