use crate::output::{print_json, print_table};
use missiondeck_core::{config::Config, store::PackStore};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root)?;
    let store = PackStore::open(root, &config);
    let metas = store.list()?;

    if json {
        return print_json(&metas);
    }

    if metas.is_empty() {
        println!("No packs stored. Run: deck add --from <batch.json>");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = metas
        .iter()
        .map(|m| {
            vec![
                m.date.clone(),
                m.mission_count.to_string(),
                m.titles.join(", "),
            ]
        })
        .collect();
    print_table(&["DATE", "MISSIONS", "TITLES"], rows);
    Ok(())
}
