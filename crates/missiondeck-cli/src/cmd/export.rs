use anyhow::Context;
use missiondeck_core::{config::Config, slug, store::PackStore};
use std::path::Path;

pub fn run(root: &Path, mission_slug: &str) -> anyhow::Result<()> {
    let config = Config::load(root)?;
    let store = PackStore::open(root, &config);

    let date = slug::slug_date(mission_slug).with_context(|| {
        format!("invalid mission slug '{mission_slug}' (expected YYYY-MM-DD-<title>)")
    })?;
    let doc = store
        .load(date)?
        .with_context(|| format!("no pack for {date}"))?;
    let mission = doc
        .find_by_slug(mission_slug)
        .with_context(|| format!("no mission '{mission_slug}' in the {date} pack"))?;
    let markdown = doc.mission_markdown(mission).with_context(|| {
        format!("mission numbering in {date} does not match its headers (run: deck validate {date})")
    })?;

    println!("{markdown}");
    Ok(())
}
