use anyhow::Context;
use missiondeck_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let project_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "deck".to_string());

    println!("Initializing deck in: {}", root.display());

    let config_path = paths::config_path(root);
    let config = if config_path.exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
        Config::load(root).context("failed to read deck.yaml")?
    } else {
        let config = Config::new(&project_name);
        config.save(root).context("failed to write deck.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
        config
    };

    let packs = paths::packs_dir(root, &config.packs_dir);
    if packs.is_dir() {
        println!("  exists:  {}/", config.packs_dir);
    } else {
        io::ensure_dir(&packs)
            .with_context(|| format!("failed to create {}", packs.display()))?;
        println!("  created: {}/", config.packs_dir);
    }

    for warning in config.validate() {
        println!("  warning: {}", warning.message);
    }

    println!("\nDeck initialized.");
    println!("Next: deck add --from <batch.json>");

    Ok(())
}
