use anyhow::Context;
use missiondeck_core::{config::Config, store::PackStore};
use std::path::Path;

pub fn run(root: &Path, raw: bool, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root)?;
    let store = PackStore::open(root, &config);
    let doc = store.latest()?.context("no packs stored")?;
    crate::cmd::show::print_document(&doc, raw, json)
}
