use crate::conf::{encode, load_config};
use anyhow::Context;
use std::path::Path;

pub fn dump(path: Option<&Path>, json: bool, yaml: bool) -> anyhow::Result<()> {
    let loaded = load_config(path)?;
    let raw = encode(&loaded.config).context("failed to encode configuration")?;

    if json && !yaml {
        println!("{}", serde_json::to_string_pretty(&raw)?);
    } else {
        print!("{}", serde_yaml::to_string(&raw)?);
    }

    Ok(())
}
