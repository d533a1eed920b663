//! Locomotion tuning loaded from data/config/movement.toml.

use crate::data_root;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MovementCfg {
    pub walk_speed: Option<f32>,
    /// Absent means the character has no sprint capability.
    pub run_speed: Option<f32>,
}

impl Default for MovementCfg {
    fn default() -> Self {
        Self {
            walk_speed: Some(3.0),
            run_speed: None,
        }
    }
}

pub fn load_default() -> Result<MovementCfg> {
    let path = data_root().join("config/movement.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<MovementCfg>(&txt).context("parse movement TOML")?
    } else {
        MovementCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(v) = std::env::var("WALK_SPEED") {
        cfg.walk_speed = v.parse().ok();
    }
    if let Ok(v) = std::env::var("RUN_SPEED") {
        cfg.run_speed = v.parse().ok();
    }
    Ok(cfg)
}
