//! Animation parameter mapping config loaded from data/config/anim.toml.

use crate::data_root;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AnimMapCfg {
    /// `"raw_axis"` or `"smoothed_local"`.
    pub profile: Option<String>,
    pub gait_flags: Option<bool>,
    pub movement_threshold: Option<f32>,
    pub debug_parameters: Option<bool>,
}

impl Default for AnimMapCfg {
    fn default() -> Self {
        Self {
            profile: Some("smoothed_local".to_string()),
            gait_flags: Some(false),
            movement_threshold: Some(0.01),
            debug_parameters: Some(false),
        }
    }
}

pub fn load_default() -> Result<AnimMapCfg> {
    let path = data_root().join("config/anim.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<AnimMapCfg>(&txt).context("parse anim TOML")?
    } else {
        AnimMapCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(v) = std::env::var("ANIM_PROFILE") {
        cfg.profile = Some(v);
    }
    if let Ok(v) = std::env::var("ANIM_GAIT_FLAGS") {
        cfg.gait_flags = v.parse().ok();
    }
    if let Ok(v) = std::env::var("ANIM_THRESHOLD") {
        cfg.movement_threshold = v.parse().ok();
    }
    if let Ok(v) = std::env::var("ANIM_DEBUG") {
        cfg.debug_parameters = v.parse().ok();
    }
    Ok(cfg)
}
