//! Follow camera tuning loaded from data/config/follow_cam.toml.

use crate::data_root;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FollowCamFileCfg {
    /// World-space `[x, y, z]` offset from the target.
    pub offset: Option<[f32; 3]>,
    pub smooth_speed: Option<f32>,
    pub aim_height: Option<f32>,
}

impl Default for FollowCamFileCfg {
    fn default() -> Self {
        Self {
            offset: Some([0.0, 3.0, -5.0]),
            smooth_speed: Some(5.0),
            aim_height: Some(1.5),
        }
    }
}

pub fn load_default() -> Result<FollowCamFileCfg> {
    let path = data_root().join("config/follow_cam.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<FollowCamFileCfg>(&txt).context("parse follow_cam TOML")?
    } else {
        FollowCamFileCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(v) = std::env::var("FOLLOW_SMOOTH_SPEED") {
        cfg.smooth_speed = v.parse().ok();
    }
    if let Ok(v) = std::env::var("FOLLOW_AIM_HEIGHT") {
        cfg.aim_height = v.parse().ok();
    }
    Ok(cfg)
}
