use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub initial_domain: String,
    pub initial_time: i32,
    pub show_links: bool,
    pub show_particles: bool,
    pub particles_per_link: usize,
    pub particle_speed: f32,
    pub link_distance: f32,
    pub charge_strength: f32,
    pub velocity_decay: f32,
    pub alpha_min: f32,
    pub alpha_decay: f32,
    /// Extra domains as a JSON array, merged after the built-in ones.
    pub datasets_path: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_domain: "software".to_string(),
            initial_time: 100,
            show_links: true,
            show_particles: true,
            particles_per_link: 2,
            particle_speed: 0.006,
            link_distance: 30.0,
            charge_strength: -30.0,
            velocity_decay: 0.4,
            alpha_min: 0.001,
            alpha_decay: 1.0 - 0.001f32.powf(1.0 / 300.0),
            datasets_path: None,
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "holomodel")?;
    Some(proj.config_dir().join("viewer.toml"))
}

pub fn load_or_default() -> ViewerConfig {
    let Some(path) = config_file_path() else {
        tracing::debug!("no config directory available, using defaults");
        return ViewerConfig::default();
    };
    load_or_default_from_path(&path)
}

fn load_or_default_from_path(path: &Path) -> ViewerConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return ViewerConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(cfg) => {
            tracing::info!(path = %path.display(), "loaded viewer config");
            cfg
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid viewer config, using defaults");
            ViewerConfig::default()
        }
    }
}

pub fn save(cfg: &ViewerConfig) -> anyhow::Result<PathBuf> {
    let Some(path) = config_file_path() else {
        return Err(anyhow::anyhow!("no config directory available"));
    };
    save_to_path(cfg, &path)?;
    Ok(path)
}

fn save_to_path(cfg: &ViewerConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let data = toml::to_string_pretty(cfg).context("failed to serialize viewer config")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write viewer config {}", path.display()))?;
    Ok(())
}
