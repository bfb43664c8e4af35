use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "coinglyph.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub tile_size: f32,
    pub spacing: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            tile_size: 96.0,
            spacing: 8.0,
        }
    }
}

impl GridStyle {
    pub const fn tile_size(&self) -> f32 {
        self.tile_size.clamp(48.0, 256.0)
    }

    pub const fn spacing(&self) -> f32 {
        self.spacing.clamp(0.0, 64.0)
    }

    /// Icon edge inside a tile, leaving room for the frame.
    pub fn icon_size(&self) -> f32 {
        (self.tile_size() * 0.5).round()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreviewStyle {
    pub size: f32,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self { size: 256.0 }
    }
}

impl PreviewStyle {
    pub const fn size(&self) -> f32 {
        self.size.clamp(64.0, 1024.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_secs: f32,
    pub max_visible: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_secs: 2.5,
            max_visible: 4,
        }
    }
}

impl ToastConfig {
    pub fn duration(&self) -> std::time::Duration {
        let secs = if self.duration_secs.is_finite() {
            self.duration_secs.clamp(0.5, 30.0)
        } else {
            Self::default().duration_secs
        };
        std::time::Duration::from_secs_f32(secs)
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible.clamp(1, 16)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogLimits {
    pub max_icon_bytes: u64,
    pub max_icons: usize,
}

impl Default for CatalogLimits {
    fn default() -> Self {
        Self {
            max_icon_bytes: 1024 * 1024, // 1 MiB
            max_icons: 20_000,
        }
    }
}

impl CatalogLimits {
    pub fn sanitized(&self) -> Self {
        Self {
            max_icon_bytes: self.max_icon_bytes.clamp(1024, 64 * 1024 * 1024), // 1 KiB .. 64 MiB
            max_icons: self.max_icons.clamp(1, 1_000_000),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Folder or manifest opened at startup when no path is given on the command line.
    pub catalog: Option<PathBuf>,
    pub grid: GridStyle,
    pub preview: PreviewStyle,
    pub toast: ToastConfig,
    pub limits: CatalogLimits,
}

impl AppConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match Self::parse(&contents) {
                    Ok(cfg) => {
                        log::info!("Using config {}", path.display());
                        return cfg;
                    }
                    Err(err) => {
                        log::warn!("Failed to parse config {}: {err}", path.display());
                    }
                }
            }
        }
        Self::default()
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn effective_limits(&self) -> CatalogLimits {
        self.limits.sanitized()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Coinglyph", "Coinglyph") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(base_dirs.config_dir().join("coinglyph").join(CONFIG_FILE_NAME));
        }

        paths
    }
}
