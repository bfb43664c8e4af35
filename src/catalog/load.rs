use anyhow::{Context as _, bail};
use pathdiff::diff_paths;
use rayon::prelude::*;
use resvg::usvg;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::builtin::BUILTIN_ICONS;
use super::record::{IconRecord, derive_display_name, normalize_symbol, parse_hex_color};
use crate::config::CatalogLimits;
use crate::util::human_readable_bytes;

/// Manifest looked up inside a catalog directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Where a catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    /// A folder with either a `manifest.json` or loose `*.svg` files.
    Directory(PathBuf),
    Manifest(PathBuf),
}

impl CatalogSource {
    /// Directories become `Directory` and `*.json` files `Manifest`. Anything else is not a catalog.
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.is_dir() {
            return Some(Self::Directory(path.to_path_buf()));
        }
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        is_json.then(|| Self::Manifest(path.to_path_buf()))
    }

    pub fn label(&self) -> String {
        match self {
            Self::Builtin => "Bundled icons".to_string(),
            Self::Directory(dir) => dir.display().to_string(),
            Self::Manifest(path) => path.display().to_string(),
        }
    }

    /// Directory the catalog's files live in.
    pub fn root_dir(&self) -> Option<&Path> {
        match self {
            Self::Builtin => None,
            Self::Directory(dir) => Some(dir),
            Self::Manifest(path) => path.parent(),
        }
    }
}

/// A fully loaded, immutable set of icons.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<IconRecord>,
    source: CatalogSource,
    generation: u64,
}

impl Catalog {
    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    pub const fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Distinguishes successive loads; filtered views key their caches on it.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn len(&self) -> usize {
        self.records.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&IconRecord> {
        self.records.iter().find(|record| record.name == name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestEntry {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
    file: PathBuf,
    #[serde(default)]
    color: Option<String>,
}

enum IconLocation {
    File { absolute: PathBuf, relative: PathBuf },
    Embedded { path: PathBuf, markup: &'static str },
}

struct IconSpec {
    name: String,
    display_name: String,
    symbol: Option<String>,
    color: Option<[u8; 3]>,
    location: IconLocation,
}

/// Load every icon described by `source`.
///
/// Fails as a whole if any icon is missing, oversized, or not valid SVG.
pub fn load_catalog(
    source: &CatalogSource,
    limits: &CatalogLimits,
    generation: u64,
) -> anyhow::Result<Catalog> {
    let limits = limits.sanitized();
    let specs = match source {
        CatalogSource::Builtin => builtin_specs(),
        CatalogSource::Directory(dir) => {
            let manifest = dir.join(MANIFEST_FILE_NAME);
            if manifest.is_file() {
                manifest_specs(&manifest)?
            } else {
                scan_directory(dir)?
            }
        }
        CatalogSource::Manifest(path) => manifest_specs(path)?,
    };
    let specs = dedupe_names(specs);
    if specs.len() > limits.max_icons {
        bail!(
            "Catalog has {} icons, over the configured limit ({})",
            specs.len(),
            limits.max_icons
        );
    }

    let records = specs
        .into_par_iter()
        .map(|spec| build_record(spec, &limits))
        .collect::<anyhow::Result<Vec<_>>>()?;
    log::info!(
        "Loaded {} icons from {} (generation {generation})",
        records.len(),
        source.label()
    );
    Ok(Catalog {
        records,
        source: source.clone(),
        generation,
    })
}

fn builtin_specs() -> Vec<IconSpec> {
    BUILTIN_ICONS
        .iter()
        .map(|icon| IconSpec {
            name: icon.name.to_string(),
            display_name: icon.display_name.to_string(),
            symbol: normalize_symbol(Some(icon.symbol)),
            color: parse_hex_color(icon.color),
            location: IconLocation::Embedded {
                path: Path::new("builtin").join(icon.file_name),
                markup: icon.markup,
            },
        })
        .collect()
}

fn manifest_specs(manifest_path: &Path) -> anyhow::Result<Vec<IconSpec>> {
    let text = fs::read_to_string(manifest_path)
        .with_context(|| format!("Failed to read manifest {}", manifest_path.display()))?;
    let entries: Vec<ManifestEntry> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse manifest {}", manifest_path.display()))?;
    let root = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let raw_name = entry.name.trim();
            let name = raw_name.to_lowercase();
            if name.is_empty() {
                bail!("Manifest entry #{} has an empty name", idx + 1);
            }
            let color = entry.color.as_deref().and_then(|raw| {
                let parsed = parse_hex_color(raw);
                if parsed.is_none() {
                    log::warn!("Ignoring invalid color {raw:?} for icon {name}");
                }
                parsed
            });
            let display_name = entry
                .display_name
                .map(|label| label.trim().to_string())
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| derive_display_name(raw_name));
            let absolute = root.join(&entry.file);
            let relative = diff_paths(&absolute, root).unwrap_or_else(|| entry.file.clone());
            Ok(IconSpec {
                display_name,
                symbol: normalize_symbol(entry.symbol.as_deref()),
                color,
                location: IconLocation::File { absolute, relative },
                name,
            })
        })
        .collect()
}

fn scan_directory(dir: &Path) -> anyhow::Result<Vec<IconSpec>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read folder {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files
        .into_iter()
        .filter_map(|absolute| {
            let Some(stem) = absolute.file_stem().and_then(|s| s.to_str()).map(str::to_string)
            else {
                log::warn!("Skipping {}: file name is not valid UTF-8", absolute.display());
                return None;
            };
            let Some(relative) = diff_paths(&absolute, dir) else {
                log::warn!(
                    "Skipping {}: not reachable from {}",
                    absolute.display(),
                    dir.display()
                );
                return None;
            };
            Some(IconSpec {
                name: stem.to_lowercase(),
                display_name: derive_display_name(&stem),
                symbol: None,
                color: None,
                location: IconLocation::File { absolute, relative },
            })
        })
        .collect())
}

fn dedupe_names(specs: Vec<IconSpec>) -> Vec<IconSpec> {
    let mut seen = HashSet::with_capacity(specs.len());
    specs
        .into_iter()
        .filter(|spec| {
            let fresh = seen.insert(spec.name.clone());
            if !fresh {
                log::warn!("Skipping duplicate icon name {:?}", spec.name);
            }
            fresh
        })
        .collect()
}

fn build_record(spec: IconSpec, limits: &CatalogLimits) -> anyhow::Result<IconRecord> {
    let (path, markup): (PathBuf, Arc<str>) = match spec.location {
        IconLocation::Embedded { path, markup } => (path, Arc::from(markup)),
        IconLocation::File { absolute, relative } => {
            let markup = read_icon_file(&absolute, limits)?;
            (relative, Arc::from(markup))
        }
    };
    let intrinsic_size =
        parse_svg_size(&markup).with_context(|| format!("Invalid SVG in {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| format!("{}.svg", spec.name), str::to_string);
    Ok(IconRecord {
        name: spec.name,
        display_name: spec.display_name,
        symbol: spec.symbol,
        path,
        file_name,
        markup,
        color: spec.color,
        intrinsic_size,
    })
}

fn read_icon_file(path: &Path, limits: &CatalogLimits) -> anyhow::Result<String> {
    let meta =
        fs::metadata(path).with_context(|| format!("Icon file missing: {}", path.display()))?;
    if meta.len() > limits.max_icon_bytes {
        bail!(
            "{} is {}, over the per-icon limit ({})",
            path.display(),
            human_readable_bytes(meta.len()),
            human_readable_bytes(limits.max_icon_bytes)
        );
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parse SVG markup and return its declared size.
pub fn parse_svg_size(markup: &str) -> anyhow::Result<[f32; 2]> {
    let tree = usvg::Tree::from_str(markup, &usvg::Options::default())?;
    let size = tree.size();
    Ok([size.width(), size.height()])
}
