use super::toast::ToastKind;
use super::ui_state::{NativeDialog, SaveRequest};
use super::CoinglyphApp;
use anyhow::{Context as _, bail};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const STAGING_ATTEMPTS: u32 = 16;

impl CoinglyphApp {
    /// Open a save dialog pre-filled with the icon's file name.
    pub(crate) fn start_save_icon(&mut self, index: usize) {
        if self.active_dialog.is_some() {
            return;
        }
        let Some(record) = self.catalog.records().get(index) else {
            return;
        };
        let request = SaveRequest::from_record(record);
        let mut dialog = Self::make_save_dialog(
            &format!("Save {}", request.display_name),
            &request.file_name,
            &["svg"],
            self.last_save_dir.as_deref(),
        );
        dialog.save_file();
        self.active_dialog = Some(NativeDialog::SaveIcon { dialog, request });
    }

    pub(crate) fn finish_save_icon(&mut self, path: &Path, request: &SaveRequest) {
        match save_markup(path, &request.markup) {
            Ok(()) => {
                log::info!("Saved {} to {}", request.display_name, path.display());
                self.remember_save_dir_from_path(path);
                self.notify(
                    ToastKind::Info,
                    format!("Saved {} to {}", request.file_name, path.display()),
                );
            }
            Err(err) => {
                log::error!("Saving {} failed: {err:#}", request.display_name);
                self.notify(ToastKind::Error, format!("Save failed: {err:#}"));
            }
        }
    }

    fn remember_save_dir_from_path(&mut self, path: &Path) {
        let dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        self.last_save_dir = Some(dir);
    }
}

/// Write SVG markup to `path`, replacing any existing file atomically.
///
/// The markup goes to a hidden sibling first and is renamed over the target, so an
/// interrupted save leaves either the old icon or the new one.
pub fn save_markup(path: &Path, markup: &str) -> anyhow::Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("{} does not name a file", path.display()))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let (staging_path, staging) = create_staging_file(dir, file_name)?;
    let saved = fill_staging_file(staging, markup)
        .with_context(|| format!("Failed to write {}", staging_path.display()))
        .and_then(|()| {
            // std's rename replaces an existing target on every platform.
            fs::rename(&staging_path, path)
                .with_context(|| format!("Failed to replace {}", path.display()))
        });
    if saved.is_err() {
        let _ = fs::remove_file(&staging_path);
    }
    saved
}

fn staging_name(file_name: &str, stamp: u128, attempt: u32) -> String {
    format!(".{file_name}.{stamp}.{attempt}.tmp")
}

fn create_staging_file(dir: &Path, file_name: &OsStr) -> anyhow::Result<(PathBuf, File)> {
    let file_name = file_name.to_string_lossy();
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    for attempt in 0..STAGING_ATTEMPTS {
        let candidate = dir.join(staging_name(&file_name, stamp, attempt));
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((candidate, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to create temp file {}", candidate.display())
                });
            }
        }
    }
    bail!("No free temp file name for {file_name} in {}", dir.display())
}

/// Consumes the handle so it is closed before the rename.
fn fill_staging_file(mut file: File, markup: &str) -> io::Result<()> {
    file.write_all(markup.as_bytes())?;
    file.sync_all()
}
