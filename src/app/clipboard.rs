use super::CoinglyphApp;
use super::toast::ToastKind;
use arboard::{Clipboard, Error as ClipboardError};
use std::sync::Arc;

impl CoinglyphApp {
    /// Copy an icon's SVG markup to the system clipboard and report the outcome.
    pub(crate) fn copy_icon_markup(&mut self, index: usize) {
        let Some(record) = self.catalog.records().get(index) else {
            return;
        };
        let label = record.display_name.clone();
        let markup = Arc::clone(&record.markup);
        match self.write_clipboard_text(&markup) {
            Ok(()) => {
                log::info!("Copied {} bytes of SVG for {label}", markup.len());
                self.notify(ToastKind::Info, format!("Copied {label} SVG"));
            }
            Err(err) => {
                log::warn!("{err}");
                self.notify(ToastKind::Error, err);
            }
        }
    }

    fn write_clipboard_text(&mut self, text: &str) -> Result<(), String> {
        // The handle stays alive: on X11/Wayland the selection is lost when its owner drops.
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().map_err(format_clipboard_error)?);
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            return Err("Copy failed: clipboard is unavailable.".to_string());
        };
        if let Err(err) = clipboard.set_text(text) {
            self.clipboard = None;
            return Err(format_clipboard_error(err));
        }
        Ok(())
    }
}

fn format_clipboard_error(err: ClipboardError) -> String {
    match err {
        ClipboardError::ClipboardNotSupported => {
            "Copy failed: clipboard access is not supported in this environment.".to_string()
        }
        ClipboardError::ClipboardOccupied => {
            "Copy failed: clipboard is busy; try again in a moment.".to_string()
        }
        ClipboardError::ConversionFailure => {
            "Copy failed: the SVG could not be converted for the clipboard.".to_string()
        }
        ClipboardError::Unknown { description } => {
            format!("Copy failed: {description}")
        }
        _ => {
            format!("Copy failed: {err}")
        }
    }
}
