use crate::catalog::IconRecord;
use egui::Color32;
use egui::load::Bytes;
use std::borrow::Cow;

/// Image URI for an icon. The generation keeps textures of replaced catalogs apart.
pub fn icon_uri(generation: u64, record: &IconRecord) -> String {
    format!("bytes://coinglyph/{generation}/{}.svg", record.name)
}

/// SVG image widget backed by the record's shared markup.
pub fn icon_image(generation: u64, record: &IconRecord) -> egui::Image<'static> {
    egui::Image::from_bytes(
        icon_uri(generation, record),
        Bytes::Shared(record.markup_bytes()),
    )
}

pub fn accent_color(record: &IconRecord) -> Option<Color32> {
    record.color.map(|[r, g, b]| Color32::from_rgb(r, g, b))
}

/// Shorten `text` to at most `max_chars` characters, ending with `…` when cut.
pub fn elide(text: &str, max_chars: usize) -> Cow<'_, str> {
    if max_chars == 0 {
        return Cow::Borrowed("");
    }
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    Cow::Owned(out)
}
