pub fn human_readable_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit_idx = 0;
    while value >= 1024.0 && unit_idx < UNITS.len() - 1 {
        value /= 1024.0;
        unit_idx += 1;
    }
    if unit_idx == 0 {
        format!("{bytes} {}", UNITS[unit_idx])
    } else {
        format!("{value:.2} {}", UNITS[unit_idx])
    }
}

pub fn usize_to_u64(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// `32×32`, dropping fractional parts that round away.
pub fn format_dimensions(size: [f32; 2]) -> String {
    let fmt = |v: f32| {
        if (v - v.round()).abs() < 0.01 {
            format!("{v:.0}")
        } else {
            format!("{v:.2}")
        }
    };
    format!("{}×{}", fmt(size[0]), fmt(size[1]))
}
