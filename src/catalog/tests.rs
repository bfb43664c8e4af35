use super::*;
use crate::config::CatalogLimits;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"><rect width="16" height="16" fill="#000"/></svg>"##;

fn unique_temp_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!("coinglyph_{label}_{nanos}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn record(name: &str, display_name: &str, symbol: Option<&str>) -> IconRecord {
    IconRecord {
        name: name.to_string(),
        display_name: display_name.to_string(),
        symbol: symbol.map(str::to_string),
        path: PathBuf::from(format!("{name}.svg")),
        file_name: format!("{name}.svg"),
        markup: Arc::from(SQUARE_SVG),
        color: None,
        intrinsic_size: [16.0, 16.0],
    }
}

fn sample_records() -> Vec<IconRecord> {
    vec![
        record("bitcoin", "Bitcoin", Some("BTC")),
        record("ethereum", "Ethereum", Some("ETH")),
        record("bitcoin-cash", "Bitcoin Cash", Some("BCH")),
        record("tether", "Tether", None),
        record("dogecoin", "Dogecoin", Some("DOGE")),
        record("zcash", "Zcash", Some("ZEC")),
    ]
}

fn names(records: &[&IconRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

fn write_manifest(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join(MANIFEST_FILE_NAME);
    fs::write(&path, json).expect("write manifest");
    path
}

const QUERIES: &[&str] = &[
    "", "   ", "b", "btc", "BTC", " coin ", "cash", "eth", "e", "zzz", "doge", "Tether", "h",
];

#[test]
fn ticker_query_selects_only_bitcoin() {
    let records = vec![
        record("bitcoin", "Bitcoin", Some("BTC")),
        record("ethereum", "Ethereum", Some("ETH")),
    ];
    let result = filter_icons(&records, "btc");
    assert_eq!(names(&result), vec!["bitcoin"]);
}

#[test]
fn unmatched_query_gives_empty_view() {
    let records = vec![
        record("bitcoin", "Bitcoin", Some("BTC")),
        record("ethereum", "Ethereum", Some("ETH")),
    ];
    assert!(filter_icons(&records, "ripple").is_empty());
}

#[test]
fn blank_query_returns_everything() {
    let records = sample_records();
    for query in ["", "   ", "\t\n"] {
        let result = filter_icons(&records, query);
        assert_eq!(result.len(), records.len());
        assert!(result.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
    }
}

#[test]
fn results_preserve_catalog_order() {
    let records = sample_records();
    for query in QUERIES {
        let result = filter_icons(&records, query);
        let positions: Vec<usize> = result
            .iter()
            .map(|hit| {
                records
                    .iter()
                    .position(|r| std::ptr::eq(r, *hit))
                    .expect("result comes from input")
            })
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "order broken for {query:?}"
        );
    }
}

#[test]
fn every_hit_matches_some_field() {
    let records = sample_records();
    for query in QUERIES {
        let needle = query.trim().to_lowercase();
        for hit in filter_icons(&records, query) {
            let fields = [
                Some(hit.name.as_str()),
                Some(hit.display_name.as_str()),
                hit.symbol.as_deref(),
            ];
            assert!(
                fields
                    .iter()
                    .flatten()
                    .any(|f| f.to_lowercase().contains(&needle)),
                "{} should not match {query:?}",
                hit.name
            );
        }
    }
}

#[test]
fn every_match_is_kept() {
    let records = sample_records();
    let result = filter_icons(&records, "coin");
    assert_eq!(names(&result), vec!["bitcoin", "bitcoin-cash", "dogecoin"]);
}

#[test]
fn filtering_is_idempotent() {
    let records = sample_records();
    for query in QUERIES {
        let once: Vec<IconRecord> = filter_icons(&records, query)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_icons(&once, query);
        let once_names: Vec<String> = once.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names(&twice), once_names);
    }
}

#[test]
fn missing_symbol_only_skips_that_field() {
    let records = sample_records();
    assert_eq!(names(&filter_icons(&records, "tether")), vec!["tether"]);
    assert!(filter_icons(&records, "usdt").is_empty());
}

#[test]
fn matching_is_case_insensitive_for_unicode() {
    let records = vec![record("eos", "ÉOS Network", Some("EOS"))];
    assert_eq!(filter_icons(&records, "éos").len(), 1);
    assert_eq!(filter_icons(&records, "NETWORK").len(), 1);
}

#[test]
fn greek_sigma_fragment_matches_inside_word() {
    let records = vec![record("osa", "ΟΣΑ", None)];
    assert_eq!(filter_icons(&records, "ΟΣ").len(), 1);
    assert_eq!(filter_icons(&records, "οσα").len(), 1);
    assert_eq!(normalize_query(" ΟΣ "), "οσ");
}

#[test]
fn normalize_query_trims_and_folds() {
    assert_eq!(normalize_query("  BtC "), "btc");
    assert!(record_matches(&record("x", "X", None), ""));
}

#[test]
fn view_recomputes_only_on_change() {
    let records = sample_records();
    let mut view = FilteredView::default();
    assert!(view.refresh(&records, 1, "coin"));
    assert_eq!(view.indices(), &[0, 2, 4]);
    assert!(!view.refresh(&records, 1, " COIN "));
    assert!(view.refresh(&records, 2, "coin"));
    assert!(view.refresh(&records, 2, ""));
    assert_eq!(view.len(), records.len());
}

#[test]
fn narrowing_query_matches_full_scan() {
    let records = sample_records();
    let mut view = FilteredView::default();
    for query in ["b", "bi", "bit", "bitcoin", "bitcoin ", "bitcoin c"] {
        view.refresh(&records, 7, query);
        let expected: Vec<String> = names(&filter_icons(&records, query));
        let actual: Vec<String> = view.iter(&records).map(|(_, r)| r.name.clone()).collect();
        assert_eq!(actual, expected, "query {query:?}");
    }
}

#[test]
fn widening_query_rescans() {
    let records = sample_records();
    let mut view = FilteredView::default();
    view.refresh(&records, 1, "btc");
    assert_eq!(view.len(), 1);
    view.refresh(&records, 1, "b");
    let hits: Vec<&IconRecord> = view.iter(&records).map(|(_, r)| r).collect();
    assert_eq!(names(&hits), names(&filter_icons(&records, "b")));
}

#[test]
fn invalidated_view_is_empty_until_refreshed() {
    let records = sample_records();
    let mut view = FilteredView::default();
    view.refresh(&records, 1, "");
    view.invalidate();
    assert!(view.is_empty());
    assert!(view.refresh(&records, 1, ""));
    assert!(!view.is_empty());
}

#[test]
fn builtin_catalog_loads() {
    let catalog = load_catalog(&CatalogSource::Builtin, &CatalogLimits::default(), 3)
        .expect("load builtin");
    assert_eq!(catalog.generation(), 3);
    assert!(!catalog.is_empty());
    let bitcoin = catalog.find("bitcoin").expect("bitcoin bundled");
    assert_eq!(bitcoin.symbol.as_deref(), Some("BTC"));
    assert_eq!(bitcoin.file_name, "btc.svg");
    assert_eq!(bitcoin.intrinsic_size, [32.0, 32.0]);
    assert_eq!(bitcoin.color, Some([0xF7, 0x93, 0x1A]));
}

#[test]
fn manifest_keeps_order_and_fills_defaults() {
    let dir = unique_temp_dir("manifest");
    fs::write(dir.join("z.svg"), SQUARE_SVG).expect("write icon");
    fs::write(dir.join("a.svg"), SQUARE_SVG).expect("write icon");
    write_manifest(
        &dir,
        r##"[
            { "name": "zcash", "symbol": " zec ", "file": "z.svg", "color": "#F4B728" },
            { "name": "arweave", "displayName": "Arweave", "symbol": "", "file": "a.svg", "color": "oops" }
        ]"##,
    );

    let catalog = load_catalog(
        &CatalogSource::Directory(dir.clone()),
        &CatalogLimits::default(),
        1,
    )
    .expect("load manifest");
    let records = catalog.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "zcash");
    assert_eq!(records[0].display_name, "Zcash");
    assert_eq!(records[0].symbol.as_deref(), Some("ZEC"));
    assert_eq!(records[0].path, PathBuf::from("z.svg"));
    assert_eq!(records[0].color, Some([0xF4, 0xB7, 0x28]));
    assert_eq!(records[1].symbol, None);
    assert_eq!(records[1].color, None);
}

#[test]
fn manifest_file_source_resolves_relative_paths() {
    let dir = unique_temp_dir("manifest_file");
    fs::create_dir_all(dir.join("svg")).expect("create subdir");
    fs::write(dir.join("svg").join("btc.svg"), SQUARE_SVG).expect("write icon");
    let manifest = dir.join("coins.json");
    fs::write(
        &manifest,
        r#"[{ "name": "bitcoin", "symbol": "BTC", "file": "svg/btc.svg" }]"#,
    )
    .expect("write manifest");

    let catalog = load_catalog(
        &CatalogSource::Manifest(manifest),
        &CatalogLimits::default(),
        1,
    )
    .expect("load manifest");
    let bitcoin = &catalog.records()[0];
    assert_eq!(bitcoin.path, Path::new("svg").join("btc.svg"));
    assert_eq!(bitcoin.file_name, "btc.svg");
}

#[test]
fn duplicate_names_keep_first() {
    let dir = unique_temp_dir("dupes");
    fs::write(dir.join("one.svg"), SQUARE_SVG).expect("write icon");
    fs::write(dir.join("two.svg"), SQUARE_SVG).expect("write icon");
    write_manifest(
        &dir,
        r#"[
            { "name": "coin", "displayName": "First", "file": "one.svg" },
            { "name": "coin", "displayName": "Second", "file": "two.svg" }
        ]"#,
    );
    let catalog = load_catalog(&CatalogSource::Directory(dir), &CatalogLimits::default(), 1)
        .expect("load manifest");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].display_name, "First");
}

#[test]
fn manifest_names_are_lowercased_before_dedupe() {
    let dir = unique_temp_dir("dupes_case");
    fs::write(dir.join("one.svg"), SQUARE_SVG).expect("write icon");
    fs::write(dir.join("two.svg"), SQUARE_SVG).expect("write icon");
    write_manifest(
        &dir,
        r#"[
            { "name": " BitTorrent ", "file": "one.svg" },
            { "name": "bittorrent", "file": "two.svg" }
        ]"#,
    );
    let catalog = load_catalog(&CatalogSource::Directory(dir), &CatalogLimits::default(), 1)
        .expect("load manifest");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].name, "bittorrent");
    assert_eq!(catalog.records()[0].display_name, "BitTorrent");
    assert_eq!(catalog.records()[0].file_name, "one.svg");
}

#[test]
fn directory_scan_is_sorted_and_labelled() {
    let dir = unique_temp_dir("scan");
    fs::write(dir.join("shiba-inu.svg"), SQUARE_SVG).expect("write icon");
    fs::write(dir.join("Aave.SVG"), SQUARE_SVG).expect("write icon");
    fs::write(dir.join("notes.txt"), "ignored").expect("write text");

    let catalog = load_catalog(
        &CatalogSource::Directory(dir.clone()),
        &CatalogLimits::default(),
        1,
    )
    .expect("scan folder");
    let records = catalog.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "aave");
    assert_eq!(records[0].file_name, "Aave.SVG");
    assert_eq!(records[1].name, "shiba-inu");
    assert_eq!(records[1].display_name, "Shiba Inu");
    assert!(records.iter().all(|r| r.symbol.is_none()));
    assert_eq!(catalog.source().root_dir(), Some(dir.as_path()));
}

#[cfg(target_os = "linux")]
#[test]
fn directory_scan_skips_non_utf8_file_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = unique_temp_dir("scan_non_utf8");
    fs::write(dir.join("good.svg"), SQUARE_SVG).expect("write icon");
    fs::write(dir.join(OsStr::from_bytes(b"bad\xff.svg")), SQUARE_SVG).expect("write icon");

    let catalog = load_catalog(&CatalogSource::Directory(dir), &CatalogLimits::default(), 1)
        .expect("scan folder");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].name, "good");
}

#[test]
fn only_folders_and_json_files_are_catalog_sources() {
    let dir = unique_temp_dir("sources");
    let stray_svg = dir.join("btc.svg");
    let stray_png = dir.join("btc.png");
    fs::write(&stray_svg, SQUARE_SVG).expect("write icon");
    fs::write(&stray_png, [0u8; 4]).expect("write png");

    assert_eq!(
        CatalogSource::from_path(&dir),
        Some(CatalogSource::Directory(dir.clone()))
    );
    let manifest = dir.join("Coins.JSON");
    assert_eq!(
        CatalogSource::from_path(&manifest),
        Some(CatalogSource::Manifest(manifest.clone()))
    );
    assert_eq!(CatalogSource::from_path(&stray_svg), None);
    assert_eq!(CatalogSource::from_path(&stray_png), None);
}

#[test]
fn oversized_icon_fails_whole_load() {
    let dir = unique_temp_dir("oversize");
    fs::write(dir.join("ok.svg"), SQUARE_SVG).expect("write icon");
    let padding = " ".repeat(4096);
    fs::write(dir.join("big.svg"), format!("{SQUARE_SVG}{padding}")).expect("write icon");
    let limits = CatalogLimits {
        max_icon_bytes: 1024,
        max_icons: 10,
    };
    let err = load_catalog(&CatalogSource::Directory(dir), &limits, 1)
        .expect_err("oversized icon");
    assert!(format!("{err:#}").contains("per-icon limit"));
}

#[test]
fn too_many_icons_fail() {
    let dir = unique_temp_dir("count");
    for idx in 0..3 {
        fs::write(dir.join(format!("icon{idx}.svg")), SQUARE_SVG).expect("write icon");
    }
    let limits = CatalogLimits {
        max_icon_bytes: 4096,
        max_icons: 2,
    };
    let err = load_catalog(&CatalogSource::Directory(dir), &limits, 1).expect_err("too many");
    assert!(err.to_string().contains("limit"));
}

#[test]
fn invalid_svg_fails_load() {
    let dir = unique_temp_dir("invalid");
    fs::write(dir.join("broken.svg"), "definitely not svg").expect("write icon");
    let err = load_catalog(&CatalogSource::Directory(dir), &CatalogLimits::default(), 1)
        .expect_err("invalid svg");
    assert!(format!("{err:#}").contains("broken.svg"));
}

#[test]
fn missing_icon_file_fails_load() {
    let dir = unique_temp_dir("missing");
    write_manifest(&dir, r#"[{ "name": "ghost", "file": "ghost.svg" }]"#);
    let err = load_catalog(&CatalogSource::Directory(dir), &CatalogLimits::default(), 1)
        .expect_err("missing file");
    assert!(format!("{err:#}").contains("ghost.svg"));
}

#[test]
fn malformed_manifest_fails_load() {
    let dir = unique_temp_dir("malformed");
    write_manifest(&dir, r#"{ "name": "not an array" }"#);
    let err = load_catalog(&CatalogSource::Directory(dir), &CatalogLimits::default(), 1)
        .expect_err("bad manifest");
    assert!(err.to_string().contains("Failed to parse manifest"));
}

#[test]
fn empty_manifest_name_is_rejected() {
    let dir = unique_temp_dir("empty_name");
    fs::write(dir.join("a.svg"), SQUARE_SVG).expect("write icon");
    write_manifest(&dir, r#"[{ "name": "  ", "file": "a.svg" }]"#);
    let err = load_catalog(&CatalogSource::Directory(dir), &CatalogLimits::default(), 1)
        .expect_err("empty name");
    assert!(err.to_string().contains("empty name"));
}

#[test]
fn state_accessors() {
    let loading = CatalogState::Loading;
    assert!(loading.is_loading());
    assert!(loading.records().is_empty());
    assert_eq!(loading.error_message(), None);

    let failed = CatalogState::Failed("no such folder".to_string());
    assert!(!failed.is_loading());
    assert!(failed.records().is_empty());
    assert_eq!(failed.error_message(), Some("no such folder"));

    let catalog = load_catalog(&CatalogSource::Builtin, &CatalogLimits::default(), 5)
        .expect("load builtin");
    let ready = CatalogState::Ready(catalog);
    assert_eq!(ready.generation(), 5);
    assert!(!ready.records().is_empty());
    assert!(ready.catalog().is_some());
}
