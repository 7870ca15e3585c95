use std::fs;
use std::path::Path;
use wifi_icons::batch::{generate, Selection};
use wifi_icons::config::Config;

fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_default_run_writes_all_icons() {
    let dir = tempfile::tempdir().unwrap();
    let summary = generate(dir.path(), &Config::default(), Selection::all()).unwrap();

    assert_eq!(summary.status_bar_count, 48);
    assert_eq!(summary.app_icon_count, 10);

    let files = png_files(dir.path());
    assert_eq!(files.len(), 58);
    for name in &files {
        let len = fs::metadata(dir.path().join(name)).unwrap().len();
        assert!(len > 0, "{} is empty", name);
    }

    for expected in [
        "wifi-connected-16.png",
        "wifi-disconnected-18@2x.png",
        "wifi-error-22@3x.png",
        "wifi-connecting-20@3x.png",
        "app-icon-16.png",
        "app-icon-512@2x.png",
    ] {
        assert!(files.iter().any(|f| f == expected), "missing {}", expected);
    }
    assert!(!files.iter().any(|f| f.starts_with("app-icon") && f.contains("@3x")));
}

#[test]
fn test_written_files_have_scaled_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), &Config::default(), Selection::from_flags(true, false)).unwrap();

    let img = image::open(dir.path().join("wifi-error-22@3x.png")).unwrap();
    assert_eq!((img.width(), img.height()), (66, 66));
    assert!(img.color().has_alpha());

    let img = image::open(dir.path().join("wifi-connected-16.png")).unwrap();
    assert_eq!((img.width(), img.height()), (16, 16));
}

#[test]
fn test_status_bar_only() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), &Config::default(), Selection::from_flags(true, false)).unwrap();

    let files = png_files(dir.path());
    assert_eq!(files.len(), 48);
    assert!(files.iter().all(|f| f.starts_with("wifi-")));
}

#[test]
fn test_app_icon_only() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), &Config::default(), Selection::from_flags(false, true)).unwrap();

    let files = png_files(dir.path());
    assert_eq!(files.len(), 10);
    assert!(files.iter().all(|f| f.starts_with("app-icon-")));
}

#[test]
fn test_both_flags_generate_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let summary =
        generate(dir.path(), &Config::default(), Selection::from_flags(true, true)).unwrap();

    assert!(summary.written.is_empty());
    assert!(png_files(dir.path()).is_empty());
}

#[test]
fn test_creates_nested_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("assets").join("icons");
    generate(&output, &Config::default(), Selection::from_flags(false, true)).unwrap();

    assert_eq!(png_files(&output).len(), 10);
}

#[test]
fn test_rerun_overwrites_identically() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let selection = Selection::from_flags(true, false);

    generate(dir.path(), &config, selection).unwrap();
    let first = fs::read(dir.path().join("wifi-error-20@2x.png")).unwrap();

    generate(dir.path(), &config, selection).unwrap();
    let second = fs::read(dir.path().join("wifi-error-20@2x.png")).unwrap();

    assert_eq!(first, second);
    assert_eq!(png_files(dir.path()).len(), 48);
}

#[test]
fn test_custom_config() {
    let yaml = concat!(
        "status_bar:\n",
        "  sizes: [40]\n",
        "  icons:\n",
        "    - name: net-down\n",
        "      status: error\n",
        "app_icon:\n",
        "  sizes: [64]\n",
    );
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    config.validate().unwrap();

    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), &config, Selection::all()).unwrap();

    // 40 is above the @3x threshold
    assert_eq!(
        png_files(dir.path()),
        ["app-icon-64.png", "app-icon-64@2x.png", "net-down-40.png", "net-down-40@2x.png"]
    );
}
