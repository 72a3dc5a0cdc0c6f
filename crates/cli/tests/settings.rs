use figtext_cli::settings::{resolve, Overrides};
use figtext_core::config;
use figtext_core::{FigTextError, FigTextExtractor, FigTextMode};
use std::fs;

#[test]
fn config_file_drives_extraction() {
    let temp = tempfile::tempdir().unwrap();
    let cfg_path = temp.path().join("figtext.toml");
    fs::write(
        &cfg_path,
        r#"
        [text]
        paragraph_boundary = "\\par;"
        num_words = 1
        mode = "words"

        [output]
        json = true
        "#,
    )
    .unwrap();

    let cfg = config::load(Some(cfg_path.to_str().unwrap())).unwrap();
    assert!(cfg.output.json);
    assert_eq!(cfg.scan.include, vec!["*.txt".to_string()]);

    let run = resolve(&cfg, &Overrides::default()).unwrap();
    assert_eq!(run.mode, FigTextMode::Words);
    let extractor = FigTextExtractor::new(run.options);
    let text = r"Table 1. Counts\par;nothing\par;see fig 2 here";
    let items: Vec<String> = extractor
        .extract_all(text, run.mode)
        .iter()
        .map(|t| t.to_string())
        .collect();
    assert_eq!(items, vec!["Table 1. Counts", "see fig 2"]);
}

#[test]
fn negative_width_in_config_fails_fast() {
    let temp = tempfile::tempdir().unwrap();
    let cfg_path = temp.path().join("figtext.toml");
    fs::write(&cfg_path, "[text]\nnum_words = -5\n").unwrap();

    let cfg = config::load(Some(cfg_path.to_str().unwrap())).unwrap();
    let err = resolve(&cfg, &Overrides::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FigTextError>(),
        Some(FigTextError::InvalidWindowWidth(-5))
    ));
}

#[test]
fn unknown_mode_in_config_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let cfg_path = temp.path().join("figtext.toml");
    fs::write(&cfg_path, "[text]\nmode = \"sentences\"\n").unwrap();
    assert!(config::load(Some(cfg_path.to_str().unwrap())).is_err());
}
