use crate::blurbs::WindowWidth;
use crate::error::FigTextError;
use crate::figtext::FigTextMode;
use crate::paragraphs::DEFAULT_PARAGRAPH_BOUNDARY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub text: TextConfig,
    pub output: OutputConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub paragraph_boundary: String,
    // Signed so a negative width reaches validate() instead of failing to parse.
    pub num_words: i64,
    pub mode: FigTextMode,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            paragraph_boundary: DEFAULT_PARAGRAPH_BOUNDARY.to_string(),
            num_words: WindowWidth::DEFAULT.get() as i64,
            mode: FigTextMode::default(),
        }
    }
}

impl TextConfig {
    pub fn validate(&self) -> Result<ExtractOptions, FigTextError> {
        if self.paragraph_boundary.is_empty() {
            return Err(FigTextError::EmptyBoundary);
        }
        Ok(ExtractOptions {
            paragraph_boundary: self.paragraph_boundary.clone(),
            num_words: WindowWidth::try_from(self.num_words)?,
        })
    }
}

/// Validated settings for [`crate::figtext::FigTextExtractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub paragraph_boundary: String,
    pub num_words: WindowWidth,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            paragraph_boundary: DEFAULT_PARAGRAPH_BOUNDARY.to_string(),
            num_words: WindowWidth::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include: vec!["*.txt".to_string()],
            exclude: Vec::new(),
        }
    }
}

/// Layers `config/default` (or an explicit file) and `FIGTEXT_*` environment
/// variables, e.g. `FIGTEXT_TEXT__NUM_WORDS=25`.
pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    settings = settings.add_source(
        config::Environment::with_prefix("FIGTEXT")
            .prefix_separator("_")
            .separator("__"),
    );
    let cfg = settings.build().map_err(FigTextError::from)?;
    let app: AppConfig = cfg.try_deserialize().map_err(FigTextError::from)?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let options = TextConfig::default().validate().unwrap();
        assert_eq!(options, ExtractOptions::default());
        assert_eq!(options.paragraph_boundary, "\n\n");
        assert_eq!(options.num_words.get(), 50);
    }

    #[test]
    fn negative_width_fails_fast() {
        let cfg = TextConfig {
            num_words: -3,
            ..TextConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(FigTextError::InvalidWindowWidth(-3))
        ));
    }

    #[test]
    fn negative_width_survives_parsing_and_fails_validation() {
        let cfg: TextConfig = serde_json::from_str(r#"{"num_words": -2}"#).unwrap();
        assert_eq!(cfg.num_words, -2);
        assert_eq!(cfg.paragraph_boundary, "\n\n");
        assert!(matches!(
            cfg.validate(),
            Err(FigTextError::InvalidWindowWidth(-2))
        ));
    }

    #[test]
    fn zero_width_is_valid() {
        let cfg = TextConfig {
            num_words: 0,
            ..TextConfig::default()
        };
        assert_eq!(cfg.validate().unwrap().num_words.get(), 0);
    }

    #[test]
    fn empty_boundary_rejected() {
        let cfg = TextConfig {
            paragraph_boundary: String::new(),
            ..TextConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(FigTextError::EmptyBoundary)));
    }

    #[test]
    fn missing_default_file_uses_defaults() {
        let cfg = load(None).unwrap();
        assert_eq!(cfg.text.paragraph_boundary, "\n\n");
        assert_eq!(cfg.scan.include, vec!["*.txt".to_string()]);
        assert!(!cfg.output.json);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(load(Some("does/not/exist/figtext.toml")).is_err());
    }
}
