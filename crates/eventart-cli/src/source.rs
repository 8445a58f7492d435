//! Resolving the configuration a command should sample.
//!
//! Precedence: `--config FILE`, then `--preset NAME`, then the preset chosen
//! by the seed itself. `--seed` overrides the seed in every case.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use eventart::{ArtConfig, ConfigError, Preset, PresetError, RawArtConfig};
use thiserror::Error;

use crate::commands::json_output::{error_codes, JsonError};

/// Options selecting a configuration, shared by every sampling command.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Seed for the texture (default: 0, or the seed stored in --config)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Preset name (see `eventart presets`)
    #[arg(long, conflicts_with = "config")]
    pub preset: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<String>,
}

/// Error resolving a configuration.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: ConfigError,
    },

    #[error(transparent)]
    Preset(#[from] PresetError),
}

impl SourceError {
    /// Structured form for `--json` output.
    pub fn to_json_error(&self) -> JsonError {
        match self {
            SourceError::Read { path, .. } => {
                JsonError::new(error_codes::FILE_READ, self.to_string())
                    .with_file(path.display().to_string())
            }
            SourceError::Parse { path, .. } => {
                JsonError::new(error_codes::JSON_PARSE, self.to_string())
                    .with_file(path.display().to_string())
            }
            SourceError::Invalid { path, source } => JsonError::new(source.code(), self.to_string())
                .with_path(source.field())
                .with_file(path.display().to_string()),
            SourceError::Preset(e) => JsonError::new(error_codes::UNKNOWN_PRESET, e.to_string())
                .with_suggestion(format!(
                    "use one of: {}",
                    Preset::ALL.map(|p| p.name()).join(", ")
                )),
        }
    }
}

/// Where the resolved configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    File(PathBuf),
    Preset(Preset),
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::File(path) => write!(f, "file {}", path.display()),
            Origin::Preset(preset) => write!(f, "preset {}", preset),
        }
    }
}

/// A resolved configuration and its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub config: ArtConfig,
    pub origin: Origin,
}

/// Load and validate a configuration file.
///
/// Malformed JSON is a [`SourceError::Parse`]; well-formed JSON describing an
/// invalid configuration is a [`SourceError::Invalid`] carrying the
/// [`ConfigError`].
pub fn load_config(path: &Path) -> Result<ArtConfig, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawArtConfig = serde_json::from_str(&content).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    raw.validate().map_err(|source| SourceError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the configuration selected by `args`.
pub fn resolve(args: &SourceArgs) -> Result<Resolved, SourceError> {
    if let Some(path) = &args.config {
        let path = PathBuf::from(path);
        let mut config = load_config(&path)?;
        if let Some(seed) = args.seed {
            config = config.with_seed(seed);
        }
        return Ok(Resolved {
            config,
            origin: Origin::File(path),
        });
    }

    let seed = args.seed.unwrap_or(0);
    let preset = match &args.preset {
        Some(name) => Preset::from_name(name)?,
        None => Preset::for_seed(seed),
    };
    Ok(Resolved {
        config: preset.config(seed),
        origin: Origin::Preset(preset),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventart::presets;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_seed_preset() {
        let resolved = resolve(&SourceArgs {
            seed: Some(11),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolved.config, presets::for_seed(11));
        assert_eq!(resolved.origin, Origin::Preset(Preset::for_seed(11)));
    }

    #[test]
    fn test_named_preset() {
        let resolved = resolve(&SourceArgs {
            seed: Some(3),
            preset: Some("Ocean".to_string()),
            config: None,
        })
        .unwrap();
        assert_eq!(resolved.config, presets::ocean(3));
    }

    #[test]
    fn test_unknown_preset() {
        let err = resolve(&SourceArgs {
            preset: Some("glitter".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, SourceError::Preset(_)));
        assert_eq!(err.to_json_error().code, error_codes::UNKNOWN_PRESET);
    }

    #[test]
    fn test_config_file_with_seed_override() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"palette":["#FF0000","#0000FF"],"seed":42,"scale":0.01,"octaves":3,"persistence":0.5}}"##
        )
        .unwrap();

        let args = SourceArgs {
            config: Some(file.path().display().to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&args).unwrap().config.seed(), 42);

        let args = SourceArgs {
            seed: Some(43),
            ..args
        };
        assert_eq!(resolve(&args).unwrap().config.seed(), 43);
    }

    #[test]
    fn test_invalid_config_file_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"palette":[],"seed":1,"scale":0.01,"octaves":3,"persistence":0.5}}"##
        )
        .unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Invalid { .. }));
        assert!(err.to_string().contains("palette must contain at least one color"));

        let json = err.to_json_error();
        assert_eq!(json.code, "C001");
        assert_eq!(json.path.as_deref(), Some("palette"));
    }

    #[test]
    fn test_malformed_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"palette\": [").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert_eq!(err.to_json_error().code, error_codes::JSON_PARSE);
    }

    #[test]
    fn test_config_file_matches_library_format() {
        let json = r##"{"palette":["#FF0000","#0000FF"],"seed":42,"scale":0.01,"octaves":3,"persistence":0.5}"##;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        let expected: ArtConfig = serde_json::from_str(json).unwrap();
        assert_eq!(load_config(file.path()).unwrap(), expected);

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"palette":["#FF0000"],"seed":1,"scale":0.01,"octaves":3,"persistence":0.5,"speed":2}}"##
        )
        .unwrap();
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            SourceError::Parse { .. }
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Path::new("/nonexistent/eventart.json")).unwrap_err();
        assert_eq!(err.to_json_error().code, error_codes::FILE_READ);
    }
}
