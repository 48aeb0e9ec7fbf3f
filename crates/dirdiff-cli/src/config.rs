//! YAML configuration loading.
//!
//! The configuration document is deserialized into an explicit structure
//! with every recognized option enumerated and defaulted. Unrecognized
//! keys are warned about and ignored; they never silently change
//! behavior. Relative paths resolve against the config file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use dirdiff_engine::DiffOptions;
use dirdiff_scan::FilterConfig;

/// Config file picked up when no path is given on the command line.
pub const DEFAULT_CONFIG_NAME: &str = "dirdiff.yaml";

/// Template written by `dirdiff --init`.
pub const INIT_CONFIG: &str = "\
# dirdiff configuration
# All settings for the directory tree comparison.

# -- Required ---------------------------------------------------------
# Paths can be absolute or relative to this config file.
original: ./project-original
modified: ./project-modified

# -- Output -----------------------------------------------------------
output:
  # Generate an HTML report (false = terminal output only)
  html: false
  # Where to write the HTML report (relative to config or absolute)
  html_path: ./diff-report.html

  # Colored terminal output
  color: true

  # Show content diffs (false = file lists only)
  show_content: true

  # Unchanged lines kept around each change
  context_lines: 3

# -- Filter -----------------------------------------------------------
filter:
  # Directories to prune entirely
  ignore_dirs:
    - node_modules
    - dist
    - build
    - .git
    - __pycache__
    - .cache
    - target
    - .idea
    - .vscode

  # File patterns to ignore (glob syntax, matched against basenames)
  ignore_files:
    - \".DS_Store\"
    - \"Thumbs.db\"
    - \"*.pyc\"

  # Only compare specific file types.
  # Leave out or empty = all file types.
  # extensions:
  #   - .ts
  #   - .tsx
  #   - .css
";

/// Errors that make a configuration unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("'{0}' must be set in the config")]
    MissingField(&'static str),
}

/// Fully resolved run configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub config_path: PathBuf,
    pub original: PathBuf,
    pub modified: PathBuf,
    pub output: OutputConfig,
    pub filter: FilterConfig,
}

/// Rendering options.
#[derive(Clone, Debug)]
pub struct OutputConfig {
    pub html: bool,
    pub html_path: PathBuf,
    pub color: bool,
    pub show_content: bool,
    pub context_lines: usize,
}

impl Config {
    /// Load and resolve a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: serde_yaml::Value =
            serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        warn_unknown_keys(&value);

        let raw: RawConfig =
            serde_yaml::from_value(value).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let config_dir = match path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let resolve = |p: &str| -> PathBuf {
            let candidate = PathBuf::from(p);
            if candidate.is_absolute() {
                candidate
            } else {
                config_dir.join(candidate)
            }
        };

        let original = raw
            .original
            .as_deref()
            .map(resolve)
            .ok_or(ConfigError::MissingField("original"))?;
        let modified = raw
            .modified
            .as_deref()
            .map(resolve)
            .ok_or(ConfigError::MissingField("modified"))?;

        let out = raw.output;
        let output = OutputConfig {
            html: out.html.unwrap_or(false),
            html_path: resolve(out.html_path.as_deref().unwrap_or("./diff-report.html")),
            color: out.color.unwrap_or(true),
            show_content: out.show_content.unwrap_or(true),
            context_lines: out.context_lines.unwrap_or(3),
        };

        let flt = raw.filter;
        let filter = FilterConfig {
            ignore_dirs: flt.ignore_dirs.unwrap_or_default(),
            ignore_files: flt.ignore_files.unwrap_or_default(),
            extensions: flt.extensions.filter(|e| !e.is_empty()),
        };

        Ok(Self {
            config_path: path.to_path_buf(),
            original,
            modified,
            output,
            filter,
        })
    }

    /// The engine options derived from this configuration.
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            context_lines: self.output.context_lines,
            show_content: self.output.show_content,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    original: Option<String>,
    modified: Option<String>,
    #[serde(default)]
    output: RawOutput,
    #[serde(default)]
    filter: RawFilter,
}

#[derive(Debug, Default, Deserialize)]
struct RawOutput {
    html: Option<bool>,
    html_path: Option<String>,
    color: Option<bool>,
    show_content: Option<bool>,
    context_lines: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFilter {
    ignore_dirs: Option<Vec<String>>,
    ignore_files: Option<Vec<String>>,
    extensions: Option<Vec<String>>,
}

fn warn_unknown_keys(value: &serde_yaml::Value) {
    warn_section(value, &["original", "modified", "output", "filter"], None);
    warn_section(
        value.get("output").unwrap_or(&serde_yaml::Value::Null),
        &["html", "html_path", "color", "show_content", "context_lines"],
        Some("output"),
    );
    warn_section(
        value.get("filter").unwrap_or(&serde_yaml::Value::Null),
        &["ignore_dirs", "ignore_files", "extensions"],
        Some("filter"),
    );
}

fn warn_section(value: &serde_yaml::Value, known: &[&str], section: Option<&str>) {
    let Some(mapping) = value.as_mapping() else {
        return;
    };
    for key in mapping.keys() {
        let Some(name) = key.as_str() else { continue };
        if !known.contains(&name) {
            match section {
                Some(section) => warn!("unrecognized config key ignored: {section}.{name}"),
                None => warn!("unrecognized config key ignored: {name}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("dirdiff.yaml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "original: ./a\nmodified: ./b\n");

        let config = Config::load(&path).unwrap();
        assert_eq!(config.original, dir.path().join("./a"));
        assert_eq!(config.modified, dir.path().join("./b"));
        assert!(!config.output.html);
        assert!(config.output.color);
        assert!(config.output.show_content);
        assert_eq!(config.output.context_lines, 3);
        assert!(config.filter.ignore_dirs.is_empty());
        assert!(config.filter.extensions.is_none());
    }

    #[test]
    fn absolute_paths_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "original: /abs/a\nmodified: /abs/b\n");

        let config = Config::load(&path).unwrap();
        assert_eq!(config.original, PathBuf::from("/abs/a"));
    }

    #[test]
    fn full_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "original: ./a\n\
             modified: ./b\n\
             output:\n  \
             html: true\n  \
             html_path: ./report.html\n  \
             color: false\n  \
             show_content: false\n  \
             context_lines: 5\n\
             filter:\n  \
             ignore_dirs: [node_modules, .git]\n  \
             ignore_files: ['*.log']\n  \
             extensions: ['.ts', '.tsx']\n",
        );

        let config = Config::load(&path).unwrap();
        assert!(config.output.html);
        assert_eq!(config.output.html_path, dir.path().join("./report.html"));
        assert!(!config.output.color);
        assert!(!config.output.show_content);
        assert_eq!(config.output.context_lines, 5);
        assert_eq!(config.filter.ignore_dirs, vec!["node_modules", ".git"]);
        assert_eq!(config.filter.ignore_files, vec!["*.log"]);
        assert_eq!(
            config.filter.extensions,
            Some(vec![".ts".to_string(), ".tsx".to_string()])
        );

        let options = config.diff_options();
        assert_eq!(options.context_lines, 5);
        assert!(!options.show_content);
    }

    #[test]
    fn missing_original_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "modified: ./b\n");
        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::MissingField("original"))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "original: [unterminated\n");
        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unknown_keys_do_not_fail_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "original: ./a\nmodified: ./b\nmystery: true\noutput:\n  sparkle: yes\n",
        );
        assert!(Config::load(&path).is_ok());
    }

    #[test]
    fn empty_extension_list_means_no_whitelist() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "original: ./a\nmodified: ./b\nfilter:\n  extensions: []\n",
        );
        let config = Config::load(&path).unwrap();
        assert!(config.filter.extensions.is_none());
    }

    #[test]
    fn init_template_is_a_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), INIT_CONFIG);
        let config = Config::load(&path).unwrap();
        assert_eq!(config.original, dir.path().join("./project-original"));
        assert!(config
            .filter
            .ignore_dirs
            .contains(&"node_modules".to_string()));
    }
}
