use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Prefix a file name must start with when nothing else is configured.
pub const DEFAULT_PREFIX: &str = "nssl";

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Options {
    /// Prefix a file name must start with to be listed
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Resource directory scanned when none is given on the command line
    #[serde(default)]
    pub resource_dir: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            resource_dir: String::new(),
        }
    }
}

impl Options {
    pub fn load_options() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", "storm_view") {
            if !proj_dirs.config_dir().exists() && fs::create_dir_all(proj_dirs.config_dir()).is_err() {
                log::error!("Can't create configuration directory {:?}", proj_dirs.config_dir());
                return Self::default();
            }
            let options_file = proj_dirs.config_dir().join("options.toml");
            if options_file.exists() {
                match fs::read_to_string(options_file) {
                    Ok(txt) => {
                        if let Ok(result) = toml::from_str(&txt) {
                            return result;
                        }
                    }
                    Err(err) => log::error!("Error reading options file: {}", err),
                }
            }
        }
        Self::default()
    }

    pub fn store_options(&self) {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", "storm_view") {
            let file_name = proj_dirs.config_dir().join("options.toml");
            match toml::to_string(self) {
                Ok(text) => {
                    if let Err(err) = fs::write(file_name, text) {
                        log::error!("Error writing options file: {}", err);
                    }
                }
                Err(err) => log::error!("Error writing options file: {}", err),
            }
        }
    }

    /// Returns the configured resource directory, if one is set
    pub fn resource_dir(&self) -> Option<PathBuf> {
        if self.resource_dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.resource_dir))
        }
    }

    /// Returns the log directory path
    pub fn get_log_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "storm_view").map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let options: Options = toml::from_str("").unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.prefix, "nssl");
        assert_eq!(options.resource_dir(), None);
    }

    #[test]
    fn test_partial_config_keeps_default_prefix() {
        let options: Options = toml::from_str("resource_dir = \"/srv/resources\"").unwrap();
        assert_eq!(options.prefix, "nssl");
        assert_eq!(options.resource_dir(), Some(PathBuf::from("/srv/resources")));
    }

    #[test]
    fn test_options_round_trip() {
        let options = Options {
            prefix: "img_".to_string(),
            resource_dir: "/data/packs".to_string(),
        };
        let text = toml::to_string(&options).unwrap();
        let parsed: Options = toml::from_str(&text).unwrap();
        assert_eq!(parsed, options);
    }
}
