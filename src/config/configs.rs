// SPDX-License-Identifier: MIT

//! The `configs` module defines elements necessary for the setup and configuration of
//! [`Config`] (part of the runtime environment).

use std::error::Error as StdErr;
use std::fs::{File, OpenOptions};
use std::io::prelude::*;
use std::io::SeekFrom;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// `struct` containing the runtime options parsed from a config file.
#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
pub struct Config {
    /// Absolute path to the config file (not for the user).
    #[serde(skip)]
    path: String,

    /// License subcommand defaults.
    #[serde(default)]
    pub license: LicenseConfig,
}

/// `struct` containing the config file's license defaults.
#[derive(Deserialize, Serialize, PartialEq, Debug, Clone, Default)]
pub struct LicenseConfig {
    /// Copyright holder substituted when a year is given without one; empty when unset.
    #[serde(default)]
    pub holder: String,
}

/// [`std::Default`] trait implementation for [`Config`].
impl Default for Config {
    fn default() -> Self {
        Self {
            path: "".to_owned(),
            license: LicenseConfig::default(),
        }
    }
}

/// Method implementations for [`Config`].
impl Config {
    /// Parses config file contents & generates a [`Config`] item.
    ///
    /// A missing config file is created & populated with the defaults; a malformed one is backed
    /// up beside itself before being replaced.
    pub fn parse(&mut self, config_file_path: &str) -> Result<Config, Box<dyn StdErr>> {
        use super::utils::create_file;

        debug!("parsing config file");

        let mut config_string = String::new();

        if !Path::new(&config_file_path).exists() {
            create_file(Path::new(&config_file_path))?;
        }

        let mut config_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(config_file_path)?;
        self.path = config_file_path.to_owned();

        if config_file.read_to_string(&mut config_string).unwrap_or(0) > 0 {
            match toml::from_str(config_string.trim()) {
                Ok(cfg) => {
                    debug!("done parsing config file");
                    return Ok(Config {
                        path: self.path.clone(),
                        ..cfg
                    });
                }
                Err(_) => {
                    info!("Backing up malformed config file");
                    std::fs::copy(config_file_path, format!("{}.bak", config_file_path))?;
                }
            }
        }

        info!("Config file is empty, using default config values");
        config_file.set_len(0)?;
        config_file.seek(SeekFrom::Start(0))?;
        self.update_file(&mut config_file)?;
        debug!("config: {:?}", self);

        Ok(self.clone())
    }

    /// Returns the configured default copyright holder, if any.
    pub fn default_holder(&self) -> Option<&str> {
        if self.license.holder.is_empty() {
            None
        } else {
            Some(&self.license.holder)
        }
    }

    /// Updates the contents of the config file with the current [`Config`].
    fn update_file(&self, config_file: &mut File) -> Result<(), Box<dyn StdErr>> {
        config_file.write_all(toml::to_string(&self)?.as_bytes())?;
        debug!("updated config file");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_holder() {
        let config = Config::default();

        assert!(config.default_holder().is_none());
    }

    #[test]
    fn holder_round_trips_through_toml() {
        let mut config = Config::default();
        config.license.holder = "Eduardo Castillo".to_owned();

        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.default_holder(), Some("Eduardo Castillo"));
        assert_eq!(parsed, config);
    }

    #[test]
    fn empty_license_table_is_accepted() {
        let parsed: Config = toml::from_str("").unwrap();

        assert!(parsed.default_holder().is_none());
    }

    #[test]
    fn parse_creates_missing_file_with_defaults() {
        let dir = std::env::temp_dir().join("gitgen-config-parse-test");
        let path = dir.join("config.toml");
        let _ = std::fs::remove_file(&path);

        let mut config = Config::default();
        let parsed = config.parse(path.to_str().unwrap()).unwrap();

        assert_eq!(parsed.license, Config::default().license);
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
