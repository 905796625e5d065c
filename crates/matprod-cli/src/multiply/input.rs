use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use matprod::{MatrixConfig, OverflowPolicy};

use crate::util::{delimiter_for_path, validate_matrix_file};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MultiplyConfig {
    pub version: String,
    /// Left operand file.
    pub a: String,
    /// Right operand file.
    pub b: String,
    /// Where to write the result. Printed to stdout when absent.
    pub output: Option<String>,
    /// Field delimiter for every file. When absent, each file's delimiter
    /// follows its extension.
    pub delimiter: Option<char>,
    pub overflow: OverflowPolicy,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        MultiplyConfig {
            version: clap::crate_version!().to_string(),
            a: String::new(),
            b: String::new(),
            output: None,
            delimiter: None,
            overflow: OverflowPolicy::Wrapping,
        }
    }
}

impl MultiplyConfig {
    /// Build the effective configuration: defaults, then the optional JSON
    /// config file, then command line overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = MultiplyConfig::default();

        if let Some(config_path) = config_path {
            let config_json = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let partial: serde_json::Value = serde_json::from_str(&config_json)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

            macro_rules! load_or_default {
                ($field:ident) => {
                    if let Some(val) = partial.get(stringify!($field)) {
                        if let Ok(parsed) = serde_json::from_value(val.clone()) {
                            config.$field = parsed;
                        } else {
                            log::warn!(
                                "Config Invalid value for '{}', using default: {:?}",
                                stringify!($field), config.$field
                            );
                        }
                    }
                };
            }

            load_or_default!(a);
            load_or_default!(b);
            load_or_default!(output);
            load_or_default!(delimiter);
            load_or_default!(overflow);
        }

        // Apply CLI overrides
        if let Some(a) = matches.get_one::<String>("a") {
            config.a = a.clone();
        }
        if let Some(b) = matches.get_one::<String>("b") {
            config.b = b.clone();
        }
        if let Some(output) = matches.get_one::<String>("output") {
            config.output = Some(output.clone());
        }
        if let Some(delimiter) = matches.get_one::<char>("delimiter") {
            config.delimiter = Some(*delimiter);
        }
        if let Some(overflow) = matches.get_one::<String>("overflow") {
            config.overflow = overflow.parse().map_err(anyhow::Error::msg)?;
        }

        Ok(config)
    }

    /// Both operand files must be named and exist.
    pub fn validate(&self) -> Result<()> {
        if self.a.is_empty() || self.b.is_empty() {
            anyhow::bail!(
                "I need you to specify -a and -b in order to do anything useful. \
                 Each should point to a delimited text file where one line is one \
                 row of the matrix; I will then compute c = a*b."
            );
        }
        validate_matrix_file(&self.a)?;
        validate_matrix_file(&self.b)?;
        if let Some(delimiter) = self.delimiter {
            MatrixConfig::with_delimiter(delimiter).delimiter_byte()?;
        }
        Ok(())
    }

    /// Adapter settings for reading or writing `path`.
    pub fn matrix_config(&self, path: &str) -> MatrixConfig {
        MatrixConfig::with_delimiter(self.delimiter.unwrap_or_else(|| delimiter_for_path(path)))
    }
}
