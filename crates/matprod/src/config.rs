use serde::{Deserialize, Serialize};
use std::str::FromStr;

use anyhow::{bail, Result};

/// How integer overflow in the product's accumulator is handled.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound, like a plain 64-bit accumulator.
    #[default]
    Wrapping,
    /// Fail with `MatrixError::Overflow`.
    Checked,
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrapping" => Ok(OverflowPolicy::Wrapping),
            "checked" => Ok(OverflowPolicy::Checked),
            other => Err(format!("Unknown overflow policy: {}", other)),
        }
    }
}

/// Settings for the delimited-text adapter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MatrixConfig {
    /// Field separator for reading and writing matrices.
    pub delimiter: char,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl MatrixConfig {
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// The delimiter as the single byte the csv reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!(
                "Delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            );
        }
        Ok(self.delimiter as u8)
    }
}
