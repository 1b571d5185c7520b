//! Reproducible description of a rendered image.
//!
//! A [`Recipe`] captures everything needed to recreate a render: pattern
//! name, raster dimensions and pattern parameters. Because every pattern is
//! a pure function of pixel coordinates, the same recipe always renders the
//! same pixels.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HashtoneError;
use crate::raster::pixel_count;

/// Reproducible render description, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub pattern: String,
    pub width: usize,
    pub height: usize,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Recipe {
    /// Creates a recipe with empty params (`{}`).
    pub fn new(pattern: &str, width: usize, height: usize) -> Self {
        Self {
            pattern: pattern.to_string(),
            width,
            height,
            params: empty_params(),
        }
    }

    /// Reads and validates a recipe from a JSON file.
    ///
    /// An unreadable file is `HashtoneError::Io`; a file that is not a
    /// recipe document is `HashtoneError::InvalidRecipe`.
    pub fn from_path(path: &Path) -> Result<Self, HashtoneError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| HashtoneError::Io(format!("{}: {e}", path.display())))?;
        let recipe: Recipe =
            serde_json::from_str(&text).map_err(|e| HashtoneError::InvalidRecipe {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Checks the dimensions against the same bounds as
    /// [`Raster::new`](crate::raster::Raster::new), so an oversized render
    /// fails here instead of at allocation or PNG encoding.
    pub fn validate(&self) -> Result<(), HashtoneError> {
        pixel_count(self.width, self.height).map(|_| ())
    }
}
