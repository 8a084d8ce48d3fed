use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::StormCore;
use crate::systems::crossing::{Bounds, InvalidBounds};

pub const DEFAULT_TEST_AREA_MIN: i64 = 200_000_000_000_000;
pub const DEFAULT_TEST_AREA_MAX: i64 = 400_000_000_000_000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Inclusive XY area in which crossings are counted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestArea {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl TestArea {
    pub fn square(min: i64, max: i64) -> Self {
        Self { min_x: min, max_x: max, min_y: min, max_y: max }
    }

    pub fn bounds(&self) -> Result<Bounds, InvalidBounds> {
        Bounds::new(self.min_x, self.max_x, self.min_y, self.max_y)
    }
}

impl Default for TestArea {
    fn default() -> Self {
        Self::square(DEFAULT_TEST_AREA_MIN, DEFAULT_TEST_AREA_MAX)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub test_area: TestArea,
    /// Evaluate pairs on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { test_area: TestArea::default(), parallel: cfg!(feature = "parallel") }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

pub(super) fn set_test_area(storm: &mut StormCore, area: TestArea) {
    storm.settings.test_area = area;
}

pub(super) fn set_parallel(storm: &mut StormCore, parallel: bool) {
    storm.settings.parallel = parallel;
}
