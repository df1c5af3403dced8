use crate::segment::CropBox;
use crate::sweep::SweepOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `keypad_sweep` tool.
///
/// `input` is required; there is no default source file.
#[derive(Debug, Deserialize)]
pub struct SweepToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default = "CropBox::keypad_defaults")]
    pub crop_boxes: Vec<CropBox>,
    #[serde(default = "default_expected_code")]
    pub expected_code: String,
    #[serde(default)]
    pub sweep: SweepOptions,
    #[serde(default)]
    pub output: SweepOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct SweepOutputConfig {
    /// Full ranked report as JSON.
    pub json_out: Option<PathBuf>,
    /// Directory receiving one binarized raster per `(variant, threshold)`.
    pub binary_dir: Option<PathBuf>,
}

fn default_expected_code() -> String {
    "184325".to_string()
}

pub fn load_config(path: &Path) -> Result<SweepToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: SweepToolConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    if config.crop_boxes.len() != config.expected_code.chars().count() {
        return Err(format!(
            "Config {}: {} crop boxes but expected code {:?}",
            path.display(),
            config.crop_boxes.len(),
            config.expected_code
        ));
    }
    Ok(config)
}
