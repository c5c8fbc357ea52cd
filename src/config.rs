// SPDX: CC0-1.0

use std::path::PathBuf;

pub const CSV_FILENAME: &str = "coordinate_geometry_calculations.csv";
pub const TEXT_FILENAME: &str = "coordinate_geometry_calculations.txt";
pub const CANCEL_SENTINEL: &str = "xxx";
pub const EXIT_SENTINEL: &str = "exit";
pub const SEPARATOR_WIDTH: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub csv_path: PathBuf,
    pub text_path: PathBuf,
    /// Typed at a coordinate prompt to abandon the current calculation.
    /// Matched case-insensitively.
    pub cancel_sentinel: String,
    /// Typed at a numeric prompt to stop reading altogether. Matched exactly.
    pub exit_sentinel: String,
    pub separator_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(CSV_FILENAME),
            text_path: PathBuf::from(TEXT_FILENAME),
            cancel_sentinel: CANCEL_SENTINEL.into(),
            exit_sentinel: EXIT_SENTINEL.into(),
            separator_width: SEPARATOR_WIDTH,
        }
    }
}

impl Config {
    /// Same as the default, but writes both reports into `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            csv_path: dir.join(CSV_FILENAME),
            text_path: dir.join(TEXT_FILENAME),
            ..Self::default()
        }
    }

    pub fn separator(&self) -> String {
        "=".repeat(self.separator_width)
    }
}
