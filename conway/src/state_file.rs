// state_file.rs - Named Life configurations saved as JSON
//
// Layout: { "name": ..., "gridSize": ..., "nodes": [{ "x": .., "y": .. }, ...] }

use crate::error::{LifeError, Result};
use grid::Point;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub const JSON_EXTENSION: &str = "json";

// Characters no supported filesystem accepts in a file name
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
const MAX_NAME_LEN: usize = 250;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConwayState {
    pub name      : String,
    pub grid_size : i32,
    pub nodes     : Vec<Point>,
}

impl ConwayState {
    pub fn new(name: impl Into<String>, grid_size: i32, nodes: Vec<Point>) -> Self {
        Self { name: name.into(), grid_size, nodes }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    /// Reads a state from a `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !has_json_extension(path) {
            return Err(LifeError::InvalidExtension(path.to_path_buf()));
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Writes the state to `<dir>/<name>.json` and returns the file path.
    pub fn save_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        if !is_valid_file_name(&self.name) {
            return Err(LifeError::InvalidName(self.name.clone()));
        }

        let path = dir.as_ref().join(format!("{}.{}", self.name, JSON_EXTENSION));
        let mut writer = BufWriter::new(File::create(&path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;

        log::info!("saved conway state {:?} to {}", self.name, path.display());
        Ok(path)
    }
}

pub fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(JSON_EXTENSION))
}

pub fn is_valid_file_name(name: &str) -> bool {
    let trimmed = name.trim();

    !trimmed.is_empty()
        && trimmed == name
        && name != "."
        && name != ".."
        && name.len() <= MAX_NAME_LEN
        && !name.ends_with('.')
        && !name.chars().any(|c| c.is_control() || RESERVED_CHARS.contains(&c))
}

/// Loads every parsable state file in `dir`, sorted by name. A missing
/// directory yields no presets; files that fail to parse are skipped.
pub fn load_presets(dir: impl AsRef<Path>) -> Result<Vec<ConwayState>> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut states = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || !has_json_extension(&path) {
            continue;
        }

        match ConwayState::from_file(&path) {
            Ok(state) => states.push(state),
            Err(err) => log::warn!("skipping preset {}: {}", path.display(), err),
        }
    }

    states.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(states)
}
