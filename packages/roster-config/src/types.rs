use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub data: Data,
	pub filters: Filters,
	#[serde(default)]
	pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

/// Locations of the three documents the roster is built from. Relative paths are resolved
/// against the directory holding the config file.
#[derive(Debug, Deserialize)]
pub struct Data {
	pub characters: PathBuf,
	pub wishes: PathBuf,
	pub site: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Filters {
	#[serde(default = "default_delimiter")]
	pub delimiter: String,
	pub dimensions: Vec<Dimension>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Dimension {
	pub id: String,
	pub label: String,
	#[serde(default)]
	pub kind: DimensionKind,
	/// Fixed option vocabulary. Required for multi-value dimensions; when absent on a
	/// single-value dimension the options are discovered from the loaded records.
	#[serde(default)]
	pub options: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
	#[default]
	Single,
	Multi,
}

#[derive(Debug, Deserialize)]
pub struct Status {
	#[serde(default = "default_unoccupied_marker")]
	pub unoccupied_marker: String,
}
impl Default for Status {
	fn default() -> Self {
		Self { unoccupied_marker: default_unoccupied_marker() }
	}
}

fn default_delimiter() -> String {
	"/".to_string()
}

fn default_unoccupied_marker() -> String {
	"状态: 未被占用".to_string()
}
