use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::FilterDimension;
use roster_config::SELECT_ALL;

/// Selected value for one dimension. `All` is the "no constraint" sentinel and is never compared
/// against tag values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
	#[default]
	All,
	Value(String),
}
impl Selection {
	pub fn as_value(&self) -> Option<&str> {
		match self {
			Self::All => None,
			Self::Value(value) => Some(value.as_str()),
		}
	}
}
impl From<String> for Selection {
	fn from(raw: String) -> Self {
		if raw == SELECT_ALL { Self::All } else { Self::Value(raw) }
	}
}
impl From<&str> for Selection {
	fn from(raw: &str) -> Self {
		Self::from(raw.to_string())
	}
}
impl From<Selection> for String {
	fn from(selection: Selection) -> Self {
		match selection {
			Selection::All => SELECT_ALL.to_string(),
			Selection::Value(value) => value,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusMode {
	#[default]
	#[serde(alias = "all")]
	Any,
	Occupied,
	Unoccupied,
}
impl StatusMode {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Any => "any",
			Self::Occupied => "occupied",
			Self::Unoccupied => "unoccupied",
		}
	}

	pub fn admits(self, is_unoccupied: bool) -> bool {
		match self {
			Self::Any => true,
			Self::Occupied => !is_unoccupied,
			Self::Unoccupied => is_unoccupied,
		}
	}
}
impl Display for StatusMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for StatusMode {
	type Err = String;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"any" | "all" => Ok(Self::Any),
			"occupied" => Ok(Self::Occupied),
			"unoccupied" => Ok(Self::Unoccupied),
			other => Err(format!(
				"unknown status '{other}', expected one of any, occupied, unoccupied"
			)),
		}
	}
}

/// A single state transition produced by a UI interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryChange {
	Text(String),
	Select { dimension: String, selection: Selection },
	Status(StatusMode),
	ClearAll,
}

/// Everything the user has asked for so far. Created empty, mutated in place through
/// [`QueryChange`], never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
	#[serde(default)]
	pub text: String,
	#[serde(default)]
	pub selections: BTreeMap<String, Selection>,
	#[serde(default)]
	pub status: StatusMode,
}
impl QueryState {
	pub fn apply(&mut self, change: QueryChange) {
		match change {
			QueryChange::Text(text) => self.text = text,
			QueryChange::Select { dimension, selection } => self.select(dimension, selection),
			QueryChange::Status(status) => self.status = status,
			QueryChange::ClearAll => self.clear(),
		}
	}

	pub fn select(&mut self, dimension: impl Into<String>, selection: impl Into<Selection>) {
		let dimension = dimension.into();
		let selection: Selection = selection.into();

		match selection {
			Selection::All => {
				self.selections.remove(&dimension);
			},
			selection => {
				self.selections.insert(dimension, selection);
			},
		}
	}

	pub fn clear(&mut self) {
		self.text.clear();
		self.selections.clear();
		self.status = StatusMode::Any;
	}

	/// Trimmed, lowercased search text. Empty when no text constraint applies.
	pub fn search_text(&self) -> String {
		self.text.trim().to_lowercase()
	}

	pub fn selection(&self, dimension: &str) -> &Selection {
		static ALL: Selection = Selection::All;

		self.selections.get(dimension).unwrap_or(&ALL)
	}

	pub fn active_value(&self, dimension: &str) -> Option<&str> {
		self.selections.get(dimension).and_then(Selection::as_value)
	}

	/// Whether anything constrains the result. Selections on undeclared dimensions do not count.
	pub fn has_criteria(&self, dimensions: &[FilterDimension]) -> bool {
		!self.search_text().is_empty()
			|| self.status != StatusMode::Any
			|| dimensions.iter().any(|dimension| self.active_value(&dimension.id).is_some())
	}
}
