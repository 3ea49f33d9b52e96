use indexmap::IndexMap;
use serde::Deserialize;

use crate::{FilterDimension, ValueKind};

/// A character exactly as it appears in the characters document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawCharacter {
	#[serde(default, rename = "desc", alias = "description")]
	pub description: String,
	#[serde(default)]
	pub tags: Option<IndexMap<String, Option<String>>>,
}

/// A tag value after the delimiter has been resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagValue {
	Single(String),
	Multi { raw: String, values: Vec<String> },
}
impl TagValue {
	fn parse(raw: String, kind: ValueKind, delimiter: &str) -> Self {
		match kind {
			ValueKind::Single => Self::Single(raw),
			ValueKind::Multi => {
				let values = raw
					.split(delimiter)
					.filter(|value| !value.is_empty())
					.map(str::to_string)
					.collect();

				Self::Multi { raw, values }
			},
		}
	}

	/// Display form, identical to the value in the source document.
	pub fn label(&self) -> &str {
		match self {
			Self::Single(value) => value,
			Self::Multi { raw, .. } => raw,
		}
	}

	pub fn values(&self) -> &[String] {
		match self {
			Self::Single(value) => std::slice::from_ref(value),
			Self::Multi { values, .. } => values,
		}
	}

	/// Exact equality for single values, membership for multi values.
	pub fn satisfies(&self, selected: &str) -> bool {
		match self {
			Self::Single(value) => value == selected,
			Self::Multi { values, .. } => values.iter().any(|value| value == selected),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterRecord {
	pub description: String,
	pub tags: IndexMap<String, TagValue>,
}
impl CharacterRecord {
	/// Resolves raw tag strings against the declared dimensions. Tags on undeclared dimensions are
	/// kept as single values; null and empty tag strings are dropped.
	pub fn from_raw(raw: RawCharacter, dimensions: &[FilterDimension], delimiter: &str) -> Self {
		let tags = raw
			.tags
			.unwrap_or_default()
			.into_iter()
			.filter_map(|(id, value)| Some((id, value.filter(|value| !value.is_empty())?)))
			.map(|(id, value)| {
				let kind = dimensions
					.iter()
					.find(|dimension| dimension.id == id)
					.map(|dimension| dimension.kind)
					.unwrap_or(ValueKind::Single);
				let value = TagValue::parse(value, kind, delimiter);

				(id, value)
			})
			.collect();

		Self { description: raw.description, tags }
	}

	pub fn tag(&self, dimension: &str) -> Option<&TagValue> {
		self.tags.get(dimension)
	}
}

/// The loaded character collection, in document order. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Roster {
	records: IndexMap<String, CharacterRecord>,
}
impl Roster {
	pub fn from_raw(
		raw: IndexMap<String, RawCharacter>,
		dimensions: &[FilterDimension],
		delimiter: &str,
	) -> Self {
		let records = raw
			.into_iter()
			.map(|(id, character)| (id, CharacterRecord::from_raw(character, dimensions, delimiter)))
			.collect();

		Self { records }
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn get(&self, id: &str) -> Option<&CharacterRecord> {
		self.records.get(id)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &CharacterRecord)> {
		self.records.iter().map(|(id, record)| (id.as_str(), record))
	}
}
impl FromIterator<(String, CharacterRecord)> for Roster {
	fn from_iter<T: IntoIterator<Item = (String, CharacterRecord)>>(iter: T) -> Self {
		Self { records: iter.into_iter().collect() }
	}
}
