use indexmap::IndexSet;

use crate::{FilterDimension, Roster};

/// Selectable options for one dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionVocabulary<'a> {
	pub dimension: &'a FilterDimension,
	pub options: Vec<String>,
}

/// Builds one vocabulary per dimension, in declaration order.
///
/// Dimensions with fixed options keep them verbatim. The rest collect the distinct values
/// observed across the roster in discovery order; records without the tag are skipped.
pub fn build_vocabulary<'a>(
	dimensions: &'a [FilterDimension],
	roster: &Roster,
) -> Vec<DimensionVocabulary<'a>> {
	dimensions
		.iter()
		.map(|dimension| {
			let options = if dimension.has_fixed_options() {
				dimension.options.clone()
			} else {
				observed_values(dimension, roster)
			};

			DimensionVocabulary { dimension, options }
		})
		.collect()
}

fn observed_values(dimension: &FilterDimension, roster: &Roster) -> Vec<String> {
	let mut seen = IndexSet::new();

	for (_, record) in roster.iter() {
		let Some(tag) = record.tag(&dimension.id) else { continue };

		for value in tag.values() {
			if !seen.contains(value.as_str()) {
				seen.insert(value.clone());
			}
		}
	}

	seen.into_iter().collect()
}
