use std::sync::Arc;

use crate::{Directory, Error, loader};
use roster_config::Config;
use roster_domain::{
	CharacterRecord, DimensionVocabulary, FilterDimension, OccupancyMarker, QueryChange,
	QueryState, Roster, TagValue, build_vocabulary,
};

/// One tag shown on a matching record, and whether it satisfies the active selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagHighlight<'a> {
	pub dimension: &'a FilterDimension,
	pub value: &'a TagValue,
	pub matched: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult<'a> {
	pub id: &'a str,
	pub record: &'a CharacterRecord,
	/// Tags present on the record, in dimension declaration order.
	pub tags: Vec<TagHighlight<'a>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
	/// No records are available yet.
	Loading,
	/// The data could not be loaded; the roster stays empty for the life of the engine.
	Failed,
	/// Nothing has been asked for. An empty query never means "everything".
	NoCriteria,
	NoMatch,
	Matches(Vec<MatchResult<'a>>),
}
impl<'a> SearchOutcome<'a> {
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Loading => "loading",
			Self::Failed => "failed",
			Self::NoCriteria => "no_criteria",
			Self::NoMatch => "no_match",
			Self::Matches(_) => "matches",
		}
	}

	pub fn matches(&self) -> &[MatchResult<'a>] {
		match self {
			Self::Matches(matches) => matches,
			_ => &[],
		}
	}

	pub fn ids(&self) -> Vec<&'a str> {
		self.matches().iter().map(|result| result.id).collect()
	}
}

/// Evaluates `query` against every record of `roster`, in roster order.
pub fn evaluate<'a>(
	roster: &'a Roster,
	dimensions: &'a [FilterDimension],
	marker: &OccupancyMarker,
	query: &QueryState,
) -> SearchOutcome<'a> {
	if roster.is_empty() {
		return SearchOutcome::Loading;
	}
	if !query.has_criteria(dimensions) {
		return SearchOutcome::NoCriteria;
	}

	let text = query.search_text();
	let matches: Vec<_> = roster
		.iter()
		.filter(|(id, record)| {
			text_matches(id, record, &text)
				&& query.status.admits(marker.is_unoccupied(&record.description))
				&& dimensions_match(record, dimensions, query)
		})
		.map(|(id, record)| MatchResult { id, record, tags: highlights(record, dimensions, query) })
		.collect();

	tracing::debug!(
		text = %text,
		status = %query.status,
		selections = query.selections.len(),
		matched = matches.len(),
		"Roster query evaluated."
	);

	if matches.is_empty() { SearchOutcome::NoMatch } else { SearchOutcome::Matches(matches) }
}

fn text_matches(id: &str, record: &CharacterRecord, text: &str) -> bool {
	text.is_empty()
		|| id.to_lowercase().contains(text)
		|| record.description.to_lowercase().contains(text)
}

fn dimensions_match(
	record: &CharacterRecord,
	dimensions: &[FilterDimension],
	query: &QueryState,
) -> bool {
	dimensions.iter().all(|dimension| {
		let Some(selected) = query.active_value(&dimension.id) else { return true };

		record.tag(&dimension.id).is_some_and(|tag| tag.satisfies(selected))
	})
}

fn highlights<'a>(
	record: &'a CharacterRecord,
	dimensions: &'a [FilterDimension],
	query: &QueryState,
) -> Vec<TagHighlight<'a>> {
	dimensions
		.iter()
		.filter_map(|dimension| {
			let value = record.tag(&dimension.id)?;
			let matched =
				query.active_value(&dimension.id).is_some_and(|selected| value.satisfies(selected));

			Some(TagHighlight { dimension, value, matched })
		})
		.collect()
}

#[derive(Debug)]
enum Source {
	Loading,
	Ready(Arc<Directory>),
	Failed(Error),
}

/// Owns the query state and a shared, read-only view of the loaded directory.
#[derive(Debug)]
pub struct FilterEngine {
	dimensions: Vec<FilterDimension>,
	marker: OccupancyMarker,
	source: Source,
	query: QueryState,
}
impl FilterEngine {
	pub fn new(dimensions: Vec<FilterDimension>, marker: OccupancyMarker) -> Self {
		Self { dimensions, marker, source: Source::Loading, query: QueryState::default() }
	}

	pub fn from_config(cfg: &Config) -> Self {
		Self::new(
			FilterDimension::from_filters(&cfg.filters),
			OccupancyMarker::from_config(&cfg.status),
		)
	}

	/// Loads the configured documents. A failed load leaves the engine permanently failed rather
	/// than returning an error; callers surface it through [`FilterEngine::failure`].
	pub async fn bootstrap(cfg: &Config) -> Self {
		let mut engine = Self::from_config(cfg);

		match loader::load(&cfg.data, &engine.dimensions, &cfg.filters.delimiter).await {
			Ok(directory) => engine.attach(Arc::new(directory)),
			Err(err) => engine.fail(err),
		}

		engine
	}

	pub fn attach(&mut self, directory: Arc<Directory>) {
		if matches!(self.source, Source::Failed(_)) {
			tracing::warn!("Ignoring roster data for an engine whose load already failed.");

			return;
		}

		self.source = Source::Ready(directory);
	}

	pub fn fail(&mut self, err: Error) {
		tracing::warn!(path = ?err.path(), error = %err, "Roster data failed to load.");

		self.source = Source::Failed(err);
	}

	pub fn dimensions(&self) -> &[FilterDimension] {
		&self.dimensions
	}

	pub fn directory(&self) -> Option<&Directory> {
		match &self.source {
			Source::Ready(directory) => Some(directory.as_ref()),
			_ => None,
		}
	}

	pub fn failure(&self) -> Option<&Error> {
		match &self.source {
			Source::Failed(err) => Some(err),
			_ => None,
		}
	}

	pub fn query(&self) -> &QueryState {
		&self.query
	}

	/// Applies a state transition and re-evaluates.
	pub fn apply(&mut self, change: QueryChange) -> SearchOutcome<'_> {
		self.query.apply(change);

		self.search()
	}

	pub fn search(&self) -> SearchOutcome<'_> {
		match &self.source {
			Source::Loading => SearchOutcome::Loading,
			Source::Failed(_) => SearchOutcome::Failed,
			Source::Ready(directory) => {
				evaluate(&directory.roster, &self.dimensions, &self.marker, &self.query)
			},
		}
	}

	pub fn vocabulary(&self) -> Vec<DimensionVocabulary<'_>> {
		match &self.source {
			Source::Ready(directory) => build_vocabulary(&self.dimensions, &directory.roster),
			_ => build_vocabulary(&self.dimensions, &Roster::default()),
		}
	}
}
