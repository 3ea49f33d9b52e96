use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::{Error, Result};
use roster_config::Data;
use roster_domain::{FilterDimension, RawCharacter, Roster, SiteConfig, Wish};

/// Everything the three documents provide, resolved and ready to search.
#[derive(Debug, Default)]
pub struct Directory {
	pub roster: Roster,
	pub wishes: Vec<Wish>,
	pub site: SiteConfig,
}

/// Reads the characters, wishes, and site documents concurrently.
///
/// The load is all-or-nothing: the first failing document is reported and nothing is returned
/// for the others. Multi-value tags are split on `delimiter` here and nowhere else.
pub async fn load(
	data: &Data,
	dimensions: &[FilterDimension],
	delimiter: &str,
) -> Result<Directory> {
	let (characters, wishes, site) = tokio::try_join!(
		read_json::<IndexMap<String, RawCharacter>>(&data.characters),
		read_json::<Vec<Wish>>(&data.wishes),
		read_json::<SiteConfig>(&data.site),
	)?;
	let roster = Roster::from_raw(characters, dimensions, delimiter);

	tracing::info!(
		characters = roster.len(),
		wishes = wishes.len(),
		rules = site.rules.len(),
		links = site.links.len(),
		"Roster data loaded."
	);

	Ok(Directory { roster, wishes, site })
}

async fn read_json<T>(path: &Path) -> Result<T>
where
	T: DeserializeOwned,
{
	let raw = tokio::fs::read(path)
		.await
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;

	serde_json::from_slice(&raw).map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })
}
