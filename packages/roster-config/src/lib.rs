mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Data, Dimension, DimensionKind, Filters, Service, Status};

use std::{collections::HashSet, fs, path::Path};

/// Selection sentinel meaning "no constraint on this dimension". Reserved, so it can never be a
/// dimension id or an option value.
pub const SELECT_ALL: &str = "all";

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg, path.parent().unwrap_or_else(|| Path::new("")));

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	for (label, path) in [
		("data.characters", &cfg.data.characters),
		("data.wishes", &cfg.data.wishes),
		("data.site", &cfg.data.site),
	] {
		if path.as_os_str().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.filters.delimiter.trim().is_empty() {
		return Err(Error::Validation {
			message: "filters.delimiter must contain a non-whitespace character.".to_string(),
		});
	}
	if cfg.filters.dimensions.is_empty() {
		return Err(Error::Validation {
			message: "filters.dimensions must declare at least one dimension.".to_string(),
		});
	}

	let mut seen_ids = HashSet::new();

	for dimension in &cfg.filters.dimensions {
		validate_dimension(dimension)?;

		if !seen_ids.insert(dimension.id.as_str()) {
			return Err(Error::Validation {
				message: format!("filters.dimensions id '{}' is declared twice.", dimension.id),
			});
		}
	}

	if cfg.status.unoccupied_marker.trim().is_empty() {
		return Err(Error::Validation {
			message: "status.unoccupied_marker must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn validate_dimension(dimension: &Dimension) -> Result<()> {
	if dimension.id.is_empty() {
		return Err(Error::Validation {
			message: "filters.dimensions.id must be non-empty.".to_string(),
		});
	}
	if dimension.id == SELECT_ALL {
		return Err(Error::Validation {
			message: format!("filters.dimensions.id must not be the reserved value '{SELECT_ALL}'."),
		});
	}
	if dimension.label.is_empty() {
		return Err(Error::Validation {
			message: format!("filters.dimensions '{}' label must be non-empty.", dimension.id),
		});
	}
	if dimension.kind == DimensionKind::Multi && dimension.options.is_empty() {
		return Err(Error::Validation {
			message: format!(
				"filters.dimensions '{}' is multi-valued and must declare options.",
				dimension.id
			),
		});
	}

	let mut seen_options = HashSet::new();

	for option in &dimension.options {
		if option.is_empty() || option == SELECT_ALL {
			return Err(Error::Validation {
				message: format!(
					"filters.dimensions '{}' options must be non-empty and must not be '{SELECT_ALL}'.",
					dimension.id
				),
			});
		}
		if !seen_options.insert(option.as_str()) {
			return Err(Error::Validation {
				message: format!(
					"filters.dimensions '{}' option '{option}' is declared twice.",
					dimension.id
				),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config, base_dir: &Path) {
	for path in [&mut cfg.data.characters, &mut cfg.data.wishes, &mut cfg.data.site] {
		if path.is_relative() && !path.as_os_str().is_empty() {
			*path = base_dir.join(&*path);
		}
	}

	for dimension in &mut cfg.filters.dimensions {
		dimension.id = dimension.id.trim().to_string();
		dimension.label = dimension.label.trim().to_string();

		for option in &mut dimension.options {
			*option = option.trim().to_string();
		}
	}
}
