use roster_config::DimensionKind;

/// How a record's tag is compared against a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
	/// One atomic label per record, matched by exact equality.
	Single,
	/// Several acceptable values per record, matched by membership.
	Multi,
}
impl From<DimensionKind> for ValueKind {
	fn from(kind: DimensionKind) -> Self {
		match kind {
			DimensionKind::Single => Self::Single,
			DimensionKind::Multi => Self::Multi,
		}
	}
}

/// One independently filterable facet of a character record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterDimension {
	pub id: String,
	pub label: String,
	pub kind: ValueKind,
	/// Fixed option vocabulary. Empty means options are discovered from the loaded records.
	pub options: Vec<String>,
}
impl FilterDimension {
	pub fn single(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self { id: id.into(), label: label.into(), kind: ValueKind::Single, options: Vec::new() }
	}

	pub fn multi<I, S>(id: impl Into<String>, label: impl Into<String>, options: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			id: id.into(),
			label: label.into(),
			kind: ValueKind::Multi,
			options: options.into_iter().map(Into::into).collect(),
		}
	}

	pub fn from_config(cfg: &roster_config::Dimension) -> Self {
		Self {
			id: cfg.id.clone(),
			label: cfg.label.clone(),
			kind: cfg.kind.into(),
			options: cfg.options.clone(),
		}
	}

	pub fn from_filters(cfg: &roster_config::Filters) -> Vec<Self> {
		cfg.dimensions.iter().map(Self::from_config).collect()
	}

	/// The three dimensions the community site ships with.
	pub fn defaults() -> Vec<Self> {
		vec![
			Self::single("school", "学院"),
			Self::multi("length", "对戏长度", ["句", "段", "长段", "屏"]),
			Self::single("tendency", "倾向"),
		]
	}

	pub fn has_fixed_options(&self) -> bool {
		!self.options.is_empty()
	}
}
