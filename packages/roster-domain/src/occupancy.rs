/// Substring of a description that marks a character as free to claim.
///
/// Occupancy is inferred from description text rather than carried as a structured field, so an
/// edit to the description wording changes status filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyMarker {
	unoccupied: String,
}
impl OccupancyMarker {
	pub const DEFAULT_UNOCCUPIED: &'static str = "状态: 未被占用";

	pub fn new(unoccupied: impl Into<String>) -> Self {
		Self { unoccupied: unoccupied.into() }
	}

	pub fn from_config(cfg: &roster_config::Status) -> Self {
		Self::new(cfg.unoccupied_marker.clone())
	}

	pub fn as_str(&self) -> &str {
		&self.unoccupied
	}

	/// Case-sensitive containment on the raw description.
	pub fn is_unoccupied(&self, description: &str) -> bool {
		description.contains(self.unoccupied.as_str())
	}
}
impl Default for OccupancyMarker {
	fn default() -> Self {
		Self::new(Self::DEFAULT_UNOCCUPIED)
	}
}
