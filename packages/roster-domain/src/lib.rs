pub mod dimension;
pub mod occupancy;
pub mod query;
pub mod record;
pub mod site;
pub mod vocabulary;

pub use dimension::{FilterDimension, ValueKind};
pub use occupancy::OccupancyMarker;
pub use query::{QueryChange, QueryState, Selection, StatusMode};
pub use record::{CharacterRecord, RawCharacter, Roster, TagValue};
pub use site::{Link, Rule, RuleKind, SiteConfig, Wish};
pub use vocabulary::{DimensionVocabulary, build_vocabulary};
