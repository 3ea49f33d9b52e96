use std::sync::Arc;

use roster_domain::{FilterDimension, OccupancyMarker, QueryChange, Selection, StatusMode};
use roster_service::{Directory, FilterEngine, SearchOutcome};
use roster_testkit::TestDataDir;

async fn fixture_engine() -> FilterEngine {
	let dir = TestDataDir::with_fixtures().expect("Failed to create test data.");
	let engine = FilterEngine::bootstrap(&dir.config()).await;

	assert!(engine.failure().is_none(), "Fixture load failed: {:?}", engine.failure());

	engine
}

fn owned_ids(outcome: SearchOutcome<'_>) -> Vec<String> {
	outcome.ids().into_iter().map(str::to_string).collect()
}

fn select(dimension: &str, value: &str) -> QueryChange {
	QueryChange::Select { dimension: dimension.to_string(), selection: Selection::from(value) }
}

#[tokio::test]
async fn empty_query_is_no_criteria_not_everything() {
	let mut engine = fixture_engine().await;

	assert_eq!(engine.search(), SearchOutcome::NoCriteria);
	assert_eq!(engine.apply(QueryChange::Text("   ".to_string())), SearchOutcome::NoCriteria);
	assert_eq!(engine.apply(select("length", "all")), SearchOutcome::NoCriteria);
	assert_eq!(engine.apply(select("unknown", "x")), SearchOutcome::NoCriteria);
}

#[tokio::test]
async fn text_matches_identifier_or_description_in_roster_order() {
	let mut engine = fixture_engine().await;

	assert_eq!(
		engine.apply(QueryChange::Text("HI".to_string())).ids(),
		["Hifumi", "Hina", "Shiroko"]
	);
	assert_eq!(engine.apply(QueryChange::Text("arius".to_string())).ids(), ["Azusa"]);
	assert_eq!(engine.apply(QueryChange::Text("风纪".to_string())).ids(), ["Hina"]);
}

#[tokio::test]
async fn multi_value_dimension_uses_membership() {
	let mut engine = fixture_engine().await;

	assert_eq!(engine.apply(select("length", "句")).ids(), ["Hifumi"]);
	assert_eq!(engine.apply(select("length", "段")).ids(), ["Hifumi", "Azusa"]);
	assert_eq!(engine.apply(select("length", "屏")).ids(), ["Hina", "Shiroko"]);
	assert_eq!(engine.apply(select("length", "长段")).ids(), ["Hina"]);
}

#[tokio::test]
async fn single_value_dimension_uses_exact_equality() {
	let mut engine = fixture_engine().await;

	assert_eq!(engine.apply(select("school", "三一")).ids(), ["Hifumi"]);
	assert_eq!(engine.apply(select("school", "三一综合学园")).ids(), ["Azusa"]);
	assert_eq!(engine.apply(select("school", "三")), SearchOutcome::NoMatch);
}

#[tokio::test]
async fn active_dimensions_are_anded() {
	let mut engine = fixture_engine().await;

	engine.apply(select("tendency", "攻"));

	assert_eq!(engine.search().ids(), ["Hifumi", "Shiroko"]);
	assert_eq!(engine.apply(select("length", "屏")).ids(), ["Shiroko"]);
	assert_eq!(engine.apply(select("school", "三一")), SearchOutcome::NoMatch);
}

#[tokio::test]
async fn untagged_records_only_match_text_and_status() {
	let mut engine = fixture_engine().await;

	assert_eq!(engine.apply(QueryChange::Text("arona".to_string())).ids(), ["Arona"]);
	assert_eq!(engine.apply(select("tendency", "攻")), SearchOutcome::NoMatch);
}

#[tokio::test]
async fn status_modes_partition_any() {
	let mut engine = fixture_engine().await;

	for text in ["a", "hi", "状态"] {
		engine.apply(QueryChange::ClearAll);
		engine.apply(QueryChange::Text(text.to_string()));

		let mut any = owned_ids(engine.apply(QueryChange::Status(StatusMode::Any)));
		let occupied = owned_ids(engine.apply(QueryChange::Status(StatusMode::Occupied)));
		let unoccupied = owned_ids(engine.apply(QueryChange::Status(StatusMode::Unoccupied)));

		assert!(occupied.iter().all(|id| !unoccupied.contains(id)), "Overlap for {text:?}");

		let mut union: Vec<String> = occupied.into_iter().chain(unoccupied).collect();

		union.sort_unstable();
		any.sort_unstable();

		assert_eq!(union, any, "Partition mismatch for {text:?}");
	}
}

#[tokio::test]
async fn status_alone_is_a_criterion() {
	let mut engine = fixture_engine().await;

	assert_eq!(
		engine.apply(QueryChange::Status(StatusMode::Unoccupied)).ids(),
		["Hifumi", "Azusa", "Arona"]
	);
	assert_eq!(engine.apply(QueryChange::Status(StatusMode::Occupied)).ids(), ["Hina", "Shiroko"]);
}

#[tokio::test]
async fn clear_all_restores_no_criteria() {
	let mut engine = fixture_engine().await;

	engine.apply(QueryChange::Text("hi".to_string()));
	engine.apply(select("length", "段"));
	engine.apply(QueryChange::Status(StatusMode::Unoccupied));

	assert_eq!(engine.search().ids(), ["Hifumi"]);
	assert_eq!(engine.apply(QueryChange::ClearAll), SearchOutcome::NoCriteria);
}

#[tokio::test]
async fn highlights_follow_current_selection() {
	let mut engine = fixture_engine().await;
	let outcome = engine.apply(select("length", "屏"));
	let hina = &outcome.matches()[0];
	let flags: Vec<(&str, bool)> =
		hina.tags.iter().map(|tag| (tag.dimension.id.as_str(), tag.matched)).collect();

	assert_eq!(hina.id, "Hina");
	assert_eq!(flags, [("school", false), ("length", true), ("tendency", false)]);
	assert_eq!(hina.tags[1].value.label(), "长段/屏");
}

#[test]
fn attached_empty_roster_reports_loading() {
	let mut engine = FilterEngine::new(FilterDimension::defaults(), OccupancyMarker::default());

	engine.attach(Arc::new(Directory::default()));

	assert_eq!(engine.apply(QueryChange::Text("hifumi".to_string())), SearchOutcome::Loading);
}

#[tokio::test]
async fn vocabulary_reflects_loaded_roster() {
	let engine = fixture_engine().await;
	let vocabulary = engine.vocabulary();

	assert_eq!(vocabulary[0].options, ["三一", "格黑娜", "三一综合学园", "阿拜多斯"]);
	assert_eq!(vocabulary[1].options, ["句", "段", "长段", "屏"]);
	assert_eq!(vocabulary[2].options, ["攻", "受"]);
}
