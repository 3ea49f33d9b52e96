use roster_config::SELECT_ALL;
use roster_domain::{DimensionVocabulary, Link, Rule, RuleKind, Wish};
use roster_service::{MatchResult, SearchOutcome};

pub const LOADING: &str = "Loading roster data...";
pub const FAILED: &str = "Roster data is unavailable. Please contact an administrator.";
pub const NO_CRITERIA: &str = "Type a search term or choose a filter.";
pub const NO_MATCH: &str = "No matching characters.";

/// Renders an outcome as plain text. Each empty state has its own message; tags satisfying the
/// active selection are marked with a trailing `*`.
pub fn outcome(outcome: &SearchOutcome<'_>) -> String {
	match outcome {
		SearchOutcome::Loading => LOADING.to_string(),
		SearchOutcome::Failed => FAILED.to_string(),
		SearchOutcome::NoCriteria => NO_CRITERIA.to_string(),
		SearchOutcome::NoMatch => NO_MATCH.to_string(),
		SearchOutcome::Matches(matches) => {
			let mut out = format!("{} match(es)\n", matches.len());

			for result in matches {
				out.push('\n');
				out.push_str(&item(result));
			}

			out
		},
	}
}

fn item(result: &MatchResult<'_>) -> String {
	let mut out = format!("{}\n", result.id);

	if !result.tags.is_empty() {
		let tags: Vec<String> = result
			.tags
			.iter()
			.map(|tag| {
				let marker = if tag.matched { "*" } else { "" };

				format!("[{}]{marker}", tag.value.label())
			})
			.collect();

		out.push_str(&format!("  {}\n", tags.join(" ")));
	}

	for line in result.record.description.lines() {
		out.push_str(&format!("  {line}\n"));
	}

	out
}

pub fn vocabulary(vocabulary: &[DimensionVocabulary<'_>]) -> String {
	let mut out = String::new();

	for entry in vocabulary {
		let mut options = vec![SELECT_ALL];

		options.extend(entry.options.iter().map(String::as_str));

		out.push_str(&format!(
			"{} ({}): {}\n",
			entry.dimension.label,
			entry.dimension.id,
			options.join(" | ")
		));
	}

	out
}

/// Tips render as a single quoted line; sections render as a heading followed by their body and
/// bulleted items.
pub fn rules(rules: &[Rule]) -> String {
	let mut out = String::new();

	for rule in rules {
		let icon = rule.icon.as_deref().map(|icon| format!("{icon} ")).unwrap_or_default();
		let content = rule.content.as_deref().unwrap_or_default();

		match rule.kind {
			RuleKind::Tip => {
				out.push_str(&format!("> {icon}{}: {content}\n", rule.title));
			},
			RuleKind::Section => {
				out.push_str(&format!("== {icon}{} ==\n", rule.title));

				if !content.is_empty() {
					out.push_str(&format!("{content}\n"));
				}
				for item in &rule.items {
					out.push_str(&format!("  - {item}\n"));
				}
			},
		}
	}

	out
}

pub fn links(links: &[Link]) -> String {
	links
		.iter()
		.map(|link| match &link.icon {
			Some(icon) => format!("{icon} {} <{}>\n", link.title, link.url),
			None => format!("{} <{}>\n", link.title, link.url),
		})
		.collect()
}

pub fn wishes(wishes: &[Wish]) -> String {
	let mut out = String::new();

	for wish in wishes {
		out.push_str(&format!("\"{}\"\n", wish.text));

		if !wish.author.is_empty() {
			out.push_str(&format!("  -- {}\n", wish.author));
		}
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use roster_domain::{CharacterRecord, FilterDimension, TagValue};
	use roster_service::TagHighlight;

	#[test]
	fn empty_states_are_distinct() {
		let messages = [
			outcome(&SearchOutcome::Loading),
			outcome(&SearchOutcome::Failed),
			outcome(&SearchOutcome::NoCriteria),
			outcome(&SearchOutcome::NoMatch),
		];

		for (index, message) in messages.iter().enumerate() {
			assert!(messages.iter().skip(index + 1).all(|other| other != message));
		}
	}

	#[test]
	fn marks_highlighted_tags() {
		let dimensions = FilterDimension::defaults();
		let school = TagValue::Single("三一".to_string());
		let length =
			TagValue::Multi { raw: "句/段".to_string(), values: vec!["句".into(), "段".into()] };
		let record = CharacterRecord {
			description: "first line\n状态: 未被占用".to_string(),
			..Default::default()
		};
		let result = MatchResult {
			id: "Hifumi",
			record: &record,
			tags: vec![
				TagHighlight { dimension: &dimensions[0], value: &school, matched: false },
				TagHighlight { dimension: &dimensions[1], value: &length, matched: true },
			],
		};
		let rendered = outcome(&SearchOutcome::Matches(vec![result]));

		assert_eq!(
			rendered,
			"1 match(es)\n\nHifumi\n  [三一] [句/段]*\n  first line\n  状态: 未被占用\n"
		);
	}

	#[test]
	fn vocabulary_lists_all_sentinel_first() {
		let dimensions = [FilterDimension::multi("length", "对戏长度", ["句", "段"])];
		let entries =
			[DimensionVocabulary { dimension: &dimensions[0], options: dimensions[0].options.clone() }];

		assert_eq!(vocabulary(&entries), "对戏长度 (length): all | 句 | 段\n");
	}

	#[test]
	fn tips_and_sections_render_differently() {
		let rules_list = [
			Rule {
				kind: RuleKind::Tip,
				icon: Some("!".to_string()),
				title: "Tip".to_string(),
				content: Some("Check status first.".to_string()),
				items: Vec::new(),
			},
			Rule {
				kind: RuleKind::Section,
				icon: None,
				title: "Rules".to_string(),
				content: None,
				items: vec!["Be kind.".to_string(), "No spoilers.".to_string()],
			},
		];

		assert_eq!(
			rules(&rules_list),
			"> ! Tip: Check status first.\n== Rules ==\n  - Be kind.\n  - No spoilers.\n"
		);
	}

	#[test]
	fn links_and_wishes_render_one_entry_each() {
		let link_list = [
			Link {
				url: "https://example.com".to_string(),
				title: "Home".to_string(),
				icon: Some("*".to_string()),
			},
			Link { url: "https://example.org".to_string(), title: "Docs".to_string(), icon: None },
		];
		let wish_list = [
			Wish { text: "More scenes.".to_string(), author: "Sensei".to_string() },
			Wish { text: "A festival.".to_string(), author: String::new() },
		];

		assert_eq!(links(&link_list), "* Home <https://example.com>\nDocs <https://example.org>\n");
		assert_eq!(wishes(&wish_list), "\"More scenes.\"\n  -- Sensei\n\"A festival.\"\n");
	}
}
