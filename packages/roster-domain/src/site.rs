use serde::Deserialize;

/// An entry on the wish wall.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Wish {
	pub text: String,
	#[serde(default)]
	pub author: String,
}

/// Site-wide content: community rules and outbound links.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SiteConfig {
	#[serde(default)]
	pub rules: Vec<Rule>,
	#[serde(default)]
	pub links: Vec<Link>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
	Tip,
	#[default]
	#[serde(other)]
	Section,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Rule {
	#[serde(default, rename = "type")]
	pub kind: RuleKind,
	#[serde(default)]
	pub icon: Option<String>,
	pub title: String,
	#[serde(default)]
	pub content: Option<String>,
	#[serde(default)]
	pub items: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Link {
	pub url: String,
	pub title: String,
	#[serde(default)]
	pub icon: Option<String>,
}
