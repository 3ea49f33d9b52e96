mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use serde_json::Value;
use uuid::Uuid;

use roster_config::{Config, Data, Dimension, DimensionKind, Filters, Service, Status};

pub const CHARACTERS_FILE: &str = "characters.json";
pub const WISHES_FILE: &str = "wishes.json";
pub const SITE_FILE: &str = "config.json";

/// Five characters covering every filter path: a multi-value length, a missing tag set, a school
/// whose name contains another school's name, and both occupancy markers.
pub const CHARACTERS_JSON: &str = r#"{
	"Hifumi": {
		"desc": "补习授业部。状态: 未被占用",
		"tags": { "school": "三一", "length": "句/段", "tendency": "攻" }
	},
	"Hina": {
		"desc": "风纪委员长。状态: 已被占用",
		"tags": { "school": "格黑娜", "length": "长段/屏", "tendency": "受" }
	},
	"Azusa": {
		"desc": "Former Arius student. 状态: 未被占用",
		"tags": { "school": "三一综合学园", "length": "段" }
	},
	"Shiroko": {
		"desc": "对策委员会。状态: 已被占用",
		"tags": { "school": "阿拜多斯", "length": "屏", "tendency": "攻" }
	},
	"Arona": {
		"desc": "System OS. 状态: 未被占用"
	}
}"#;

pub const WISHES_JSON: &str = r#"[
	{ "text": "More long-form scenes.", "author": "Sensei" },
	{ "text": "A summer festival event.", "author": "Hifumi" }
]"#;

pub const SITE_JSON: &str = r#"{
	"rules": [
		{ "type": "tip", "icon": "!", "title": "Tip", "content": "Check status before asking." },
		{ "type": "rules", "title": "Rules", "items": ["Be kind.", "No spoilers."] }
	],
	"links": [ { "url": "https://example.com/apply", "icon": "*", "title": "Apply" } ]
}"#;

/// A uniquely named temporary directory holding roster documents. Removed on drop.
pub struct TestDataDir {
	root: PathBuf,
	cleaned: bool,
}
impl TestDataDir {
	pub fn new() -> Result<Self> {
		let root = env::temp_dir().join(format!("roster_test_{}", Uuid::new_v4().simple()));

		fs::create_dir_all(&root)?;

		Ok(Self { root, cleaned: false })
	}

	/// A directory pre-populated with the sample characters, wishes, and site documents.
	pub fn with_fixtures() -> Result<Self> {
		let dir = Self::new()?;

		dir.write(CHARACTERS_FILE, CHARACTERS_JSON)?;
		dir.write(WISHES_FILE, WISHES_JSON)?;
		dir.write(SITE_FILE, SITE_JSON)?;

		Ok(dir)
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn path(&self, name: &str) -> PathBuf {
		self.root.join(name)
	}

	pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
		let path = self.path(name);

		fs::write(&path, contents)?;

		Ok(path)
	}

	pub fn write_json(&self, name: &str, value: &Value) -> Result<PathBuf> {
		self.write(name, &serde_json::to_string_pretty(value)?)
	}

	pub fn remove(&self, name: &str) -> Result<()> {
		let path = self.path(name);

		fs::remove_file(&path)
			.map_err(|err| Error::Message(format!("Failed to remove {}: {err}.", path.display())))
	}

	pub fn data(&self) -> Data {
		Data {
			characters: self.path(CHARACTERS_FILE),
			wishes: self.path(WISHES_FILE),
			site: self.path(SITE_FILE),
		}
	}

	/// A validated config pointing at this directory, using the three shipped dimensions.
	pub fn config(&self) -> Config {
		Config {
			service: Service { log_level: "debug".to_string() },
			data: self.data(),
			filters: Filters { delimiter: "/".to_string(), dimensions: sample_dimensions() },
			status: Status::default(),
		}
	}

	/// Writes a `roster.toml` referencing the documents by relative path and returns its path.
	pub fn write_config_toml(&self, log_level: &str) -> Result<PathBuf> {
		let toml = format!(
			r#"[service]
log_level = "{log_level}"

[data]
characters = "{CHARACTERS_FILE}"
wishes     = "{WISHES_FILE}"
site       = "{SITE_FILE}"

[filters]
delimiter = "/"

[[filters.dimensions]]
id    = "school"
label = "学院"

[[filters.dimensions]]
id      = "length"
label   = "对戏长度"
kind    = "multi"
options = ["句", "段", "长段", "屏"]

[[filters.dimensions]]
id    = "tendency"
label = "倾向"
"#
		);

		self.write("roster.toml", &toml)
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner()
	}

	fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		fs::remove_dir_all(&self.root).map_err(|err| {
			Error::Message(format!("Failed to remove {}: {err}.", self.root.display()))
		})?;

		self.cleaned = true;

		Ok(())
	}
}
impl Drop for TestDataDir {
	fn drop(&mut self) {
		if let Err(err) = self.cleanup_inner() {
			eprintln!("Test data cleanup failed: {err}");
		}
	}
}

pub fn sample_dimensions() -> Vec<Dimension> {
	vec![
		Dimension {
			id: "school".to_string(),
			label: "学院".to_string(),
			kind: DimensionKind::Single,
			options: Vec::new(),
		},
		Dimension {
			id: "length".to_string(),
			label: "对戏长度".to_string(),
			kind: DimensionKind::Multi,
			options: ["句", "段", "长段", "屏"].into_iter().map(str::to_string).collect(),
		},
		Dimension {
			id: "tendency".to_string(),
			label: "倾向".to_string(),
			kind: DimensionKind::Single,
			options: Vec::new(),
		},
	]
}
