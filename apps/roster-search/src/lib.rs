pub mod command;
pub mod render;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::command::Command;
use roster_domain::{QueryChange, Selection, StatusMode};
use roster_service::FilterEngine;

#[derive(Debug, Parser)]
#[command(
	version = roster_cli::VERSION,
	rename_all = "kebab",
	styles = roster_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Case-insensitive text matched against names and descriptions.
	#[arg(long, short = 't', value_name = "TEXT", default_value = "")]
	pub text: String,
	/// Restrict a dimension to one value. Repeatable.
	#[arg(long, short = 's', value_name = "DIMENSION=VALUE", value_parser = roster_cli::parse_key_value)]
	pub select: Vec<(String, String)>,
	#[arg(long, value_name = "MODE", default_value_t = StatusMode::Any)]
	pub status: StatusMode,
	/// Print the selectable options of every dimension.
	#[arg(long)]
	pub vocabulary: bool,
	/// Print the community rules and links.
	#[arg(long)]
	pub rules: bool,
	/// Print the wish wall.
	#[arg(long)]
	pub wishes: bool,
	/// Read query commands from stdin, re-rendering after each one.
	#[arg(long, short = 'i')]
	pub interactive: bool,
}
impl Args {
	/// The query described on the command line, as state transitions.
	pub fn initial_changes(&self) -> Vec<QueryChange> {
		let mut changes = vec![QueryChange::Text(self.text.clone())];

		changes.extend(self.select.iter().map(|(dimension, value)| QueryChange::Select {
			dimension: dimension.clone(),
			selection: Selection::from(value.as_str()),
		}));
		changes.push(QueryChange::Status(self.status));

		changes
	}
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = roster_config::load(&args.config)?;
	init_tracing(&config)?;

	tracing::info!(
		version = roster_cli::VERSION,
		config = %args.config.display(),
		"Roster search starting."
	);

	let mut engine = FilterEngine::bootstrap(&config).await;

	if let Some(directory) = engine.directory() {
		tracing::info!(characters = directory.roster.len(), "Roster ready.");
	}

	for change in args.initial_changes() {
		engine.apply(change);
	}

	if args.vocabulary {
		print!("{}", render::vocabulary(&engine.vocabulary()));
	}
	if args.rules {
		print!("{}", site(&engine));
	}
	if args.wishes {
		print!("{}", wish_wall(&engine));
	}

	if args.interactive {
		interactive(&mut engine).await?;
	} else {
		println!("{}", render::outcome(&engine.search()));
	}

	match engine.failure() {
		Some(err) => Err(eyre::eyre!("{err}")),
		None => Ok(()),
	}
}

async fn interactive(engine: &mut FilterEngine) -> color_eyre::Result<()> {
	let mut lines = BufReader::new(tokio::io::stdin()).lines();

	println!("{}", render::outcome(&engine.search()));

	while let Some(line) = lines.next_line().await? {
		match command::parse(&line) {
			Ok(Command::Change(change)) => println!("{}", render::outcome(&engine.apply(change))),
			Ok(Command::Vocabulary) => print!("{}", render::vocabulary(&engine.vocabulary())),
			Ok(Command::Rules) => print!("{}", site(engine)),
			Ok(Command::Wishes) => print!("{}", wish_wall(engine)),
			Ok(Command::Help) => println!("{}", command::HELP),
			Ok(Command::Quit) => break,
			Ok(Command::Empty) => {},
			Err(err) => eprintln!("{err}"),
		}
	}

	Ok(())
}

/// Rules followed by links, or the load state message when no data is attached.
pub fn site(engine: &FilterEngine) -> String {
	match engine.directory() {
		Some(directory) =>
			format!("{}{}", render::rules(&directory.site.rules), render::links(&directory.site.links)),
		None => format!("{}\n", render::outcome(&engine.search())),
	}
}

pub fn wish_wall(engine: &FilterEngine) -> String {
	match engine.directory() {
		Some(directory) => render::wishes(&directory.wishes),
		None => format!("{}\n", render::outcome(&engine.search())),
	}
}

fn init_tracing(config: &roster_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	Ok(())
}
