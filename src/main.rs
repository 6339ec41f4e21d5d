#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "thriftdoc", about = "Thrift compact message inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info {
		path: PathBuf,
	},
	Decode {
		path: PathBuf,
		#[arg(long = "type")]
		type_name: Option<String>,
		#[arg(long)]
		json: bool,
		#[arg(long = "max-depth")]
		max_depth: Option<u32>,
		#[arg(long = "standard-ids")]
		standard_ids: bool,
		#[arg(long = "strict-bool")]
		strict_bool: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> thriftdoc::compact::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info { path } => cmd::info::run(path),
		Commands::Decode {
			path,
			type_name,
			json,
			max_depth,
			standard_ids,
			strict_bool,
		} => cmd::decode::run(path, type_name, json, max_depth, standard_ids, strict_bool),
	}
}
