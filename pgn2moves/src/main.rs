use pgn_mainline::{GameRecord, GameRecords, Headers};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{ser::SerializeMap, Serialize};
use std::{fs::File, io::BufReader, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PGN file
    file: String,

    /// Path of the YAML file (if not specified, same as the PGN file with the extension changed)
    #[arg(short, long)]
    output: Option<String>,
}

struct SerializedTags<'a>(&'a Headers);

impl<'a> Serialize for SerializedTags<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for tag in self.0.iter() {
            map.serialize_entry(&tag.key, &tag.value)?;
        }

        map.end()
    }
}

struct SerializedGame<'a>(&'a GameRecord);

impl<'a> Serialize for SerializedGame<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;

        map.serialize_entry("tags", &SerializedTags(&self.0.headers))?;
        map.serialize_entry("moves", &self.0.moves)?;

        map.end()
    }
}

fn collect_games(pgn_path: &PathBuf) -> Result<Vec<GameRecord>> {
    let file = File::open(pgn_path).context(format!(
        "Could not open file {}",
        pgn_path.to_string_lossy()
    ))?;

    let mut games = Vec::new();
    for record in GameRecords::new(BufReader::new(file)) {
        games.push(record?);
    }

    Ok(games)
}

fn write_yaml(yaml_path: &PathBuf, games: &[GameRecord]) -> Result<()> {
    let output = File::create(yaml_path).context(format!(
        "Could not open file {} for writing",
        yaml_path.to_string_lossy()
    ))?;

    let serialized: Vec<SerializedGame> = games.iter().map(SerializedGame).collect();

    serde_yaml::to_writer(output, &serialized).context(format!(
        "Error writing YAML data to {}",
        yaml_path.to_string_lossy()
    ))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pgn_path = PathBuf::from(cli.file);

    let games = collect_games(&pgn_path).context("Unable to parse PGN file")?;

    let yaml_path = match cli.output {
        Some(path) => PathBuf::from(path),
        None => {
            let mut path = pgn_path.clone();
            path.set_extension("yaml");
            path
        }
    };

    println!("Writing YAML file to {}", yaml_path.to_string_lossy());
    write_yaml(&yaml_path, &games)?;

    Ok(())
}
