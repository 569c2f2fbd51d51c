use crate::error::ReadError;
use crate::headers::{parse_tag_line, Headers};
use crate::strip::strip_movetext;
use crate::tokens::mainline_moves;

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// One parsed game: its tag pairs and its mainline moves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameRecord {
    pub headers: Headers,
    pub moves: Vec<String>,
}

impl GameRecord {
    fn has_game(&self) -> bool {
        !self.headers.is_empty() || !self.moves.is_empty()
    }
}

enum Section {
    Headers,
    Moves,
}

/// Lazy, forward-only iterator of the games in a PGN stream.
///
/// A malformed game yields `Err` with its 1-based ordinal; the iterator
/// stays usable so the caller can skip it and continue with the next game.
pub struct GameRecords<R: BufRead> {
    lines: Lines<R>,
    next_ordinal: usize,
    finished: bool,
}

impl<R: BufRead> GameRecords<R> {
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            next_ordinal: 1,
            finished: false,
        }
    }

    fn next_record(&mut self, ordinal: usize) -> Result<Option<GameRecord>, ReadError> {
        let mut headers = Headers::default();
        let mut movetext = String::new();
        let mut section = Section::Headers;

        for line_result in self.lines.by_ref() {
            let line = line_result?;
            let line = line.trim();

            match section {
                Section::Headers => {
                    if line.is_empty() {
                        continue;
                    }
                    match parse_tag_line(line) {
                        Some((key, value)) => headers.insert(key, value),
                        None => {
                            // First content line that is not a tag pair:
                            // the move text starts here.
                            movetext.push_str(line);
                            movetext.push('\n');
                            section = Section::Moves;
                        }
                    }
                }
                Section::Moves => {
                    if line.is_empty() {
                        break;
                    }
                    movetext.push_str(line);
                    movetext.push('\n');
                }
            }
        }

        let moves = if movetext.is_empty() {
            Vec::new()
        } else {
            let mainline = strip_movetext(&movetext)
                .map_err(|source| ReadError::MalformedGame { ordinal, source })?;
            mainline_moves(&mainline)
        };

        let record = GameRecord { headers, moves };
        Ok(record.has_game().then_some(record))
    }
}

impl<R: BufRead> Iterator for GameRecords<R> {
    type Item = Result<GameRecord, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        match self.next_record(ordinal) {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                if matches!(error, ReadError::Io(_)) {
                    self.finished = true;
                }
                Some(Err(error))
            }
        }
    }
}

/// Reads every game of a PGN file, propagating the first error.
pub fn read_all_games(path: impl AsRef<Path>) -> Result<Vec<GameRecord>, ReadError> {
    let file = File::open(path)?;
    GameRecords::new(BufReader::new(file)).collect()
}
