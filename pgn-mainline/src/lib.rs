mod error;
mod headers;
mod reader;
mod strip;
mod tokens;

pub use self::error::{FormatError, ReadError};
pub use self::headers::{Headers, Tag};
pub use self::reader::{read_all_games, GameRecord, GameRecords};
pub use self::strip::strip_movetext;
pub use self::tokens::{mainline_moves, without_checkmarks};
