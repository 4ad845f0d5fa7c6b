//! Seeding a game tree from recorded games
//!
//! Each CSV row is one move sequence, inserted as a path with probability
//! 0.0. Rows may have any length and there is no header. A token containing
//! any of `?`, `Y` or `N` is read as a status, anything else as a guess.

use super::GameTree;
use crate::core::{Move, Status, Word};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const STATUS_SYMBOLS: [char; 3] = ['?', 'Y', 'N'];

/// Load a game tree from a seed file
///
/// # Errors
/// Returns `Error::Io` if the file cannot be opened, `Error::Csv` if it is
/// not valid CSV and `Error::MalformedSeedRow` for a row that does not form
/// a valid move sequence.
pub fn load_game_tree(path: impl AsRef<Path>) -> Result<GameTree> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    let tree = parse_game_tree(file)?;
    log::info!("seeded game tree from {}: {} nodes", path.display(), tree.len());
    Ok(tree)
}

/// Build a game tree from seed rows read from `reader`
///
/// # Errors
/// See `load_game_tree`.
pub fn parse_game_tree<R: Read>(reader: R) -> Result<GameTree> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut tree = GameTree::new();
    for (index, record) in csv.records().enumerate() {
        let record = record?;
        let row = record
            .position()
            .map_or(index + 1, |position| position.line() as usize);
        let malformed = |reason: String| Error::MalformedSeedRow { row, reason };

        let sequence = record
            .iter()
            .filter(|token| !token.is_empty())
            .map(|token| parse_token(token).map_err(|err| format!("'{token}': {err}")))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(malformed)?;

        tree.insert_move_sequence(&sequence, 0.0)
            .map_err(|err| malformed(err.to_string()))?;
    }

    Ok(tree)
}

fn parse_token(token: &str) -> Result<Move> {
    if token.contains(STATUS_SYMBOLS) {
        Ok(Move::Status(token.parse::<Status>()?))
    } else {
        Ok(Move::Guess(Word::new(token)?))
    }
}
