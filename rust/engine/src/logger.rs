use serde::{Deserialize, Serialize};

use crate::board::{Move, Player};
use crate::rules::Verdict;

/// Records a single placement during a game, along with the verdict the
/// board produced once the move was applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The mark that was placed
    pub player: Player,
    /// Where it was placed
    pub mv: Move,
    /// Board classification after the move
    pub verdict: Verdict,
}

/// Complete record of one game, serialized to JSONL for session logs.
/// Records are write-only observability output; nothing reads them back to
/// resume play.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed driving the AI's random tie-breaking, if one was set
    pub seed: Option<u64>,
    /// Name of the decision strategy the computer used
    pub strategy: String,
    /// Chronological list of all moves played
    pub moves: Vec<MoveRecord>,
    /// Result summary ("X wins", "O wins", "draw", "abandoned")
    pub result: String,
    /// Timestamp when the game finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`GameRecord`]s to a file, one JSON object per line.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_ids_are_sequential() {
        let mut logger = GameLogger::with_seq_for_test("20260825");
        assert_eq!(logger.next_id(), "20260825-000001");
        assert_eq!(logger.next_id(), "20260825-000002");
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = GameRecord {
            game_id: format_game_id("20260825", 7),
            seed: Some(42),
            strategy: "exhaustive".to_string(),
            moves: vec![MoveRecord {
                player: Player::X,
                mv: Move::new(1, 1),
                verdict: Verdict::InProgress,
            }],
            result: "draw".to_string(),
            ts: None,
        };
        let line = serde_json::to_string(&record).unwrap();
        let parsed: GameRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }
}
