use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GameDraft, GameRecord, Participant, ProfileStats, Room, ScoreRow, WinRatios};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRequest {
    pub participants: Vec<Participant>,
    pub games: Vec<GameRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBoardEntry {
    #[serde(flatten)]
    pub row: ScoreRow,
    pub win_ratios: WinRatios,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CareerRequest {
    pub room: Room,
    pub games: Vec<GameRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CareerEntry {
    pub participant: Participant,
    pub stats: ProfileStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidateGameRequest {
    pub room: Room,
    pub game: GameDraft,
}
