use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::{GameId, ParticipantId};

/// Smallest number of tricks a president may bid.
pub const MIN_PROMISE: u8 = 13;
/// Largest number of tricks a president may bid.
pub const MAX_PROMISE: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameType {
    #[serde(rename = "5M")]
    FiveMember,
    #[serde(rename = "6M")]
    SixMember,
}

impl GameType {
    /// Number of players seated at the table, including the died player.
    pub fn seats(self) -> usize {
        match self {
            GameType::FiveMember => 5,
            GameType::SixMember => 6,
        }
    }
}

/// Trump suit declared by the president.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Giru {
    Spade,
    Diamond,
    Heart,
    Clover,
    NoGi, // No trump suit, doubles the stakes
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineupError {
    #[error("participant {0} appears more than once in the lineup")]
    DuplicateParticipant(ParticipantId),
    #[error("expected {expected} opposition members, got {actual}")]
    OppositionSize { expected: usize, actual: usize },
}

/// Who sat where in a single game.
///
/// The variant carries the game type, so a died player can only exist in a
/// six-member game. Use [`Lineup::five_member`] and [`Lineup::six_member`] to
/// build a checked value; deserialized values should go through
/// [`Lineup::check`] before they are trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type")]
#[ts(export)]
pub enum Lineup {
    #[serde(rename = "5M")]
    FiveMember {
        president: ParticipantId,
        friend: Option<ParticipantId>,
        opposition: Vec<ParticipantId>,
    },
    #[serde(rename = "6M")]
    SixMember {
        president: ParticipantId,
        friend: Option<ParticipantId>,
        opposition: Vec<ParticipantId>,
        died: ParticipantId,
    },
}

impl Lineup {
    pub fn five_member(
        president: ParticipantId,
        friend: Option<ParticipantId>,
        opposition: Vec<ParticipantId>,
    ) -> Result<Self, LineupError> {
        let lineup = Lineup::FiveMember {
            president,
            friend,
            opposition,
        };
        lineup.check()?;
        Ok(lineup)
    }

    pub fn six_member(
        president: ParticipantId,
        friend: Option<ParticipantId>,
        opposition: Vec<ParticipantId>,
        died: ParticipantId,
    ) -> Result<Self, LineupError> {
        let lineup = Lineup::SixMember {
            president,
            friend,
            opposition,
            died,
        };
        lineup.check()?;
        Ok(lineup)
    }

    /// Verify seat counts and that nobody holds two seats.
    pub fn check(&self) -> Result<(), LineupError> {
        let expected = if self.friend().is_some() { 3 } else { 4 };
        let actual = self.opposition().len();
        if actual != expected {
            return Err(LineupError::OppositionSize { expected, actual });
        }

        let mut seen = HashSet::new();
        for id in self.participant_ids() {
            if !seen.insert(id) {
                return Err(LineupError::DuplicateParticipant(id));
            }
        }

        Ok(())
    }

    pub fn game_type(&self) -> GameType {
        match self {
            Lineup::FiveMember { .. } => GameType::FiveMember,
            Lineup::SixMember { .. } => GameType::SixMember,
        }
    }

    pub fn president(&self) -> ParticipantId {
        match self {
            Lineup::FiveMember { president, .. } | Lineup::SixMember { president, .. } => {
                *president
            }
        }
    }

    pub fn friend(&self) -> Option<ParticipantId> {
        match self {
            Lineup::FiveMember { friend, .. } | Lineup::SixMember { friend, .. } => *friend,
        }
    }

    pub fn opposition(&self) -> &[ParticipantId] {
        match self {
            Lineup::FiveMember { opposition, .. } | Lineup::SixMember { opposition, .. } => {
                opposition
            }
        }
    }

    pub fn died(&self) -> Option<ParticipantId> {
        match self {
            Lineup::FiveMember { .. } => None,
            Lineup::SixMember { died, .. } => Some(*died),
        }
    }

    /// Every referenced participant: president, friend, opposition, died.
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        let mut ids = Vec::with_capacity(self.game_type().seats());
        ids.push(self.president());
        ids.extend(self.friend());
        ids.extend_from_slice(self.opposition());
        ids.extend(self.died());
        ids
    }
}

/// One played round within a room.
///
/// Stored records predate some fields, so `giru` and `created_at` may be
/// absent. A record without a giru scores as a plain game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameRecord {
    pub id: GameId,
    #[serde(default)]
    pub giru: Option<Giru>,
    pub promise: u8,
    pub win: bool,
    pub run: bool,
    pub lineup: Lineup,
    #[serde(default)]
    pub created_at: String, // ISO 8601 string
    pub deleted_at: Option<String>, // Set when the dealer removes the game
}

impl GameRecord {
    pub fn game_type(&self) -> GameType {
        self.lineup.game_type()
    }

    pub fn is_no_gi(&self) -> bool {
        self.giru == Some(Giru::NoGi)
    }

    pub fn is_run(&self) -> bool {
        self.run
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A game as submitted by a client, before it has an id or timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameDraft {
    pub giru: Giru,
    pub promise: u8,
    pub win: bool,
    pub run: bool,
    pub lineup: Lineup,
}

impl GameDraft {
    pub fn into_record(self, id: GameId, created_at: String) -> GameRecord {
        GameRecord {
            id,
            giru: Some(self.giru),
            promise: self.promise,
            win: self.win,
            run: self.run,
            lineup: self.lineup,
            created_at,
            deleted_at: None,
        }
    }
}
