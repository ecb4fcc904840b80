use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Participant;

/// Win/lose counter for one role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoleRecord {
    pub win: u32,
    pub lose: u32,
}

impl RoleRecord {
    pub fn record(&mut self, won: bool) {
        if won {
            self.win += 1;
        } else {
            self.lose += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.win + self.lose
    }

    pub fn merge(&mut self, other: &RoleRecord) {
        self.win += other.win;
        self.lose += other.lose;
    }
}

/// A participant's standing in a room. Never persisted, always recomputed
/// from the room's games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRow {
    pub participant: Participant,
    pub score: i32,
    pub president_record: RoleRecord,
    pub friend_record: RoleRecord,
    pub opposition_record: RoleRecord,
}

impl ScoreRow {
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            score: 0,
            president_record: RoleRecord::default(),
            friend_record: RoleRecord::default(),
            opposition_record: RoleRecord::default(),
        }
    }
}

/// Win percentages per role, `None` when the role was never played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WinRatios {
    pub president: Option<f64>,
    pub friend: Option<f64>,
    pub opposition: Option<f64>,
}
