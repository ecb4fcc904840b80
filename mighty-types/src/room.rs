use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{Participant, ParticipantId, RoomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum RoomState {
    InProgress, // Games may be added or removed
    Ended,      // Closed by the dealer, waiting for an admin
    Approved,   // Stats written back to profiles
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Room {
    pub id: RoomId,
    pub title: String,
    pub state: RoomState,
    pub dealer_id: ParticipantId,
    pub participants: Vec<Participant>,
    pub approved_at: Option<String>, // ISO 8601 string
}

impl Room {
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn is_participant(&self, id: ParticipantId) -> bool {
        self.participant(id).is_some()
    }

    pub fn is_dealer(&self, id: ParticipantId) -> bool {
        self.dealer_id == id
    }
}
