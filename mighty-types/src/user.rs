use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{ParticipantId, RoleRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Participant {
    pub id: ParticipantId,
    pub display_name: String,
}

/// Bonus outcomes tracked for presidents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionalStats {
    pub run: u32,
    pub back_run: u32,
    pub no_gi: u32,
    pub no_gi_run: u32,
    pub no_gi_back_run: u32,
}

impl OptionalStats {
    pub fn merge(&mut self, other: &OptionalStats) {
        self.run += other.run;
        self.back_run += other.back_run;
        self.no_gi += other.no_gi;
        self.no_gi_run += other.no_gi_run;
        self.no_gi_back_run += other.no_gi_back_run;
    }
}

/// Career counters for one table size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModeStats {
    pub president: RoleRecord,
    pub friend: RoleRecord,
    pub opposition: RoleRecord,
    pub died: u32, // Only moves in six-member games
    pub optional_stats: OptionalStats,
}

impl ModeStats {
    pub fn merge(&mut self, other: &ModeStats) {
        self.president.merge(&other.president);
        self.friend.merge(&other.friend);
        self.opposition.merge(&other.opposition);
        self.died += other.died;
        self.optional_stats.merge(&other.optional_stats);
    }
}

/// Long-lived statistics kept on a user's profile across every approved room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileStats {
    pub five_member: ModeStats,
    pub six_member: ModeStats,
}

impl ProfileStats {
    pub fn merge(&mut self, other: &ProfileStats) {
        self.five_member.merge(&other.five_member);
        self.six_member.merge(&other.six_member);
    }

    pub fn is_empty(&self) -> bool {
        *self == ProfileStats::default()
    }
}
