use std::collections::HashMap;

use mighty_types::{GameRecord, GameType, ModeStats, Participant, ParticipantId, ProfileStats, Room};

use crate::scoring::{Role, ScoreEngine};

/// Profile statistics a room contributes to its participants' careers.
///
/// Applying the contributions to stored profiles happens once, when an admin
/// approves the room; see [`crate::room::RoomLifecycle::approve`].
pub struct CareerEngine;

impl CareerEngine {
    fn mode_mut(stats: &mut ProfileStats, game_type: GameType) -> &mut ModeStats {
        match game_type {
            GameType::FiveMember => &mut stats.five_member,
            GameType::SixMember => &mut stats.six_member,
        }
    }

    fn record_president_bonus(mode: &mut ModeStats, game: &GameRecord) {
        let bonus = &mut mode.optional_stats;
        if game.is_no_gi() {
            bonus.no_gi += 1;
            if game.is_run() {
                if game.win {
                    bonus.no_gi_run += 1;
                } else {
                    bonus.no_gi_back_run += 1;
                }
            }
        } else if game.is_run() {
            if game.win {
                bonus.run += 1;
            } else {
                bonus.back_run += 1;
            }
        }
    }

    /// What a single game adds to each referenced participant's profile.
    pub fn game_contributions(game: &GameRecord) -> Vec<(ParticipantId, ProfileStats)> {
        ScoreEngine::game_deltas(game)
            .into_iter()
            .map(|delta| {
                let mut stats = ProfileStats::default();
                let mode = Self::mode_mut(&mut stats, game.game_type());
                match delta.role {
                    Role::President => {
                        mode.president.record(game.win);
                        Self::record_president_bonus(mode, game);
                    }
                    Role::Friend => mode.friend.record(game.win),
                    Role::Opposition => mode.opposition.record(!game.win),
                    Role::Died => mode.died += 1,
                }
                (delta.participant_id, stats)
            })
            .collect()
    }

    /// Sum the contributions of every live game in a room, one entry per
    /// room participant in room order.
    pub fn room_contributions(room: &Room, games: &[GameRecord]) -> Vec<(Participant, ProfileStats)> {
        let mut totals: HashMap<ParticipantId, ProfileStats> = room
            .participants
            .iter()
            .map(|p| (p.id, ProfileStats::default()))
            .collect();

        for game in games.iter().filter(|g| !g.is_deleted()) {
            for (participant_id, stats) in Self::game_contributions(game) {
                match totals.get_mut(&participant_id) {
                    Some(total) => total.merge(&stats),
                    None => tracing::debug!(
                        "Room {} game {} references non-member {}",
                        room.id,
                        game.id,
                        participant_id
                    ),
                }
            }
        }

        room.participants
            .iter()
            .map(|p| {
                let stats = totals.get(&p.id).copied().unwrap_or_default();
                (p.clone(), stats)
            })
            .collect()
    }
}
