use std::collections::HashMap;

use mighty_types::{GameRecord, Participant, ParticipantId, ScoreRow};
use serde::{Deserialize, Serialize};

/// Seat a participant held in one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    President,
    Friend,
    Opposition,
    Died,
}

/// Score change for one participant in one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub participant_id: ParticipantId,
    pub role: Role,
    pub score: i32,
}

pub struct ScoreEngine;

impl ScoreEngine {
    /// Signed stake of a game before role weights are applied.
    ///
    /// No-giru and run each double the stake and compound, so a game with
    /// both is worth four times a plain one.
    pub fn base_multiplier(game: &GameRecord) -> i32 {
        let outcome = if game.win { 1 } else { -1 };
        let no_gi = if game.is_no_gi() { 2 } else { 1 };
        let run = if game.is_run() { 2 } else { 1 };
        outcome * no_gi * run
    }

    /// Weight applied to the base multiplier for a role.
    ///
    /// A president without a friend plays against the whole table and
    /// carries double weight. Weights always sum to zero across a lineup.
    pub fn role_weight(role: Role, has_friend: bool) -> i32 {
        match role {
            Role::President if has_friend => 2,
            Role::President => 4,
            Role::Friend => 1,
            Role::Opposition => -1,
            Role::Died => 0,
        }
    }

    /// Per-participant deltas for a single game, in lineup order.
    pub fn game_deltas(game: &GameRecord) -> Vec<ScoreDelta> {
        let base = Self::base_multiplier(game);
        let lineup = &game.lineup;
        let has_friend = lineup.friend().is_some();

        let mut seats = Vec::with_capacity(lineup.game_type().seats());
        seats.push((lineup.president(), Role::President));
        seats.extend(lineup.friend().map(|id| (id, Role::Friend)));
        seats.extend(lineup.opposition().iter().map(|id| (*id, Role::Opposition)));
        seats.extend(lineup.died().map(|id| (id, Role::Died)));

        seats
            .into_iter()
            .map(|(participant_id, role)| ScoreDelta {
                participant_id,
                role,
                score: base * Self::role_weight(role, has_friend),
            })
            .collect()
    }

    /// Fold a game's role outcomes into a row. The friend shares the
    /// president's outcome and the opposition gets the complement.
    fn tally(row: &mut ScoreRow, delta: &ScoreDelta, win: bool) {
        row.score += delta.score;
        match delta.role {
            Role::President => row.president_record.record(win),
            Role::Friend => row.friend_record.record(win),
            Role::Opposition => row.opposition_record.record(!win),
            Role::Died => {}
        }
    }

    /// Compute every participant's standing from a room's games.
    ///
    /// Rows come back in participant order. Soft-deleted games are skipped
    /// and references to participants outside the list are ignored, so one
    /// stale record never blocks the whole table.
    pub fn aggregate(participants: &[Participant], games: &[GameRecord]) -> Vec<ScoreRow> {
        let mut rows: Vec<ScoreRow> = participants.iter().cloned().map(ScoreRow::new).collect();
        // First row wins for a repeated id, like `Room::participant`
        let mut index: HashMap<ParticipantId, usize> = HashMap::new();
        for (i, p) in participants.iter().enumerate() {
            index.entry(p.id).or_insert(i);
        }

        for game in games.iter().filter(|g| !g.is_deleted()) {
            for delta in Self::game_deltas(game) {
                match index.get(&delta.participant_id) {
                    Some(&i) => Self::tally(&mut rows[i], &delta, game.win),
                    None => tracing::debug!(
                        "Ignoring game {} reference to unknown participant {}",
                        game.id,
                        delta.participant_id
                    ),
                }
            }
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mighty_types::{Giru, Lineup};
    use uuid::Uuid;

    fn participants(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant {
                id: Uuid::new_v4(),
                display_name: format!("Player {}", i),
            })
            .collect()
    }

    fn game(lineup: Lineup, win: bool, no_gi: bool, run: bool) -> GameRecord {
        GameRecord {
            id: Uuid::new_v4(),
            giru: Some(if no_gi { Giru::NoGi } else { Giru::Spade }),
            promise: 13,
            win,
            run,
            lineup,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            deleted_at: None,
        }
    }

    fn score_of(deltas: &[ScoreDelta], id: ParticipantId) -> i32 {
        deltas
            .iter()
            .find(|d| d.participant_id == id)
            .map(|d| d.score)
            .unwrap()
    }

    #[test]
    fn test_base_multiplier_compounds() {
        let p = participants(5);
        let ids: Vec<_> = p.iter().map(|p| p.id).collect();
        let lineup = Lineup::five_member(ids[0], None, ids[1..].to_vec()).unwrap();

        assert_eq!(ScoreEngine::base_multiplier(&game(lineup.clone(), true, false, false)), 1);
        assert_eq!(ScoreEngine::base_multiplier(&game(lineup.clone(), true, true, false)), 2);
        assert_eq!(ScoreEngine::base_multiplier(&game(lineup.clone(), true, false, true)), 2);
        assert_eq!(ScoreEngine::base_multiplier(&game(lineup.clone(), false, true, true)), -4);
    }

    #[test]
    fn test_president_with_friend() {
        let p = participants(5);
        let ids: Vec<_> = p.iter().map(|p| p.id).collect();
        let lineup = Lineup::five_member(ids[0], Some(ids[1]), ids[2..].to_vec()).unwrap();
        let deltas = ScoreEngine::game_deltas(&game(lineup, true, false, false));

        assert_eq!(score_of(&deltas, ids[0]), 2);
        assert_eq!(score_of(&deltas, ids[1]), 1);
        for id in &ids[2..] {
            assert_eq!(score_of(&deltas, *id), -1);
        }
        assert_eq!(deltas.iter().map(|d| d.score).sum::<i32>(), 0);
    }

    #[test]
    fn test_president_alone() {
        let p = participants(5);
        let ids: Vec<_> = p.iter().map(|p| p.id).collect();
        let lineup = Lineup::five_member(ids[0], None, ids[1..].to_vec()).unwrap();
        let deltas = ScoreEngine::game_deltas(&game(lineup, true, false, false));

        assert_eq!(score_of(&deltas, ids[0]), 4);
        for id in &ids[1..] {
            assert_eq!(score_of(&deltas, *id), -1);
        }
    }

    #[test]
    fn test_died_player_has_zero_delta() {
        let p = participants(6);
        let ids: Vec<_> = p.iter().map(|p| p.id).collect();
        let lineup =
            Lineup::six_member(ids[0], Some(ids[1]), ids[2..5].to_vec(), ids[5]).unwrap();
        let deltas = ScoreEngine::game_deltas(&game(lineup, false, true, false));

        let died = deltas.iter().find(|d| d.role == Role::Died).unwrap();
        assert_eq!(died.participant_id, ids[5]);
        assert_eq!(died.score, 0);
        assert_eq!(deltas.len(), 6);
    }

    #[test]
    fn test_aggregate_ignores_unknown_participant() {
        let p = participants(5);
        let ids: Vec<_> = p.iter().map(|p| p.id).collect();
        let stranger = Uuid::new_v4();

        // Stranger was a member when the game was recorded but has since left
        let lineup = Lineup::five_member(ids[0], Some(stranger), ids[1..4].to_vec()).unwrap();
        let rows = ScoreEngine::aggregate(&p, &[game(lineup, true, false, false)]);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].score, 2);
        assert_eq!(rows[0].president_record.win, 1);
        assert_eq!(rows[4].score, 0);
        assert!(rows.iter().all(|r| r.participant.id != stranger));
    }

    #[test]
    fn test_aggregate_credits_first_row_of_repeated_id() {
        let mut p = participants(5);
        let repeated = p[0].clone();
        p.push(repeated);
        let ids: Vec<_> = p.iter().map(|p| p.id).collect();
        let lineup = Lineup::five_member(ids[0], None, ids[1..5].to_vec()).unwrap();
        let rows = ScoreEngine::aggregate(&p, &[game(lineup, true, false, false)]);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].score, 4);
        assert_eq!(rows[0].president_record.win, 1);
        assert_eq!(rows[5], ScoreRow::new(p[0].clone()));
    }

    #[test]
    fn test_aggregate_without_games() {
        let p = participants(5);
        let rows = ScoreEngine::aggregate(&p, &[]);

        assert_eq!(rows.len(), 5);
        for (row, participant) in rows.iter().zip(&p) {
            assert_eq!(row, &ScoreRow::new(participant.clone()));
        }
    }
}
