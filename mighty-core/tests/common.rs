#![allow(dead_code)]

use mighty_types::{GameRecord, Giru, Lineup, Participant, ParticipantId};
use uuid::Uuid;

/// Creates a named participant with a fresh id
pub fn create_participant(name: &str) -> Participant {
    Participant {
        id: Uuid::new_v4(),
        display_name: name.to_string(),
    }
}

/// Creates the five-member table A, B, C, D, E
pub fn create_table() -> Vec<Participant> {
    ["A", "B", "C", "D", "E"]
        .iter()
        .map(|name| create_participant(name))
        .collect()
}

/// Creates the six-member table A through F
pub fn create_six_table() -> Vec<Participant> {
    ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|name| create_participant(name))
        .collect()
}

pub fn ids(participants: &[Participant]) -> Vec<ParticipantId> {
    participants.iter().map(|p| p.id).collect()
}

/// Builds a live game record around a lineup
pub fn create_game(lineup: Lineup, win: bool, no_gi: bool, run: bool) -> GameRecord {
    GameRecord {
        id: Uuid::new_v4(),
        giru: Some(if no_gi { Giru::NoGi } else { Giru::Spade }),
        promise: 14,
        win,
        run,
        lineup,
        created_at: chrono::Utc::now().to_rfc3339(),
        deleted_at: None,
    }
}

/// President = first, friend = second (if requested), rest in opposition
pub fn five_member_lineup(table: &[Participant], with_friend: bool) -> Lineup {
    let ids = ids(table);
    if with_friend {
        Lineup::five_member(ids[0], Some(ids[1]), ids[2..5].to_vec()).unwrap()
    } else {
        Lineup::five_member(ids[0], None, ids[1..5].to_vec()).unwrap()
    }
}

/// Same as [`five_member_lineup`] with the last seat sitting out
pub fn six_member_lineup(table: &[Participant], with_friend: bool) -> Lineup {
    let ids = ids(table);
    if with_friend {
        Lineup::six_member(ids[0], Some(ids[1]), ids[2..5].to_vec(), ids[5]).unwrap()
    } else {
        Lineup::six_member(ids[0], None, ids[1..5].to_vec(), ids[5]).unwrap()
    }
}

/// Marks a game as removed by the dealer
pub fn soft_delete(mut game: GameRecord) -> GameRecord {
    game.deleted_at = Some(chrono::Utc::now().to_rfc3339());
    game
}

/// Every (win, no_gi, run, with_friend) combination
pub fn all_flag_combinations() -> Vec<(bool, bool, bool, bool)> {
    let mut combos = Vec::new();
    for win in [true, false] {
        for no_gi in [true, false] {
            for run in [true, false] {
                for with_friend in [true, false] {
                    combos.push((win, no_gi, run, with_friend));
                }
            }
        }
    }
    combos
}
