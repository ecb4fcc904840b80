use mighty_types::{
    GameDraft, GameType, LineupError, MAX_PROMISE, MIN_PROMISE, ParticipantId, Room, RoomState,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("room is {0:?} and no longer accepts games")]
    RoomClosed(RoomState),
    #[error("invalid lineup: {0}")]
    Lineup(#[from] LineupError),
    #[error("promise {0} is outside 13..=20")]
    PromiseOutOfRange(u8),
    #[error("participant {0} is not a member of the room")]
    NotAParticipant(ParticipantId),
    #[error("{game_type:?} game needs {expected} room participants, room has {actual}")]
    ParticipantCountMismatch {
        game_type: GameType,
        expected: usize,
        actual: usize,
    },
}

/// Check a submitted game against the room it is being added to.
///
/// The score engine trusts its input, so everything it relies on is
/// enforced here before a game is stored.
pub fn validate_draft(draft: &GameDraft, room: &Room) -> Result<(), ValidationError> {
    if room.state != RoomState::InProgress {
        return Err(ValidationError::RoomClosed(room.state));
    }

    draft.lineup.check()?;

    if !(MIN_PROMISE..=MAX_PROMISE).contains(&draft.promise) {
        return Err(ValidationError::PromiseOutOfRange(draft.promise));
    }

    let game_type = draft.lineup.game_type();
    if room.participants.len() != game_type.seats() {
        return Err(ValidationError::ParticipantCountMismatch {
            game_type,
            expected: game_type.seats(),
            actual: room.participants.len(),
        });
    }

    if let Some(outsider) = draft
        .lineup
        .participant_ids()
        .into_iter()
        .find(|id| !room.is_participant(*id))
    {
        return Err(ValidationError::NotAParticipant(outsider));
    }

    Ok(())
}
