use chrono::{DateTime, Utc};
use mighty_types::{ParticipantId, Room, RoomState};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("room is {0:?} and can no longer be changed")]
    AlreadyClosed(RoomState),
    #[error("only the dealer may do this")]
    NotDealer,
    #[error("room must be ended before approval, it is {0:?}")]
    NotEnded(RoomState),
}

/// Result of an approval attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    /// First approval; the caller should write profile stats back now.
    Approved,
    /// Stats were written on an earlier approval and must not be applied again.
    AlreadyApproved,
}

/// Room state machine: `InProgress -> Ended -> Approved`.
pub struct RoomLifecycle;

impl RoomLifecycle {
    pub fn ensure_accepts_games(room: &Room) -> Result<(), RoomError> {
        match room.state {
            RoomState::InProgress => Ok(()),
            state => Err(RoomError::AlreadyClosed(state)),
        }
    }

    /// Only the dealer may remove a game, and only while the room is open.
    pub fn ensure_can_delete_game(room: &Room, actor: ParticipantId) -> Result<(), RoomError> {
        Self::ensure_accepts_games(room)?;
        if !room.is_dealer(actor) {
            return Err(RoomError::NotDealer);
        }
        Ok(())
    }

    pub fn end(room: &mut Room, actor: ParticipantId) -> Result<(), RoomError> {
        Self::ensure_accepts_games(room)?;
        if !room.is_dealer(actor) {
            return Err(RoomError::NotDealer);
        }

        room.state = RoomState::Ended;
        tracing::info!("Room {} ended by dealer {}", room.id, actor);
        Ok(())
    }

    pub fn approve(room: &mut Room, now: DateTime<Utc>) -> Result<Approval, RoomError> {
        if room.state == RoomState::Approved || room.approved_at.is_some() {
            return Ok(Approval::AlreadyApproved);
        }
        if room.state != RoomState::Ended {
            return Err(RoomError::NotEnded(room.state));
        }

        room.state = RoomState::Approved;
        room.approved_at = Some(now.to_rfc3339());
        tracing::info!("Room {} approved", room.id);
        Ok(Approval::Approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mighty_types::Participant;
    use uuid::Uuid;

    fn open_room() -> Room {
        let participants: Vec<Participant> = (0..5)
            .map(|i| Participant {
                id: Uuid::new_v4(),
                display_name: format!("Player {}", i),
            })
            .collect();

        Room {
            id: Uuid::new_v4(),
            title: "Lifecycle".to_string(),
            state: RoomState::InProgress,
            dealer_id: participants[0].id,
            participants,
            approved_at: None,
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let mut room = open_room();
        let dealer = room.dealer_id;

        assert!(RoomLifecycle::ensure_accepts_games(&room).is_ok());
        RoomLifecycle::end(&mut room, dealer).unwrap();
        assert_eq!(room.state, RoomState::Ended);
        assert_eq!(
            RoomLifecycle::ensure_accepts_games(&room),
            Err(RoomError::AlreadyClosed(RoomState::Ended))
        );

        assert_eq!(RoomLifecycle::approve(&mut room, Utc::now()), Ok(Approval::Approved));
        assert_eq!(room.state, RoomState::Approved);
        assert!(room.approved_at.is_some());
    }

    #[test]
    fn test_only_dealer_can_end() {
        let mut room = open_room();
        let guest = room.participants[1].id;

        assert_eq!(RoomLifecycle::end(&mut room, guest), Err(RoomError::NotDealer));
        assert_eq!(room.state, RoomState::InProgress);
    }

    #[test]
    fn test_cannot_end_twice() {
        let mut room = open_room();
        let dealer = room.dealer_id;

        RoomLifecycle::end(&mut room, dealer).unwrap();
        assert_eq!(
            RoomLifecycle::end(&mut room, dealer),
            Err(RoomError::AlreadyClosed(RoomState::Ended))
        );
    }

    #[test]
    fn test_approve_requires_ended_room() {
        let mut room = open_room();

        assert_eq!(
            RoomLifecycle::approve(&mut room, Utc::now()),
            Err(RoomError::NotEnded(RoomState::InProgress))
        );
        assert!(room.approved_at.is_none());
    }

    #[test]
    fn test_second_approval_is_a_no_op() {
        let mut room = open_room();
        let dealer = room.dealer_id;
        RoomLifecycle::end(&mut room, dealer).unwrap();

        RoomLifecycle::approve(&mut room, Utc::now()).unwrap();
        let first_stamp = room.approved_at.clone();

        assert_eq!(
            RoomLifecycle::approve(&mut room, Utc::now()),
            Ok(Approval::AlreadyApproved)
        );
        assert_eq!(room.approved_at, first_stamp);
    }

    #[test]
    fn test_approved_at_guard_without_state() {
        // Ended room that already carries a stamp from an earlier write-back
        let mut room = open_room();
        room.state = RoomState::Ended;
        room.approved_at = Some("2024-01-01T00:00:00+00:00".to_string());

        assert_eq!(
            RoomLifecycle::approve(&mut room, Utc::now()),
            Ok(Approval::AlreadyApproved)
        );
        assert_eq!(room.state, RoomState::Ended);
    }

    #[test]
    fn test_game_deletion_rules() {
        let mut room = open_room();
        let dealer = room.dealer_id;
        let guest = room.participants[2].id;

        assert!(RoomLifecycle::ensure_can_delete_game(&room, dealer).is_ok());
        assert_eq!(
            RoomLifecycle::ensure_can_delete_game(&room, guest),
            Err(RoomError::NotDealer)
        );

        RoomLifecycle::end(&mut room, dealer).unwrap();
        assert_eq!(
            RoomLifecycle::ensure_can_delete_game(&room, dealer),
            Err(RoomError::AlreadyClosed(RoomState::Ended))
        );
    }
}
