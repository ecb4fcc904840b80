pub mod errors;
pub mod game;
pub mod messages;
pub mod room;
pub mod score;
pub mod user;

pub type ParticipantId = uuid::Uuid;
pub type GameId = uuid::Uuid;
pub type RoomId = uuid::Uuid;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use messages::*;
pub use room::*;
pub use score::*;
pub use user::*;
