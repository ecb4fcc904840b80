pub mod career;
pub mod ratio;
pub mod room;
pub mod scoring;
pub mod validation;

// Re-export main components
pub use career::*;
pub use ratio::*;
pub use room::*;
pub use scoring::*;
pub use validation::*;
