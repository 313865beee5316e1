pub mod registration;

pub use registration::{LobbyError, MatchLobby};
