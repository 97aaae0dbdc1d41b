//! External data boundary: match feed, squad, and asset index loaders.

pub mod match_feed;
pub mod squads;

pub use match_feed::MatchFeed;
pub use squads::{load_squad_players, parse_squad_players, resolve_player_name};
