//! Save-file text format.
//!
//! - `notation`: short-card codes, card lists and meld groups
//! - `player_codec`: one seat's hand, capture pile and melds
//! - `save_file`: the whole document
//!
//! Nothing here touches the filesystem. Callers read and write the text.

pub mod notation;
pub mod player_codec;
pub mod save_file;

pub use notation::MeldCard;
pub use player_codec::{decode_player, decode_players, encode_player, take_from_pool, PlayerRecord};
pub use save_file::{SaveData, SeatRecord};
