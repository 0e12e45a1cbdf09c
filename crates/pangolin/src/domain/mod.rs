//! Pure domain types shared across the app: jail paths, listing entries, and
//! episode name parsing. Nothing here touches the network or the terminal.

pub mod entry;
pub mod episode;
pub mod path;
