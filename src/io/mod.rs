//! I/O modules for reading acquisition dates from date lists and pair archives

pub mod date_list;
pub mod pairs;

pub use date_list::DateListReader;
pub use pairs::{resolve_pair_kind, PairArchive, PairCollection, PairDateReader};
