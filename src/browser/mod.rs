pub mod navigation;
pub mod page;

pub use navigation::{Boundary, Entries, HistoryEntry, Navigation, NavigationError, SearchHit};
pub use page::Page;
