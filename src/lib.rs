pub mod browser;
pub mod config;
pub mod session;
pub mod users;

pub use browser::{Navigation, NavigationError, Page};
pub use config::{OutputFormat, Settings};
pub use session::Session;
pub use users::{DirectoryError, User, UserDirectory};
