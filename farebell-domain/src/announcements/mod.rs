// Announcement catalog, targeting rules, and catalog acquisition.

pub mod errors;
pub mod provider;
pub mod store;
pub mod targeting;
pub mod types;

pub use errors::AnnouncementError;
pub use provider::{AnnouncementProvider, StaticAnnouncementProvider, TomlCatalogProvider};
pub use store::{AnnouncementStore, InMemoryAnnouncementStore};
pub use targeting::eligible_for;
pub use types::{Announcement, Audience, TriggerEvent};
