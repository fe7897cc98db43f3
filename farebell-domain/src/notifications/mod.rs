// Notification instantiation, registry, and lifecycle events.

pub mod dispatcher;
pub mod events;
pub mod registry;
pub mod types;

pub use dispatcher::fire;
pub use events::NotificationEvent;
pub use registry::{InMemoryNotificationRegistry, NotificationRegistry};
pub use types::{Notification, NotificationInput};
