pub mod craving_event;
pub mod identity;

pub use craving_event::{CravingEvent, NewCravingEvent};
pub use identity::Identity;
