pub mod event_type;
pub mod life_event;

pub use event_type::EventType;
pub use life_event::LifeEvent;
