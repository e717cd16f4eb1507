pub mod event_type_repository;
pub mod life_event_repository;

pub use event_type_repository::EventTypeRepository;
pub use life_event_repository::LifeEventRepository;
