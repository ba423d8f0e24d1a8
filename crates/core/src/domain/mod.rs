pub mod building;
pub mod course;
pub mod dining;
pub mod event;
pub mod quick_action;
