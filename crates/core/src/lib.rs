pub mod clock;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dataset::{CampusDataset, CAMPUS};
pub use domain::building::{Building, BuildingKey};
pub use domain::course::Course;
pub use domain::dining::{DiningMenu, MealPeriod};
pub use domain::event::CampusEvent;
pub use domain::quick_action::QuickAction;
pub use errors::{ApplicationError, InterfaceError};
