use std::sync::Arc;

use campus_core::clock::{Clock, SystemClock};
use campus_core::dataset::{CampusDataset, CAMPUS};
use campus_core::domain::building::BuildingKey;
use campus_core::domain::dining::MealPeriod;
use chrono::Timelike;
use serde::Serialize;

use crate::conversation::{
    classify, mentions_any, normalize_text, Rule, Topic, DINING_HOURS_TRIGGERS,
    LIBRARY_HOURS_TRIGGERS, MENU_TRIGGERS, RULES,
};
use crate::format;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub topic: Topic,
    pub text: String,
}

/// Maps chat messages to canned campus replies. Never fails.
#[derive(Clone)]
pub struct Responder {
    dataset: &'static CampusDataset,
    clock: Arc<dyn Clock>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock::local()))
    }
}

impl Responder {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_dataset(&CAMPUS, clock)
    }

    pub fn with_dataset(dataset: &'static CampusDataset, clock: Arc<dyn Clock>) -> Self {
        Self { dataset, clock }
    }

    pub fn dataset(&self) -> &'static CampusDataset {
        self.dataset
    }

    /// Rules in the order they are tried; the first match wins.
    pub fn rules(&self) -> &'static [Rule] {
        &RULES
    }

    pub fn classify(&self, message: &str) -> Topic {
        classify(&normalize_text(message))
    }

    pub fn respond(&self, message: &str) -> String {
        self.reply(message).text
    }

    pub fn reply(&self, message: &str) -> Reply {
        let normalized = normalize_text(message);
        let topic = classify(&normalized);
        let text = self.render(topic, &normalized);
        Reply { topic, text }
    }

    /// Meal period for the clock's current hour.
    pub fn current_meal_period(&self) -> MealPeriod {
        MealPeriod::from_hour(self.clock.now().hour())
    }

    fn render(&self, topic: Topic, normalized: &str) -> String {
        let dataset = self.dataset;
        match topic {
            Topic::Greeting => format::GREETING.to_string(),
            Topic::Library => {
                let library = dataset.building(BuildingKey::Library);
                if mentions_any(normalized, LIBRARY_HOURS_TRIGGERS) {
                    format::library_hours(library)
                } else {
                    format::building_info(library)
                }
            }
            Topic::Dining => {
                if mentions_any(normalized, MENU_TRIGGERS) {
                    format::dining_menu(&dataset.dining, self.current_meal_period())
                } else if mentions_any(normalized, DINING_HOURS_TRIGGERS) {
                    format::dining_hours(&dataset.dining)
                } else {
                    format::building_info(dataset.building(BuildingKey::Cafeteria))
                }
            }
            Topic::Fitness => format::building_info(dataset.building(BuildingKey::Gym)),
            Topic::Schedule => format::course_schedule(dataset.courses),
            Topic::Events => format::upcoming_events(dataset.events),
            Topic::Emergency => format::EMERGENCY_CONTACTS.to_string(),
            Topic::Admin => format::building_info(dataset.building(BuildingKey::Admin)),
            Topic::Fallback => format::CAPABILITIES.to_string(),
        }
    }
}
