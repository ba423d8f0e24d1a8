//! Static campus reference data.
//!
//! Everything here is fixed at compile time and shared read-only by every
//! request. List order is display order; nothing downstream sorts it.

use std::collections::BTreeSet;

use crate::domain::building::{Building, BuildingKey};
use crate::domain::course::Course;
use crate::domain::dining::{DiningMenu, MealPeriod};
use crate::domain::event::CampusEvent;
use crate::domain::quick_action::QuickAction;

#[derive(Debug)]
pub struct CampusDataset {
    buildings: [Building; 4],
    pub courses: &'static [Course],
    pub events: &'static [CampusEvent],
    pub dining: DiningMenu,
    pub quick_actions: &'static [QuickAction],
}

pub static CAMPUS: CampusDataset = CampusDataset {
    buildings: [
        Building {
            key: BuildingKey::Library,
            name: "Main Library",
            hours: "8:00 AM - 10:00 PM",
            location: "Building A, Room 101",
        },
        Building {
            key: BuildingKey::Cafeteria,
            name: "Student Cafeteria",
            hours: "7:00 AM - 9:00 PM",
            location: "Building B, Ground Floor",
        },
        Building {
            key: BuildingKey::Gym,
            name: "Fitness Center",
            hours: "6:00 AM - 11:00 PM",
            location: "Building C, Floor 2",
        },
        Building {
            key: BuildingKey::Admin,
            name: "Administration Office",
            hours: "9:00 AM - 5:00 PM",
            location: "Building D, Room 205",
        },
    ],
    courses: &[
        Course {
            code: "CS101",
            name: "Introduction to Programming",
            time: "9:00 AM",
            room: "Room 201",
            instructor: "Dr. Smith",
        },
        Course {
            code: "MATH201",
            name: "Calculus II",
            time: "11:00 AM",
            room: "Room 105",
            instructor: "Dr. Johnson",
        },
        Course {
            code: "ENG101",
            name: "English Composition",
            time: "2:00 PM",
            room: "Room 301",
            instructor: "Prof. Davis",
        },
        Course {
            code: "PHYS101",
            name: "Physics I",
            time: "3:30 PM",
            room: "Room 401",
            instructor: "Dr. Wilson",
        },
    ],
    events: &[
        CampusEvent {
            name: "Tech Fest 2024",
            date: "2024-03-15",
            time: "10:00 AM",
            location: "Main Auditorium",
        },
        CampusEvent {
            name: "Career Fair",
            date: "2024-03-20",
            time: "9:00 AM",
            location: "Student Center",
        },
        CampusEvent {
            name: "Sports Day",
            date: "2024-03-25",
            time: "8:00 AM",
            location: "Sports Complex",
        },
        CampusEvent {
            name: "Science Exhibition",
            date: "2024-03-30",
            time: "2:00 PM",
            location: "Lab Building",
        },
    ],
    dining: DiningMenu {
        breakfast: &[
            "Pancakes & Syrup",
            "Scrambled Eggs",
            "Toast & Butter",
            "Fresh Coffee",
            "Orange Juice",
        ],
        lunch: &[
            "Margherita Pizza",
            "Chicken Burger",
            "Caesar Salad",
            "Pasta Alfredo",
            "Club Sandwich",
        ],
        dinner: &[
            "Grilled Chicken",
            "Fried Rice",
            "Mixed Vegetables",
            "Tomato Soup",
            "Chocolate Cake",
        ],
        hours: "Breakfast: 7-10 AM | Lunch: 12-3 PM | Dinner: 6-9 PM",
    },
    quick_actions: &[
        QuickAction { id: 1, text: "Where is the library?", icon: "📚" },
        QuickAction { id: 2, text: "Dining menu", icon: "🍽️" },
        QuickAction { id: 3, text: "My classes today", icon: "📅" },
        QuickAction { id: 4, text: "Upcoming events", icon: "🎉" },
        QuickAction { id: 5, text: "Emergency contacts", icon: "🚨" },
    ],
};

impl CampusDataset {
    pub fn building(&self, key: BuildingKey) -> &Building {
        let index = match key {
            BuildingKey::Library => 0,
            BuildingKey::Cafeteria => 1,
            BuildingKey::Gym => 2,
            BuildingKey::Admin => 3,
        };
        &self.buildings[index]
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Structural problems in the tables, empty when the dataset is sound.
    pub fn integrity_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for key in BuildingKey::ALL {
            let building = self.building(key);
            if building.key != key {
                issues.push(format!(
                    "building slot for `{}` holds `{}`",
                    key.as_str(),
                    building.key.as_str()
                ));
            }
            if building.name.trim().is_empty() || building.hours.trim().is_empty() {
                issues.push(format!("building `{}` is missing name or hours", key.as_str()));
            }
        }

        if self.courses.is_empty() {
            issues.push("course list is empty".to_string());
        }
        let mut codes = BTreeSet::new();
        for course in self.courses {
            if !codes.insert(course.code) {
                issues.push(format!("duplicate course code `{}`", course.code));
            }
        }

        if self.events.is_empty() {
            issues.push("event list is empty".to_string());
        }

        for period in [MealPeriod::Breakfast, MealPeriod::Lunch, MealPeriod::Dinner] {
            if self.dining.items(period).is_empty() {
                issues.push(format!("{} menu is empty", period.as_str()));
            }
        }

        let mut ids = BTreeSet::new();
        for action in self.quick_actions {
            if !ids.insert(action.id) {
                issues.push(format!("duplicate quick action id {}", action.id));
            }
        }

        issues
    }
}
