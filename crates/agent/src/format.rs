//! Reply text for each topic. Lists are numbered from 1 in dataset order.

use campus_core::domain::building::{Building, BuildingKey};
use campus_core::domain::course::Course;
use campus_core::domain::dining::{DiningMenu, MealPeriod};
use campus_core::domain::event::CampusEvent;

pub const GREETING: &str = "Hello! 👋 I'm your Campus Helper Bot. I can help you with campus navigation, schedules, dining, and events. What would you like to know?";

pub const EMERGENCY_CONTACTS: &str = "🚨 **Emergency Contacts:**\n\n🔒 Campus Security: (555) 123-4567\n🏥 Health Center: (555) 123-4568\n💬 Counseling: (555) 123-4569\n\n**For immediate emergencies, call 911**";

pub const CAPABILITIES: &str = "I can help you with:\n\n📍 **Campus Locations** - \"Where is the library?\"\n📅 **Class Schedule** - \"My classes today\"\n🍽️ **Dining Info** - \"Dining menu\"\n🎉 **Campus Events** - \"Upcoming events\"\n🚨 **Emergency** - \"Emergency contacts\"\n\nTry asking about any of these topics!";

pub fn building_icon(key: BuildingKey) -> &'static str {
    match key {
        BuildingKey::Library => "📚",
        BuildingKey::Cafeteria => "🍽️",
        BuildingKey::Gym => "💪",
        BuildingKey::Admin => "🏢",
    }
}

pub fn building_info(building: &Building) -> String {
    format!(
        "{} **{}**\n📍 Location: {}\n⏰ Hours: {}",
        building_icon(building.key),
        building.name,
        building.location,
        building.hours
    )
}

pub fn library_hours(library: &Building) -> String {
    format!("📚 **Library Hours:** {}\n\nLocation: {}", library.hours, library.location)
}

pub fn dining_hours(menu: &DiningMenu) -> String {
    format!("🍽️ **Dining Hours:**\n{}", menu.hours)
}

pub fn course_schedule(courses: &[Course]) -> String {
    let mut schedule = String::from("📅 **Today's Class Schedule:**\n\n");
    for (index, course) in courses.iter().enumerate() {
        schedule.push_str(&format!("{}. **{}** - {}\n", index + 1, course.code, course.name));
        schedule.push_str(&format!("   ⏰ {} | 📍 {}\n", course.time, course.room));
        schedule.push_str(&format!("   👨‍🏫 {}\n\n", course.instructor));
    }
    schedule
}

pub fn upcoming_events(events: &[CampusEvent]) -> String {
    let mut listing = String::from("🎉 **Upcoming Campus Events:**\n\n");
    for (index, event) in events.iter().enumerate() {
        listing.push_str(&format!("{}. **{}**\n", index + 1, event.name));
        listing.push_str(&format!("   📅 {} at {}\n", event.date, event.time));
        listing.push_str(&format!("   📍 {}\n\n", event.location));
    }
    listing
}

pub fn dining_menu(menu: &DiningMenu, period: MealPeriod) -> String {
    let mut listing =
        format!("🍽️ **Current {} Menu:**\n\n", period.as_str().to_ascii_uppercase());
    for (index, item) in menu.items(period).iter().enumerate() {
        listing.push_str(&format!("{}. {item}\n", index + 1));
    }
    listing.push_str(&format!("\n⏰ {}", menu.hours));
    listing
}

#[cfg(test)]
mod tests {
    use campus_core::domain::building::BuildingKey;
    use campus_core::domain::dining::MealPeriod;
    use campus_core::CAMPUS;

    use super::{building_info, course_schedule, dining_menu, library_hours, upcoming_events};

    #[test]
    fn building_info_has_name_location_and_hours_lines() {
        let rendered = building_info(CAMPUS.building(BuildingKey::Gym));
        assert_eq!(
            rendered,
            "💪 **Fitness Center**\n📍 Location: Building C, Floor 2\n⏰ Hours: 6:00 AM - 11:00 PM"
        );
    }

    #[test]
    fn library_hours_leads_with_hours() {
        let rendered = library_hours(CAMPUS.building(BuildingKey::Library));
        assert!(rendered.starts_with("📚 **Library Hours:** 8:00 AM - 10:00 PM"));
        assert!(rendered.ends_with("Location: Building A, Room 101"));
    }

    #[test]
    fn course_entries_span_three_lines() {
        let rendered = course_schedule(&CAMPUS.courses[..1]);
        assert_eq!(
            rendered,
            "📅 **Today's Class Schedule:**\n\n1. **CS101** - Introduction to Programming\n   ⏰ 9:00 AM | 📍 Room 201\n   👨‍🏫 Dr. Smith\n\n"
        );
    }

    #[test]
    fn event_entries_are_numbered_from_one() {
        let rendered = upcoming_events(CAMPUS.events);
        assert!(rendered.contains("1. **Tech Fest 2024**\n   📅 2024-03-15 at 10:00 AM\n"));
        assert!(rendered.contains("4. **Science Exhibition**\n"));
        assert!(!rendered.contains("5. "));
    }

    #[test]
    fn menu_header_uses_uppercase_period() {
        let rendered = dining_menu(&CAMPUS.dining, MealPeriod::Lunch);
        assert!(rendered.starts_with("🍽️ **Current LUNCH Menu:**\n\n1. Margherita Pizza\n"));
        assert!(rendered.ends_with("\n⏰ Breakfast: 7-10 AM | Lunch: 12-3 PM | Dinner: 6-9 PM"));
    }

    #[test]
    fn empty_lists_render_only_the_header() {
        assert_eq!(course_schedule(&[]), "📅 **Today's Class Schedule:**\n\n");
    }
}
