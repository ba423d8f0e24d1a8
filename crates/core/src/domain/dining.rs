use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealPeriod {
    /// Picks the serving period for a 24-hour clock hour.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Self::Breakfast,
            12..=17 => Self::Lunch,
            _ => Self::Dinner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiningMenu {
    pub breakfast: &'static [&'static str],
    pub lunch: &'static [&'static str],
    pub dinner: &'static [&'static str],
    pub hours: &'static str,
}

impl DiningMenu {
    pub fn items(&self, period: MealPeriod) -> &'static [&'static str] {
        match period {
            MealPeriod::Breakfast => self.breakfast,
            MealPeriod::Lunch => self.lunch,
            MealPeriod::Dinner => self.dinner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MealPeriod;

    #[test]
    fn period_boundaries_follow_noon_and_six_pm() {
        assert_eq!(MealPeriod::from_hour(0), MealPeriod::Breakfast);
        assert_eq!(MealPeriod::from_hour(11), MealPeriod::Breakfast);
        assert_eq!(MealPeriod::from_hour(12), MealPeriod::Lunch);
        assert_eq!(MealPeriod::from_hour(17), MealPeriod::Lunch);
        assert_eq!(MealPeriod::from_hour(18), MealPeriod::Dinner);
        assert_eq!(MealPeriod::from_hour(23), MealPeriod::Dinner);
    }
}
