use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Library,
    Dining,
    Fitness,
    Schedule,
    Events,
    Emergency,
    Admin,
    Fallback,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Library => "library",
            Self::Dining => "dining",
            Self::Fitness => "fitness",
            Self::Schedule => "schedule",
            Self::Events => "events",
            Self::Emergency => "emergency",
            Self::Admin => "admin",
            Self::Fallback => "fallback",
        }
    }
}

/// A topic and the substrings that select it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
}

impl Rule {
    /// `normalized` must already be lowercased and trimmed.
    pub fn matches(&self, normalized: &str) -> bool {
        mentions_any(normalized, self.triggers)
    }
}

/// Evaluated top to bottom; the first matching rule wins. Triggers are plain
/// substrings, so "hi" also fires inside "this" and "help" always means
/// emergency.
pub const RULES: [Rule; 8] = [
    Rule { topic: Topic::Greeting, triggers: &["hello", "hi", "hey"] },
    Rule { topic: Topic::Library, triggers: &["library"] },
    Rule { topic: Topic::Dining, triggers: &["cafeteria", "dining", "food", "eat"] },
    Rule { topic: Topic::Fitness, triggers: &["gym", "fitness", "workout"] },
    Rule { topic: Topic::Schedule, triggers: &["class", "schedule", "course"] },
    Rule { topic: Topic::Events, triggers: &["event", "happening", "activities"] },
    Rule { topic: Topic::Emergency, triggers: &["emergency", "help", "urgent"] },
    Rule { topic: Topic::Admin, triggers: &["admin", "office", "registration"] },
];

pub(crate) const LIBRARY_HOURS_TRIGGERS: &[&str] = &["hours", "time", "open"];
pub(crate) const MENU_TRIGGERS: &[&str] = &["menu"];
pub(crate) const DINING_HOURS_TRIGGERS: &[&str] = &["hours"];

pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn mentions_any(normalized: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| normalized.contains(trigger))
}

/// Topic for an already-normalized message.
pub fn classify(normalized: &str) -> Topic {
    RULES
        .iter()
        .find(|rule| rule.matches(normalized))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::Fallback)
}

#[cfg(test)]
mod tests {
    use super::{classify, normalize_text, Rule, Topic, RULES};

    fn rule(topic: Topic) -> Rule {
        RULES.iter().copied().find(|rule| rule.topic == topic).expect("rule exists")
    }

    #[test]
    fn normalization_lowercases_and_trims() {
        assert_eq!(normalize_text("  Where IS the Library?\n"), "where is the library?");
    }

    #[test]
    fn each_rule_matches_its_own_triggers_in_isolation() {
        for rule in RULES {
            for trigger in rule.triggers {
                assert!(rule.matches(trigger), "{:?} should match `{trigger}`", rule.topic);
            }
        }
        assert!(!rule(Topic::Fitness).matches("library"));
    }

    #[test]
    fn rule_order_is_fixed() {
        let order: Vec<Topic> = RULES.iter().map(|rule| rule.topic).collect();
        assert_eq!(
            order,
            vec![
                Topic::Greeting,
                Topic::Library,
                Topic::Dining,
                Topic::Fitness,
                Topic::Schedule,
                Topic::Events,
                Topic::Emergency,
                Topic::Admin,
            ]
        );
    }

    #[test]
    fn earlier_rules_win_when_triggers_overlap() {
        assert_eq!(classify("hey, library hours?"), Topic::Greeting);
        assert_eq!(classify("library food court"), Topic::Library);
        assert_eq!(classify("gym class"), Topic::Fitness);
        assert_eq!(classify("help with registration"), Topic::Emergency);
    }

    #[test]
    fn substring_triggers_fire_inside_longer_words() {
        assert_eq!(classify("this"), Topic::Greeting);
        assert_eq!(classify("great"), Topic::Dining);
        assert_eq!(classify("classroom"), Topic::Schedule);
    }

    #[test]
    fn unmatched_text_falls_back() {
        assert_eq!(classify("xyzzy"), Topic::Fallback);
        assert_eq!(classify(""), Topic::Fallback);
        assert_eq!(classify("lunch menu"), Topic::Fallback);
    }
}
