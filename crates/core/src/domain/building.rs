use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKey {
    Library,
    Cafeteria,
    Gym,
    Admin,
}

impl BuildingKey {
    pub const ALL: [BuildingKey; 4] = [Self::Library, Self::Cafeteria, Self::Gym, Self::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Cafeteria => "cafeteria",
            Self::Gym => "gym",
            Self::Admin => "admin",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Building {
    pub key: BuildingKey,
    pub name: &'static str,
    pub hours: &'static str,
    pub location: &'static str,
}

#[cfg(test)]
mod tests {
    use super::BuildingKey;

    #[test]
    fn keys_render_as_lowercase_labels() {
        let labels: Vec<&str> = BuildingKey::ALL.iter().map(BuildingKey::as_str).collect();
        assert_eq!(labels, vec!["library", "cafeteria", "gym", "admin"]);
    }
}
