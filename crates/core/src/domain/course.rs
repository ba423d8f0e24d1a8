use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Course {
    pub code: &'static str,
    pub name: &'static str,
    pub time: &'static str,
    pub room: &'static str,
    pub instructor: &'static str,
}
