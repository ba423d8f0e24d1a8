use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CampusEvent {
    pub name: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
}
