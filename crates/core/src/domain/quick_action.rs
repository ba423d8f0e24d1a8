use serde::Serialize;

/// A precomposed prompt the chat client can offer as a one-click suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub id: u32,
    pub text: &'static str,
    pub icon: &'static str,
}
