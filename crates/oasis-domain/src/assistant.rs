//! Types exchanged with the ZENO assistant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classified purpose of a user's chat message. Messages that match no
/// category are represented as `None` by callers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Balance,
    Food,
    Shutdown,
    Budget,
    Hello,
}

impl Intent {
    /// Categories in the order they are tested; the first match wins.
    pub const PRIORITY: [Intent; 5] = [
        Intent::Balance,
        Intent::Food,
        Intent::Shutdown,
        Intent::Budget,
        Intent::Hello,
    ];
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intent::Balance => "balance",
            Intent::Food => "food",
            Intent::Shutdown => "shutdown",
            Intent::Budget => "budget",
            Intent::Hello => "hello",
        };
        f.write_str(label)
    }
}

/// Opaque action tag the presentation layer maps to a screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NavigationAction {
    NavigateBalance,
    NavigateMap,
    NavigateBudget,
    NavigateShutdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestedAction {
    pub label: String,
    pub action: NavigationAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SuggestedAction {
    pub fn new(label: impl Into<String>, action: NavigationAction, icon: Option<&str>) -> Self {
        Self {
            label: label.into(),
            action,
            icon: icon.map(str::to_string),
        }
    }
}

/// Reply text plus the follow-up actions offered alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantReply {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<SuggestedAction>,
}

/// What the assistant knows about the user. Accepted on every request but
/// not consulted by keyword routing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantContext {
    pub ebt_balance: f64,
    pub days_until_refill: i64,
    pub family_size: u32,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_actions_use_snake_case_tags() {
        let tags: Vec<String> = [
            NavigationAction::NavigateBalance,
            NavigationAction::NavigateMap,
            NavigationAction::NavigateBudget,
            NavigationAction::NavigateShutdown,
        ]
        .iter()
        .map(|action| serde_json::to_string(action).unwrap())
        .collect();
        assert_eq!(
            tags,
            vec![
                "\"navigate_balance\"",
                "\"navigate_map\"",
                "\"navigate_budget\"",
                "\"navigate_shutdown\"",
            ]
        );
        let parsed: NavigationAction = serde_json::from_str("\"navigate_map\"").unwrap();
        assert_eq!(parsed, NavigationAction::NavigateMap);
    }
}
