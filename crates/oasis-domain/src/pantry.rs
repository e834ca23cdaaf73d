//! Food pantry directory entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodPantry {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: String,
    #[serde(default)]
    pub hours: WeeklyHours,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub open_now: bool,
    pub inventory: Inventory,
    /// Typical wait in minutes.
    pub wait_time: u32,
    pub accessibility: Accessibility,
}

impl FoodPantry {
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip
        )
    }
}

impl Identifiable for FoodPantry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for FoodPantry {
    fn display_label(&self) -> String {
        let status = if self.open_now { "open" } else { "closed" };
        format!("{} ({status}, ~{} min wait)", self.name, self.wait_time)
    }
}

/// Opening hours per weekday; `None` means the day was not published.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<String>,
}

impl WeeklyHours {
    /// Published days in Monday-first order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Monday", &self.monday),
            ("Tuesday", &self.tuesday),
            ("Wednesday", &self.wednesday),
            ("Thursday", &self.thursday),
            ("Friday", &self.friday),
            ("Saturday", &self.saturday),
            ("Sunday", &self.sunday),
        ]
        .into_iter()
        .filter_map(|(day, hours)| hours.as_deref().map(|value| (day, value)))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InventoryLevel {
    High,
    Medium,
    Low,
}

impl InventoryLevel {
    /// Three-dot stock gauge.
    pub fn dots(self) -> &'static str {
        match self {
            InventoryLevel::High => "●●●",
            InventoryLevel::Medium => "●●○",
            InventoryLevel::Low => "●○○",
        }
    }
}

impl fmt::Display for InventoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InventoryLevel::High => "High",
            InventoryLevel::Medium => "Medium",
            InventoryLevel::Low => "Low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inventory {
    pub produce: InventoryLevel,
    pub protein: InventoryLevel,
    pub dairy: InventoryLevel,
    pub non_perishables: InventoryLevel,
}

impl Inventory {
    pub fn entries(&self) -> [(&'static str, InventoryLevel); 4] {
        [
            ("Produce", self.produce),
            ("Protein", self.protein),
            ("Dairy", self.dairy),
            ("Non-perishables", self.non_perishables),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Accessibility {
    pub wheelchair_accessible: bool,
    pub parking: bool,
    pub public_transit: bool,
}
