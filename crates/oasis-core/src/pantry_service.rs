//! Food pantry lookup and filtering.

use std::{fmt, str::FromStr};

use oasis_domain::FoodPantry;

use crate::CoreError;

const WALK_IN_MARKERS: [&str; 2] = ["no appointment", "walk-in"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PantryFilter {
    #[default]
    All,
    OpenNow,
    WalkIn,
}

impl PantryFilter {
    pub fn accepts(self, pantry: &FoodPantry) -> bool {
        match self {
            PantryFilter::All => true,
            PantryFilter::OpenNow => pantry.open_now,
            PantryFilter::WalkIn => pantry.requirements.iter().any(|requirement| {
                let lowered = requirement.to_lowercase();
                WALK_IN_MARKERS
                    .iter()
                    .any(|marker| lowered.contains(marker))
            }),
        }
    }
}

impl FromStr for PantryFilter {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PantryFilter::All),
            "open" | "open-now" => Ok(PantryFilter::OpenNow),
            "walk-in" | "walkin" => Ok(PantryFilter::WalkIn),
            other => Err(CoreError::Validation(format!(
                "unknown pantry filter `{other}` (expected all, open or walk-in)"
            ))),
        }
    }
}

impl fmt::Display for PantryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PantryFilter::All => "all",
            PantryFilter::OpenNow => "open",
            PantryFilter::WalkIn => "walk-in",
        };
        f.write_str(label)
    }
}

pub struct PantryService;

impl PantryService {
    pub fn filter(pantries: &[FoodPantry], filter: PantryFilter) -> Vec<&FoodPantry> {
        pantries
            .iter()
            .filter(|pantry| filter.accepts(pantry))
            .collect()
    }

    pub fn find<'a>(pantries: &'a [FoodPantry], id: &str) -> Result<&'a FoodPantry, CoreError> {
        pantries
            .iter()
            .find(|pantry| pantry.id == id)
            .ok_or_else(|| CoreError::PantryNotFound(id.to_string()))
    }

    pub fn directions_url(pantry: &FoodPantry) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            pantry.latitude, pantry.longitude
        )
    }

    pub fn dial_uri(phone: &str) -> String {
        format!("tel:{phone}")
    }
}
