//! Low-cost meal plans suggested alongside the daily budget.

use serde::{Deserialize, Serialize};

use crate::common::Amounted;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub name: String,
    pub items: String,
    pub cost: f64,
}

impl Amounted for Meal {
    fn amount(&self) -> f64 {
        self.cost
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlanDay {
    pub day: String,
    pub meals: Vec<Meal>,
}

impl MealPlanDay {
    pub fn total(&self) -> f64 {
        self.meals.iter().map(Amounted::amount).sum()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    pub days: Vec<MealPlanDay>,
}
