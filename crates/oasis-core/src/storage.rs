use oasis_domain::{BenefitBalance, FoodPantry, MealPlan, ShutdownRisk};

use crate::CoreError;

/// Abstraction over persistence backends holding the snapshots the app reads.
pub trait OasisStorage: Send + Sync {
    fn load_balance(&self) -> Result<BenefitBalance, CoreError>;
    fn save_balance(&self, balance: &BenefitBalance) -> Result<(), CoreError>;
    fn load_pantries(&self) -> Result<Vec<FoodPantry>, CoreError>;
    fn save_pantries(&self, pantries: &[FoodPantry]) -> Result<(), CoreError>;
    fn load_shutdown_risk(&self) -> Result<ShutdownRisk, CoreError>;
    fn save_shutdown_risk(&self, risk: &ShutdownRisk) -> Result<(), CoreError>;
    fn load_meal_plan(&self) -> Result<MealPlan, CoreError>;
    fn save_meal_plan(&self, plan: &MealPlan) -> Result<(), CoreError>;
}
