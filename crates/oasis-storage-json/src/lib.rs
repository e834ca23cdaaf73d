use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use oasis_core::{storage::OasisStorage, CoreError};
use oasis_domain::{BenefitBalance, FoodPantry, MealPlan, ShutdownRisk};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

const TMP_SUFFIX: &str = "tmp";

pub const BALANCE_FILE: &str = "balance.json";
pub const PANTRIES_FILE: &str = "pantries.json";
pub const SHUTDOWN_FILE: &str = "shutdown.json";
pub const MEAL_PLAN_FILE: &str = "meal_plan.json";

/// Filesystem-backed JSON persistence for the app's snapshots.
#[derive(Debug, Clone)]
pub struct JsonOasisStorage {
    data_dir: PathBuf,
}

impl JsonOasisStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn snapshot_path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T, CoreError> {
        load_from_path(&self.snapshot_path(file))
    }

    fn save<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<(), CoreError> {
        save_to_path(value, &self.snapshot_path(file))
    }
}

impl OasisStorage for JsonOasisStorage {
    fn load_balance(&self) -> Result<BenefitBalance, CoreError> {
        self.load(BALANCE_FILE)
    }

    fn save_balance(&self, balance: &BenefitBalance) -> Result<(), CoreError> {
        self.save(BALANCE_FILE, balance)
    }

    fn load_pantries(&self) -> Result<Vec<FoodPantry>, CoreError> {
        self.load(PANTRIES_FILE)
    }

    fn save_pantries(&self, pantries: &[FoodPantry]) -> Result<(), CoreError> {
        self.save(PANTRIES_FILE, pantries)
    }

    fn load_shutdown_risk(&self) -> Result<ShutdownRisk, CoreError> {
        self.load(SHUTDOWN_FILE)
    }

    fn save_shutdown_risk(&self, risk: &ShutdownRisk) -> Result<(), CoreError> {
        self.save(SHUTDOWN_FILE, risk)
    }

    fn load_meal_plan(&self) -> Result<MealPlan, CoreError> {
        self.load(MEAL_PLAN_FILE)
    }

    fn save_meal_plan(&self, plan: &MealPlan) -> Result<(), CoreError> {
        self.save(MEAL_PLAN_FILE, plan)
    }
}

pub fn save_to_path<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), CoreError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "snapshot saved");
    Ok(())
}

pub fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    if !path.exists() {
        return Err(CoreError::DataNotFound(path.display().to_string()));
    }
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
