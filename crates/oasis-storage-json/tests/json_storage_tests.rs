use chrono::{NaiveDate, TimeZone, Utc};
use oasis_core::{storage::OasisStorage, CoreError};
use oasis_domain::{
    Accessibility, BenefitBalance, ChecklistItem, Deposit, FoodPantry, Inventory, InventoryLevel,
    Meal, MealPlan, MealPlanDay, RiskLevel, ShutdownRisk, Transaction, WeeklyHours,
};
use oasis_storage_json::{JsonOasisStorage, BALANCE_FILE, PANTRIES_FILE};
use std::fs;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn sample_balance() -> BenefitBalance {
    BenefitBalance {
        balance: 127.43,
        last_deposit: Deposit {
            amount: 284.0,
            date: date(2025, 10, 28),
        },
        days_until_refill: 12,
        transactions: vec![
            Transaction::purchase("1", date(2025, 11, 14), "Kroger", 23.15),
            Transaction::deposit("2", date(2025, 10, 28), "EBT Deposit", 284.0),
        ],
        last_checked: Utc.with_ymd_and_hms(2025, 11, 15, 12, 0, 0).unwrap(),
    }
}

fn sample_pantry() -> FoodPantry {
    FoodPantry {
        id: "1".into(),
        name: "Jackson Area Food Bank".into(),
        address: "123 Main St".into(),
        city: "Jackson".into(),
        state: "TN".into(),
        zip: "38301".into(),
        latitude: 35.6145,
        longitude: -88.8139,
        phone: "(731) 555-0123".into(),
        hours: WeeklyHours {
            monday: Some("9:00 AM - 5:00 PM".into()),
            ..WeeklyHours::default()
        },
        services: vec!["Fresh Produce".into()],
        requirements: vec!["No appointment needed".into()],
        open_now: true,
        inventory: Inventory {
            produce: InventoryLevel::High,
            protein: InventoryLevel::Medium,
            dairy: InventoryLevel::Low,
            non_perishables: InventoryLevel::High,
        },
        wait_time: 15,
        accessibility: Accessibility {
            wheelchair_accessible: true,
            parking: true,
            public_transit: false,
        },
    }
}

#[test]
fn json_storage_can_save_and_load_balance() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonOasisStorage::new(dir.path().join("data")).expect("create storage");

    let balance = sample_balance();
    storage.save_balance(&balance).expect("save balance");
    let loaded = storage.load_balance().expect("load balance");

    assert_eq!(loaded, balance);
    let path = storage.snapshot_path(BALANCE_FILE);
    assert!(path.exists());
    assert!(!dir.path().join("data").join("balance.json.tmp").exists());
}

#[test]
fn json_storage_round_trips_pantries_and_shutdown_risk() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonOasisStorage::new(dir.path().to_path_buf()).expect("create storage");

    let pantries = vec![sample_pantry()];
    storage.save_pantries(&pantries).expect("save pantries");
    assert_eq!(storage.load_pantries().expect("load pantries"), pantries);

    let risk = ShutdownRisk {
        percentage: 35,
        level: RiskLevel::Medium,
        last_updated: Utc.with_ymd_and_hms(2025, 11, 15, 8, 0, 0).unwrap(),
        factors: vec!["Budget negotiations ongoing".into()],
        preparation_checklist: vec![ChecklistItem {
            id: "1".into(),
            task: "Stock up on non-perishable foods".into(),
            completed: false,
        }],
    };
    storage.save_shutdown_risk(&risk).expect("save risk");
    assert_eq!(storage.load_shutdown_risk().expect("load risk"), risk);
}

#[test]
fn json_storage_round_trips_meal_plan() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonOasisStorage::new(dir.path().to_path_buf()).expect("create storage");

    let plan = MealPlan {
        days: vec![MealPlanDay {
            day: "Day 1".into(),
            meals: vec![Meal {
                name: "Breakfast".into(),
                items: "Oatmeal with banana".into(),
                cost: 1.5,
            }],
        }],
    };
    storage.save_meal_plan(&plan).expect("save plan");
    assert_eq!(storage.load_meal_plan().expect("load plan"), plan);
}

#[test]
fn missing_snapshot_reports_data_not_found() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonOasisStorage::new(dir.path().to_path_buf()).expect("create storage");

    let err = storage.load_balance().expect_err("no balance yet");
    assert!(matches!(err, CoreError::DataNotFound(_)));
}

#[test]
fn malformed_snapshot_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonOasisStorage::new(dir.path().to_path_buf()).expect("create storage");
    fs::write(storage.snapshot_path(PANTRIES_FILE), "{ not json").expect("write");

    let err = storage.load_pantries().expect_err("malformed");
    assert!(matches!(err, CoreError::Serde(_)));
}

#[test]
fn transaction_kind_serializes_as_type_field() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonOasisStorage::new(dir.path().to_path_buf()).expect("create storage");
    storage.save_balance(&sample_balance()).expect("save");

    let raw = fs::read_to_string(storage.snapshot_path(BALANCE_FILE)).expect("read");
    assert!(raw.contains("\"type\": \"purchase\""));
    assert!(raw.contains("\"amount\": -23.15"));
}
