use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlanSnapshot {
    pub id: u64,
    pub name: String,
    pub base_price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MealSelection {
    pub id: u64,
    pub name: String,
    pub calories: Option<u32>,
    pub price: f64,
    pub quantity: u32,
}

/// Everything the join wizard accumulates across its four steps.
/// The three selection maps are disjoint namespaces keyed by meal id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlanData {
    pub plan: Option<PlanSnapshot>,
    pub protein: String,
    pub portion: String,
    pub meals_per_week: u32,
    pub price_per_week: f64,
    pub delivery_fee: f64,
    pub free_shipping: bool,
    pub reward_points: u32,
    pub personal: PersonalDetails,
    pub main_meals: BTreeMap<u64, MealSelection>,
    pub breakfasts: BTreeMap<u64, MealSelection>,
    pub drinks: BTreeMap<u64, MealSelection>,
}

/// Shallow-merge patch for [`PlanData`]: only fields set to `Some` are
/// written. Field interdependencies are not recomputed here.
#[derive(Debug, Clone, Default)]
pub struct PlanDataPatch {
    pub plan: Option<Option<PlanSnapshot>>,
    pub protein: Option<String>,
    pub portion: Option<String>,
    pub meals_per_week: Option<u32>,
    pub price_per_week: Option<f64>,
    pub delivery_fee: Option<f64>,
    pub free_shipping: Option<bool>,
    pub reward_points: Option<u32>,
    pub personal: Option<PersonalDetails>,
    pub main_meals: Option<BTreeMap<u64, MealSelection>>,
    pub breakfasts: Option<BTreeMap<u64, MealSelection>>,
    pub drinks: Option<BTreeMap<u64, MealSelection>>,
}

/// Checkout payload built from a completed wizard.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub plan_id: Option<u64>,
    pub protein: String,
    pub portion: String,
    pub meals_per_week: u32,
    pub price_per_week: f64,
    pub delivery_fee: f64,
    pub reward_points: u32,
    pub personal: PersonalDetails,
    pub main_meals: Vec<MealSelection>,
    pub breakfasts: Vec<MealSelection>,
    pub drinks: Vec<MealSelection>,
}
