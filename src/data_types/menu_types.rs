use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Meal {
    pub id: u64,
    pub name: String,
    pub calories: Option<u32>,
    pub protein_grams: Option<u32>,
    pub price: f64,
    pub image: Option<String>,
}

/// Placement of a meal inside a weekly menu. Ordering among placements
/// is significant and reorderable through its own endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuMeal {
    pub id: u64,
    pub meal: Meal,
    pub position: u32,
    pub featured: bool,
    pub special_price: Option<f64>,
    pub available: u32,
    pub sold: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeeklyMenu {
    pub id: u64,
    pub name: String,
    pub week_start: NaiveDate,
    pub published: bool,
    pub meals: Vec<MenuMeal>,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Membership,
    Normal,
    Both,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeliverySlot {
    pub id: u64,
    pub name: String,
    pub kind: SlotKind,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub capacity: u32,
    pub booked: u32,
    /// 0 = Sunday .. 6 = Saturday; None means every day.
    pub day_of_week: Option<u8>,
    pub active: bool,
    pub price_adjustment: f64,
    pub description: Option<String>,
}

impl DeliverySlot {
    pub fn has_capacity(&self) -> bool {
        self.booked < self.capacity
    }

    pub fn applies_on(&self, weekday: u8) -> bool {
        match self.day_of_week {
            Some(day) => day == weekday,
            None => true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod slot_tests {
    use super::*;

    fn slot(day: Option<u8>, capacity: u32, booked: u32) -> DeliverySlot {
        DeliverySlot {
            id: 1,
            name: "Morning".into(),
            kind: SlotKind::Both,
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            capacity,
            booked,
            day_of_week: day,
            active: true,
            price_adjustment: 0.0,
            description: None,
        }
    }

    #[test]
    fn slot_without_day_applies_every_day() {
        let every_day = slot(None, 10, 0);
        for weekday in 0..7 {
            assert!(every_day.applies_on(weekday));
        }
    }

    #[test]
    fn slot_with_day_applies_only_that_day() {
        let monday_only = slot(Some(1), 10, 0);
        assert!(monday_only.applies_on(1));
        assert!(!monday_only.applies_on(2));
    }

    #[test]
    fn capacity_check_compares_booked_against_capacity() {
        assert!(slot(None, 10, 9).has_capacity());
        assert!(!slot(None, 10, 10).has_capacity());
    }
}
