use chrono::NaiveDate;
use serde::Serialize;

use crate::data_types::menu_types::{DeliverySlot, Setting, WeeklyMenu};
use crate::errors::ApiError;

use super::ApiClient;

#[derive(Serialize, Debug)]
pub struct WeeklyMenuUpsert {
    pub name: String,
    pub week_start: NaiveDate,
    /// Meal ids in presentation order.
    pub meal_ids: Vec<u64>,
}

impl ApiClient {
    pub async fn get_weekly_menus(&self) -> Result<Vec<WeeklyMenu>, ApiError> {
        self.get_list("weekly-menus").await
    }

    pub async fn get_weekly_menu(&self, menu_id: u64) -> Result<WeeklyMenu, ApiError> {
        self.get_record(&format!("weekly-menus/{}", menu_id)).await
    }

    pub async fn create_weekly_menu(&self, menu: &WeeklyMenuUpsert) -> Result<WeeklyMenu, ApiError> {
        self.post_json("weekly-menus", menu).await
    }

    pub async fn update_weekly_menu(
        &self,
        menu_id: u64,
        menu: &WeeklyMenuUpsert,
    ) -> Result<WeeklyMenu, ApiError> {
        self.put_json(&format!("weekly-menus/{}", menu_id), menu).await
    }

    pub async fn delete_weekly_menu(&self, menu_id: u64) -> Result<(), ApiError> {
        self.delete(&format!("weekly-menus/{}", menu_id)).await
    }

    /// Publish/unpublish are PATCH state transitions, not full updates.
    pub async fn publish_weekly_menu(&self, menu_id: u64) -> Result<WeeklyMenu, ApiError> {
        self.patch_json(
            &format!("weekly-menus/{}/publish", menu_id),
            &serde_json::json!({ "published": true }),
        )
        .await
    }

    pub async fn unpublish_weekly_menu(&self, menu_id: u64) -> Result<WeeklyMenu, ApiError> {
        self.patch_json(
            &format!("weekly-menus/{}/publish", menu_id),
            &serde_json::json!({ "published": false }),
        )
        .await
    }

    /// Reorders the meal placements within a menu. `placement_ids` is
    /// the complete new order; the backend rewrites every position.
    pub async fn reorder_menu_meals(
        &self,
        menu_id: u64,
        placement_ids: &[u64],
    ) -> Result<WeeklyMenu, ApiError> {
        self.put_json(
            &format!("weekly-menus/{}/meals/order", menu_id),
            &serde_json::json!({ "placement_ids": placement_ids }),
        )
        .await
    }

    pub async fn get_delivery_slots(&self) -> Result<Vec<DeliverySlot>, ApiError> {
        self.get_list("delivery-slots").await
    }

    pub async fn get_settings(&self) -> Result<Vec<Setting>, ApiError> {
        self.get_list("settings").await
    }
}
