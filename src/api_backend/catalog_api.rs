use serde::Deserialize;

use crate::data_types::catalog_types::{Category, Product, Speciality, Unit};
use crate::errors::ApiError;

use super::ApiClient;

#[derive(Deserialize, Debug)]
struct CoinBalance {
    balance: u64,
}

impl ApiClient {
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_list("products").await
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_list("categories").await
    }

    pub async fn get_units(&self) -> Result<Vec<Unit>, ApiError> {
        self.get_list("units").await
    }

    pub async fn get_specialities(&self) -> Result<Vec<Speciality>, ApiError> {
        self.get_list("specialities").await
    }

    /// Favorite product ids of the logged-in principal.
    pub async fn get_favorites(&self) -> Result<Vec<u64>, ApiError> {
        self.get_list("favorites").await
    }

    /// Persists a favorites toggle; the backend flips membership itself,
    /// mirroring the local semantics.
    pub async fn toggle_favorite(&self, product_id: u64) -> Result<(), ApiError> {
        self.post_unit(
            &format!("favorites/{}/toggle", product_id),
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn get_coin_balance(&self) -> Result<u64, ApiError> {
        let record: CoinBalance = self.get_record("coins").await?;
        Ok(record.balance)
    }

    /// Records a spend in the backend ledger and returns the new balance.
    pub async fn spend_coins(&self, amount: u64) -> Result<u64, ApiError> {
        let record: CoinBalance = self
            .post_json("coins/spend", &serde_json::json!({ "amount": amount }))
            .await?;
        Ok(record.balance)
    }
}
