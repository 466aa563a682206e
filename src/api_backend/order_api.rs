use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data_types::join_types::OrderSubmission;
use crate::errors::ApiError;

use super::ApiClient;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub status: String,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Reward {
    pub id: u64,
    pub name: String,
    pub points: u32,
    pub description: Option<String>,
}

/// Collaborators/partners intake form.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PartnerApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ApiClient {
    pub async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_list("orders").await
    }

    /// Orders scoped to the cook/seller behind the current session.
    pub async fn get_seller_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_list("orders/seller").await
    }

    /// Checkout of a completed join wizard.
    pub async fn submit_order(&self, submission: &OrderSubmission) -> Result<Order, ApiError> {
        self.post_json("orders", submission).await
    }

    pub async fn get_rewards(&self) -> Result<Vec<Reward>, ApiError> {
        self.get_list("rewards").await
    }

    pub async fn submit_partner_application(
        &self,
        application: &PartnerApplication,
    ) -> Result<(), ApiError> {
        self.post_unit("partners", application).await
    }
}
