//! Request and response bodies of the goldmanager backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Error body returned by the backend on validation failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

/// Create user request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// Password change request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPasswordRequest {
    pub new_password: String,
}

/// Activation change request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserStatusRequest {
    pub active: bool,
}

/// One user as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_name: String,
    pub active: bool,
}

/// User listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUserResponse {
    #[serde(default)]
    pub user_infos: Vec<UserInfo>,
}

/// Item a price was calculated for
///
/// Only the commonly used fields are typed; nested item type and unit data
/// is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub amount: f64,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Price of a single item at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub item: Item,
    pub price: f64,
}

/// Prices of all items of a material at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceList {
    #[serde(default)]
    pub prices: Vec<Price>,
    /// Sum of all prices (the backend spells it `totalPrize`)
    #[serde(default)]
    pub total_prize: f64,
}

/// Price list snapshot for a material history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistory {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    pub price_list: PriceList,
}

/// Price history of a material
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryList {
    #[serde(default)]
    pub price_histories: Vec<PriceHistory>,
}
