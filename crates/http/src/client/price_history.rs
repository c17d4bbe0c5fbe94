//! Price history API client methods

use super::{ApiClient, ClientError};
use crate::types::PriceHistoryList;
use reqwest::Method;

impl ApiClient {
    /// Get the price history of a material
    ///
    /// Unknown materials come back as [`ClientError::NotFound`].
    pub async fn price_history(&self, material_id: &str) -> Result<PriceHistoryList, ClientError> {
        let request = self.request_segments(Method::GET, &["priceHistory", material_id])?;
        self.execute(request).await
    }
}
