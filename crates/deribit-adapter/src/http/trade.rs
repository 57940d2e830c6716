/*
[INPUT]:  Order requests and bearer token
[OUTPUT]: Exchange order confirmations (opaque JSON)
[POS]:    HTTP layer - trading endpoints (require auth)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;

use crate::auth::AccessToken;
use crate::http::{DeribitClient, DeribitError, Result};
use crate::rpc::RpcMethod;
use crate::types::{BuyRequest, CancelRequest, EditRequest};

impl DeribitClient {
    /// Place a buy order
    ///
    /// POST /api/v2/private/buy
    pub async fn buy(&self, token: &AccessToken, req: &BuyRequest) -> Result<Value> {
        self.call(RpcMethod::PrivateBuy, req, Some(token)).await
    }

    /// Place a limit buy with price and amount sent exactly as given
    pub async fn place_limit_buy(
        &self,
        token: &AccessToken,
        instrument_name: &str,
        price: &str,
        amount: &str,
    ) -> Result<Value> {
        self.buy(token, &BuyRequest::limit(instrument_name, price, amount))
            .await
    }

    /// Cancel an open order
    ///
    /// POST /api/v2/private/cancel
    pub async fn cancel(&self, token: &AccessToken, order_id: &str) -> Result<Value> {
        let req = CancelRequest {
            order_id: order_id.to_string(),
        };
        self.call(RpcMethod::PrivateCancel, &req, Some(token)).await
    }

    /// Change amount and price of an open order
    ///
    /// POST /api/v2/private/edit
    ///
    /// NaN and infinite prices are rejected before anything is sent.
    pub async fn edit(
        &self,
        token: &AccessToken,
        order_id: &str,
        amount: i64,
        price: f64,
    ) -> Result<Value> {
        if !price.is_finite() {
            return Err(DeribitError::Config(format!(
                "edit price must be finite, got {price}"
            )));
        }
        let req = EditRequest {
            order_id: order_id.to_string(),
            amount,
            price,
        };
        self.call(RpcMethod::PrivateEdit, &req, Some(token)).await
    }
}
