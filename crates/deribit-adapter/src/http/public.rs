/*
[INPUT]:  Instrument names
[OUTPUT]: Market data (order book)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::auth::AccessToken;
use crate::http::{DeribitClient, Result};
use crate::rpc::RpcMethod;
use crate::types::{GetOrderBookRequest, OrderBook};

impl DeribitClient {
    /// Query the order book for an instrument
    ///
    /// POST /api/v2/public/get_order_book
    /// A token is optional; when given it is attached like on private calls.
    pub async fn get_order_book(
        &self,
        instrument_name: &str,
        token: Option<&AccessToken>,
    ) -> Result<OrderBook> {
        let req = GetOrderBookRequest {
            instrument_name: instrument_name.to_string(),
        };
        let result = self.call(RpcMethod::PublicGetOrderBook, &req, token).await?;
        OrderBook::project(&result)
    }
}
