/*
[INPUT]:  Instrument names, filters and bearer token
[OUTPUT]: User account data (position, open orders)
[POS]:    HTTP layer - user data endpoints (require auth)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use crate::auth::AccessToken;
use crate::http::{DeribitClient, Result};
use crate::rpc::RpcMethod;
use crate::types::{GetOpenOrdersRequest, GetPositionRequest, OpenOrder, Position};

impl DeribitClient {
    /// Query the position in one instrument
    ///
    /// POST /api/v2/private/get_position
    pub async fn get_position(&self, token: &AccessToken, instrument_name: &str) -> Result<Position> {
        let req = GetPositionRequest {
            instrument_name: instrument_name.to_string(),
        };
        let result = self.call(RpcMethod::PrivateGetPosition, &req, Some(token)).await?;
        Position::project(&result)
    }

    /// Query open limit orders on futures
    ///
    /// POST /api/v2/private/get_open_orders
    pub async fn get_open_orders(&self, token: &AccessToken) -> Result<Vec<OpenOrder>> {
        self.get_open_orders_with(token, &GetOpenOrdersRequest::default())
            .await
    }

    /// Query open orders with an explicit kind/type filter
    pub async fn get_open_orders_with(
        &self,
        token: &AccessToken,
        filter: &GetOpenOrdersRequest,
    ) -> Result<Vec<OpenOrder>> {
        let result = self
            .call(RpcMethod::PrivateGetOpenOrders, filter, Some(token))
            .await?;
        OpenOrder::project_all(&result)
    }
}
