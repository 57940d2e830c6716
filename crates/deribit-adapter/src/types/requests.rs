/*
[INPUT]:  Exchange schema definitions and serde requirements
[OUTPUT]: Typed Rust params structs, one per exchange method
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::Serialize;

use super::enums::{GrantType, InstrumentKind, NumericParam, OrderType};

/// Params for `public/auth`
#[derive(Clone, PartialEq, Serialize)]
pub struct AuthRequest {
    pub grant_type: GrantType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("grant_type", &self.grant_type)
            .field("scope", &self.scope)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Params for `private/buy`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyRequest {
    pub instrument_name: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub price: NumericParam,
    pub amount: NumericParam,
}

impl BuyRequest {
    /// Limit buy, the only order shape this client places
    pub fn limit(
        instrument_name: impl Into<String>,
        price: impl Into<NumericParam>,
        amount: impl Into<NumericParam>,
    ) -> Self {
        Self {
            instrument_name: instrument_name.into(),
            order_type: OrderType::Limit,
            price: price.into(),
            amount: amount.into(),
        }
    }
}

/// Params for `private/cancel`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelRequest {
    pub order_id: String,
}

/// Params for `private/edit`
///
/// Unlike `private/buy`, amount and price are numeric here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditRequest {
    pub order_id: String,
    pub amount: i64,
    pub price: f64,
}

/// Params for `private/get_position`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetPositionRequest {
    pub instrument_name: String,
}

/// Params for `public/get_order_book`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetOrderBookRequest {
    pub instrument_name: String,
}

/// Params for `private/get_open_orders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetOpenOrdersRequest {
    pub kind: InstrumentKind,
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

impl Default for GetOpenOrdersRequest {
    fn default() -> Self {
        Self {
            kind: InstrumentKind::Future,
            order_type: OrderType::Limit,
        }
    }
}
