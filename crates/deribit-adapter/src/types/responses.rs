/*
[INPUT]:  Decoded `result` values
[OUTPUT]: Typed position, order book and open order structs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::projection::{Fields, invalid, to_decimal};
use crate::http::Result;
use crate::rpc::RpcMethod;

/// Projection of `private/get_position`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// `None` when the exchange reports no liquidation level (flat position)
    pub estimated_liquidation_price: Option<Decimal>,
    pub size_currency: Decimal,
    pub total_profit_loss: Decimal,
    pub leverage: Decimal,
    pub average_price: Decimal,
    pub mark_price: Decimal,
}

impl Position {
    pub(crate) fn project(result: &Value) -> Result<Self> {
        let fields = Fields::of(RpcMethod::PrivateGetPosition, result, "")?;
        Ok(Self {
            estimated_liquidation_price: fields.optional_decimal("estimated_liquidation_price")?,
            size_currency: fields.decimal("size_currency")?,
            total_profit_loss: fields.decimal("total_profit_loss")?,
            leverage: fields.decimal("leverage")?,
            average_price: fields.decimal("average_price")?,
            mark_price: fields.decimal("mark_price")?,
        })
    }
}

/// One `[price, amount]` entry of a book side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: Decimal,
    pub amount: Decimal,
}

/// Projection of `public/get_order_book`
///
/// `asks` and `bids` keep the order the exchange sent (best price first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub best_bid_price: Option<Decimal>,
    pub best_bid_amount: Decimal,
    pub best_ask_price: Option<Decimal>,
    pub best_ask_amount: Decimal,
    pub asks: Vec<BookLevel>,
    pub bids: Vec<BookLevel>,
    pub mark_price: Decimal,
    pub open_interest: Decimal,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl OrderBook {
    pub(crate) fn project(result: &Value) -> Result<Self> {
        let fields = Fields::of(RpcMethod::PublicGetOrderBook, result, "")?;
        Ok(Self {
            best_bid_price: fields.optional_decimal("best_bid_price")?,
            best_bid_amount: fields.decimal("best_bid_amount")?,
            best_ask_price: fields.optional_decimal("best_ask_price")?,
            best_ask_amount: fields.decimal("best_ask_amount")?,
            asks: project_levels(fields.array("asks")?, "asks")?,
            bids: project_levels(fields.array("bids")?, "bids")?,
            mark_price: fields.decimal("mark_price")?,
            open_interest: fields.decimal("open_interest")?,
            timestamp: fields.i64("timestamp")?,
        })
    }

    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

fn project_levels(entries: &[Value], side: &str) -> Result<Vec<BookLevel>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let level = match entry.as_array().map(Vec::as_slice) {
                Some([price, amount]) => to_decimal(price)
                    .zip(to_decimal(amount))
                    .map(|(price, amount)| BookLevel { price, amount }),
                _ => None,
            };
            level.ok_or_else(|| {
                invalid(
                    RpcMethod::PublicGetOrderBook,
                    format!("{side}[{index}]"),
                    "[price, amount]",
                )
            })
        })
        .collect()
}

/// One entry of `private/get_open_orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub instrument_name: String,
    pub order_id: String,
    pub price: Decimal,
    pub amount: Decimal,
}

impl OpenOrder {
    pub(crate) fn project_all(result: &Value) -> Result<Vec<Self>> {
        let method = RpcMethod::PrivateGetOpenOrders;
        let entries = result
            .as_array()
            .ok_or_else(|| invalid(method, "result", "array"))?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let fields = Fields::of(method, entry, format!("[{index}]"))?;
                Ok(Self {
                    instrument_name: fields.string("instrument_name")?,
                    order_id: fields.string("order_id")?,
                    price: fields.decimal("price")?,
                    amount: fields.decimal("amount")?,
                })
            })
            .collect()
    }
}
