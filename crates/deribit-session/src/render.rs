/*
[INPUT]:  Operation outcomes and errors
[OUTPUT]: Console text
[POS]:    Presentation layer - plain text rendering
[UPDATE]: When output format changes
*/

use std::fmt::Write;

use deribit_adapter::{BookLevel, DeribitError, OrderBook};
use rust_decimal::Decimal;

use crate::session::Outcome;

pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Confirmation { operation, value } => {
            format!("{} response: {}", capitalize(operation), value)
        }
        Outcome::OrderBook { instrument, book } => order_book(instrument, book),
        Outcome::Position {
            instrument,
            position,
        } => {
            let mut out = format!("Position details for {instrument}:\n");
            let _ = writeln!(
                out,
                "Estimated liquidation price: {}",
                optional(position.estimated_liquidation_price)
            );
            let _ = writeln!(out, "Size currency: {}", position.size_currency);
            let _ = writeln!(out, "Total profit loss: {}", position.total_profit_loss);
            let _ = writeln!(out, "Leverage: {}", position.leverage);
            let _ = writeln!(out, "Average price: {}", position.average_price);
            let _ = write!(out, "Mark price: {}", position.mark_price);
            out
        }
        Outcome::OpenOrders(orders) if orders.is_empty() => "Open orders: none".to_string(),
        Outcome::OpenOrders(orders) => {
            let mut out = "Open orders:".to_string();
            for order in orders {
                let _ = write!(
                    out,
                    "\nInstrument: {}, Order ID: {}, Price: {}, Amount: {}",
                    order.instrument_name, order.order_id, order.price, order.amount
                );
            }
            out
        }
    }
}

pub fn failure(operation: &str, err: &DeribitError) -> String {
    let kind = match err {
        DeribitError::Transport { .. } => "transport",
        DeribitError::Decode { .. } => "decode",
        DeribitError::Rpc(_) => "rejected",
        DeribitError::Auth { .. } => "auth",
        DeribitError::Projection { .. } => "projection",
        _ => "local",
    };
    format!("{} failed [{kind}]: {err}", capitalize(operation))
}

fn order_book(instrument: &str, book: &OrderBook) -> String {
    let mut out = format!("Order book for {instrument}:\n");
    let _ = writeln!(
        out,
        "Best bid price: {}, Amount: {}",
        optional(book.best_bid_price),
        book.best_bid_amount
    );
    let _ = writeln!(
        out,
        "Best ask price: {}, Amount: {}",
        optional(book.best_ask_price),
        book.best_ask_amount
    );
    out.push_str("Asks:\n");
    levels(&mut out, &book.asks);
    out.push_str("\nBids:\n");
    levels(&mut out, &book.bids);
    let _ = writeln!(out, "\nMark price: {}", book.mark_price);
    let _ = writeln!(out, "Open interest: {}", book.open_interest);
    let timestamp = book
        .timestamp_utc()
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| book.timestamp.to_string());
    let _ = write!(out, "Timestamp: {timestamp}");
    out
}

fn levels(out: &mut String, levels: &[BookLevel]) {
    for level in levels {
        let _ = writeln!(out, "Price: {}, Amount: {}", level.price, level.amount);
    }
}

fn optional(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
