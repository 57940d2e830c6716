/*
[INPUT]:  Session configuration and a list of operations
[OUTPUT]: Authenticated session, per-operation outcomes and a run summary
[POS]:    Session layer - authenticate once, then drive trading operations
[UPDATE]: When adding operations or changing failure handling
*/

use std::io::Write;

use anyhow::{Context, Result};
use deribit_adapter::{AccessToken, DeribitClient, OpenOrder, OrderBook, Position};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::render;

/// One trading or read operation the driver can run
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Buy {
        instrument: String,
        price: String,
        amount: String,
    },
    Cancel {
        order_id: String,
    },
    Edit {
        order_id: String,
        amount: i64,
        price: f64,
    },
    OrderBook {
        instrument: String,
    },
    Position {
        instrument: String,
    },
    OpenOrders,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Buy { .. } => "place order",
            Operation::Cancel { .. } => "cancel order",
            Operation::Edit { .. } => "modify order",
            Operation::OrderBook { .. } => "order book",
            Operation::Position { .. } => "position",
            Operation::OpenOrders => "open orders",
        }
    }
}

/// Typed result of a successful operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Confirmation { operation: &'static str, value: Value },
    OrderBook { instrument: String, book: OrderBook },
    Position { instrument: String, position: Position },
    OpenOrders(Vec<OpenOrder>),
}

/// Counts from [`Session::run_all`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// The fixed sequence the demo command replays
pub fn demo_plan() -> Vec<Operation> {
    let buy = |price: &str, instrument: &str| Operation::Buy {
        instrument: instrument.to_string(),
        price: price.to_string(),
        amount: "10".to_string(),
    };

    vec![
        buy("20", "ETH-PERPETUAL"),
        buy("20", "BTC-PERPETUAL"),
        buy("30", "BTC-PERPETUAL"),
        Operation::Cancel {
            order_id: "ETH-21668794289".to_string(),
        },
        Operation::Edit {
            order_id: "ETH-21668794289".to_string(),
            amount: 30,
            price: 30.0,
        },
        Operation::OrderBook {
            instrument: "BTC-PERPETUAL".to_string(),
        },
        Operation::Position {
            instrument: "BTC-PERPETUAL".to_string(),
        },
        Operation::OpenOrders,
    ]
}

/// An authenticated client plus the token every call reuses
#[derive(Debug)]
pub struct Session {
    client: DeribitClient,
    token: AccessToken,
}

impl Session {
    /// Validate credentials, build the client and authenticate once
    ///
    /// Missing credentials fail here without any network traffic.
    pub async fn start(config: &SessionConfig) -> Result<Self> {
        let credentials = config.credentials()?;
        let client =
            DeribitClient::with_config_and_base_url(config.client_config(), &config.base_url)
                .context("build client")?;

        let token = client
            .authenticate(&credentials)
            .await
            .context("unable to obtain access token")?;
        info!(base_url = %client.base_url(), "session authenticated");

        Ok(Self { client, token })
    }

    pub fn client(&self) -> &DeribitClient {
        &self.client
    }

    pub async fn run(&self, operation: &Operation) -> deribit_adapter::Result<Outcome> {
        let client = &self.client;
        let token = &self.token;

        match operation {
            Operation::Buy {
                instrument,
                price,
                amount,
            } => client
                .place_limit_buy(token, instrument, price, amount)
                .await
                .map(|value| Outcome::Confirmation {
                    operation: operation.name(),
                    value,
                }),
            Operation::Cancel { order_id } => {
                client
                    .cancel(token, order_id)
                    .await
                    .map(|value| Outcome::Confirmation {
                        operation: operation.name(),
                        value,
                    })
            }
            Operation::Edit {
                order_id,
                amount,
                price,
            } => client
                .edit(token, order_id, *amount, *price)
                .await
                .map(|value| Outcome::Confirmation {
                    operation: operation.name(),
                    value,
                }),
            Operation::OrderBook { instrument } => client
                .get_order_book(instrument, Some(token))
                .await
                .map(|book| Outcome::OrderBook {
                    instrument: instrument.clone(),
                    book,
                }),
            Operation::Position { instrument } => client
                .get_position(token, instrument)
                .await
                .map(|position| Outcome::Position {
                    instrument: instrument.clone(),
                    position,
                }),
            Operation::OpenOrders => client.get_open_orders(token).await.map(Outcome::OpenOrders),
        }
    }

    /// Run every operation in order, rendering each outcome to `out`
    ///
    /// A failed operation is reported and the sequence continues.
    pub async fn run_all(&self, operations: &[Operation], out: &mut impl Write) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for operation in operations {
            match self.run(operation).await {
                Ok(outcome) => {
                    summary.succeeded += 1;
                    writeln!(out, "{}", render::outcome(&outcome)).context("write output")?;
                }
                Err(err) => {
                    summary.failed += 1;
                    warn!(operation = operation.name(), error = %err, "operation failed");
                    writeln!(out, "{}", render::failure(operation.name(), &err))
                        .context("write output")?;
                }
            }
        }

        Ok(summary)
    }
}
