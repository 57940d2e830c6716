/*
[INPUT]:  Exchange method identifiers
[OUTPUT]: Method names and HTTP paths under /api/v2
[POS]:    RPC layer - method catalogue
[UPDATE]: When adding new exchange methods
*/

use std::fmt;

/// Exchange methods this client speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    PublicAuth,
    PublicGetOrderBook,
    PrivateBuy,
    PrivateCancel,
    PrivateEdit,
    PrivateGetPosition,
    PrivateGetOpenOrders,
}

impl RpcMethod {
    /// Method name as sent in the envelope
    pub fn as_str(self) -> &'static str {
        match self {
            RpcMethod::PublicAuth => "public/auth",
            RpcMethod::PublicGetOrderBook => "public/get_order_book",
            RpcMethod::PrivateBuy => "private/buy",
            RpcMethod::PrivateCancel => "private/cancel",
            RpcMethod::PrivateEdit => "private/edit",
            RpcMethod::PrivateGetPosition => "private/get_position",
            RpcMethod::PrivateGetOpenOrders => "private/get_open_orders",
        }
    }

    pub fn is_private(self) -> bool {
        self.as_str().starts_with("private/")
    }

    /// HTTP path relative to the base URL
    pub fn path(self) -> String {
        format!("/api/v2/{}", self.as_str())
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
