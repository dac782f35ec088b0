use serde::{Deserialize, Serialize};
use std::fmt;

/// An interceptable method on a buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyMethod {
    Buy,
    BuyPrice,
}

impl BuyMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuyMethod::Buy => "buy",
            BuyMethod::BuyPrice => "buy_price",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(BuyMethod::Buy),
            "buy_price" => Some(BuyMethod::BuyPrice),
            _ => None,
        }
    }
}

impl fmt::Display for BuyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The call being intercepted, as seen by advice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinPoint<'a> {
    pub bean: &'a str,
    pub method: BuyMethod,
    pub price: Option<f64>,
}

/// An owned record of one intercepted call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub bean: String,
    pub method: BuyMethod,
    pub price: Option<f64>,
    pub result: String,
}

impl Invocation {
    pub fn new(join_point: &JoinPoint<'_>, result: &str) -> Self {
        Self {
            bean: join_point.bean.to_string(),
            method: join_point.method,
            price: join_point.price,
            result: result.to_string(),
        }
    }
}
