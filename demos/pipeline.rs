//! Parses, validates and prices an order line, logging failed steps.
//!
//! Run with: cargo run --example pipeline --features tracing

use errm::prelude::*;

use std::fmt;
use std::num::ParseIntError;

struct Catalog {
    unit_price_cents: u64,
}

#[derive(Debug)]
enum OrderError {
    Parse(ParseIntError),
    Overflow,
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::Parse(e) => write!(f, "invalid quantity: {}", e),
            OrderError::Overflow => write!(f, "total does not fit in u64"),
        }
    }
}

fn parse_quantity(raw: &str) -> Result<u64, OrderError> {
    raw.trim().parse().map_err(OrderError::Parse)
}

fn price(catalog: &Catalog, quantity: u64) -> Result<u64, OrderError> {
    quantity
        .checked_mul(catalog.unit_price_cents)
        .ok_or(OrderError::Overflow)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let catalog = Catalog {
        unit_price_cents: 250,
    };
    let priced = with_context(catalog, price);

    for raw in ["4", " 12 ", "twelve", "18446744073709551615"] {
        let total = transform(
            bind(succeed(raw), wrap_named("parse_quantity", parse_quantity)),
            &priced,
        );

        match total.into_result() {
            Ok(cents) => tracing::info!("{:?} costs {} cents", raw, cents),
            Err(e) => tracing::error!("{}", e),
        }
    }

    let fallback = or_else(bind(succeed("none"), wrap(parse_quantity)), from_value(1));
    tracing::info!("quantity with fallback: {:?}", fallback.unpack());
}
