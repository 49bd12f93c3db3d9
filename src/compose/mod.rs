//! Composition module - the pure core of the gateway
//!
//! Validation, expiry date arithmetic, band formatting, and message
//! assembly. Nothing in here performs I/O; the server glues these pieces
//! to the identity and dispatch boundaries.

pub mod expiry;
pub mod message;
pub mod range;
pub mod validate;

pub use expiry::{expiry_label, next_expiry, today_in};
pub use message::{compose, IGNORE_ALERT_TEXT};
pub use range::{band, band_of, format_price, parse_price};
pub use validate::{validate, TradeForm};

use crate::common::errors::Result;

/// Validate a raw form and compose the outbound text in one step
pub fn compose_form(form: &TradeForm, expiry: &str) -> Result<String> {
    let intent = validate(form)?;
    Ok(compose(&intent, expiry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::{OptionSide, TradeCategory};
    use pretty_assertions::assert_eq;

    #[test]
    fn compose_form_runs_validation_first() {
        let form = TradeForm {
            category: Some(TradeCategory::FreshBuy),
            strike: Some(24_000),
            option_side: Some(OptionSide::CE),
            base_price: Some("not a price".to_string()),
            ..TradeForm::default()
        };
        assert!(compose_form(&form, "11 Nov").is_err());
    }

    #[test]
    fn compose_form_end_to_end() {
        let form = TradeForm {
            category: Some(TradeCategory::FreshBuy),
            strike: Some(24_000),
            option_side: Some(OptionSide::CE),
            base_price: Some("160".to_string()),
            ..TradeForm::default()
        };
        assert_eq!(
            compose_form(&form, "11 Nov").unwrap(),
            "FRESH TRADE\n\n\"BUY\" 11 Nov \"Nifty 24000 CE\" between 160 - 165"
        );
    }
}
