//! Form validation
//!
//! Turns the raw form payload (all fields optional, prices as strings) into
//! a typed [`TradeIntent`]. Nothing downstream of this module sees partial
//! or non-numeric input.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::common::errors::{GatewayError, Result};
use crate::common::types::{
    ExitMode, MarketDirection, OptionSide, SquareOffTemplate, Strike, TradeAction, TradeCategory,
    TradeIntent,
};
use crate::compose::range::parse_price;

/// Raw trade form as posted by the client
///
/// Price fields arrive as strings because that is what form inputs carry;
/// every field is optional so validation can report precise errors instead
/// of failing at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeForm {
    pub category: Option<TradeCategory>,
    pub strike: Option<i32>,
    pub option_side: Option<OptionSide>,
    /// Manually selected buy-leg side; overridden by the market direction
    pub buy_side: Option<OptionSide>,
    /// Manually selected sell-leg side; overridden by the market direction
    pub sell_side: Option<OptionSide>,
    pub market_direction: Option<MarketDirection>,
    pub base_price: Option<String>,
    pub buy_price: Option<String>,
    pub sell_price: Option<String>,
    pub stop_loss: Option<String>,
    pub buy_stop_loss: Option<String>,
    pub sell_stop_loss: Option<String>,
    pub template_id: Option<SquareOffTemplate>,
    pub exit_mode: Option<ExitMode>,
    pub ce_exit_price: Option<String>,
    pub pe_exit_price: Option<String>,
    pub exit_price: Option<String>,
}

fn required<T: Copy>(field: &str, value: &Option<T>) -> Result<T> {
    value
        .as_ref()
        .copied()
        .ok_or_else(|| GatewayError::validation(format!("{field} is required")))
}

fn required_price(field: &str, raw: &Option<String>) -> Result<Decimal> {
    let raw = raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GatewayError::validation(format!("{field} is required")))?;
    let price = parse_price(raw)
        .ok_or_else(|| GatewayError::validation(format!("{field} must be a number")))?;
    if price.is_sign_negative() {
        return Err(GatewayError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(price)
}

fn optional_price(field: &str, raw: &Option<String>) -> Result<Option<Decimal>> {
    match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => {
            let price = parse_price(raw)
                .ok_or_else(|| GatewayError::validation(format!("{field} must be a number")))?;
            if price.is_sign_negative() {
                return Err(GatewayError::validation(format!(
                    "{field} must not be negative"
                )));
            }
            Ok(Some(price))
        }
    }
}

fn required_strike(form: &TradeForm) -> Result<Strike> {
    let value = required("strike", &form.strike)?;
    Strike::new(value)
}

/// Validate a raw form into a trade intent
///
/// Any missing or malformed required field aborts with a
/// [`GatewayError::Validation`]; nothing partial ever reaches composition.
pub fn validate(form: &TradeForm) -> Result<TradeIntent> {
    let category = required("category", &form.category)?;

    match category {
        TradeCategory::FreshBuy | TradeCategory::FreshSell => {
            let action = match category {
                TradeCategory::FreshBuy => TradeAction::Buy,
                _ => TradeAction::Sell,
            };
            Ok(TradeIntent::FreshSingle {
                action,
                strike: required_strike(form)?,
                side: required("optionSide", &form.option_side)?,
                base_price: required_price("basePrice", &form.base_price)?,
                stop_loss: optional_price("stopLoss", &form.stop_loss)?,
            })
        }
        TradeCategory::FreshBoth => {
            // A directional trade with both legs on the same side is a
            // contradiction; flag it before composing anything.
            if let (Some(buy), Some(sell)) = (form.buy_side, form.sell_side) {
                if buy == sell {
                    return Err(GatewayError::validation(
                        "both legs carry the same option side",
                    ));
                }
            }
            Ok(TradeIntent::FreshBoth {
                strike: required_strike(form)?,
                direction: required("marketDirection", &form.market_direction)?,
                buy_price: required_price("buyPrice", &form.buy_price)?,
                sell_price: required_price("sellPrice", &form.sell_price)?,
                buy_stop_loss: optional_price("buyStopLoss", &form.buy_stop_loss)?,
                sell_stop_loss: optional_price("sellStopLoss", &form.sell_stop_loss)?,
            })
        }
        TradeCategory::SquareOffBoth => Ok(TradeIntent::SquareOffBoth {
            strike: required_strike(form)?,
            direction: required("marketDirection", &form.market_direction)?,
            template: required("templateId", &form.template_id)?,
            ce_exit: required_price("ceExitPrice", &form.ce_exit_price)?,
            pe_exit: required_price("peExitPrice", &form.pe_exit_price)?,
        }),
        TradeCategory::SquareOffSingle => Ok(TradeIntent::SquareOffSingle {
            strike: required_strike(form)?,
            template: required("templateId", &form.template_id)?,
            mode: required("exitMode", &form.exit_mode)?,
            side: required("optionSide", &form.option_side)?,
            exit_price: required_price("exitPrice", &form.exit_price)?,
        }),
        TradeCategory::ExpirySingle => Ok(TradeIntent::ExpirySingle {
            strike: required_strike(form)?,
            direction: required("marketDirection", &form.market_direction)?,
            template: required("templateId", &form.template_id)?,
            exit_price: required_price("exitPrice", &form.exit_price)?,
        }),
        TradeCategory::IgnoreAlert => Ok(TradeIntent::IgnoreAlert),
    }
}
