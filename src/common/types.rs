//! Domain vocabulary shared across composition, validation, and the server

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::errors::{GatewayError, Result};

/// Option side of a leg (call or put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    CE,
    PE,
}

impl OptionSide {
    /// The complementary side
    pub fn opposite(self) -> Self {
        match self {
            OptionSide::CE => OptionSide::PE,
            OptionSide::PE => OptionSide::CE,
        }
    }
}

impl std::fmt::Display for OptionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionSide::CE => write!(f, "CE"),
            OptionSide::PE => write!(f, "PE"),
        }
    }
}

/// Entry action for a fresh trade leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Sell => write!(f, "SELL"),
        }
    }
}

/// The trader's market view
///
/// For two-leg trades the direction alone determines both option sides:
/// the legs are never independently selectable once a direction is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketDirection {
    Bullish,
    Bearish,
}

impl MarketDirection {
    /// Side of the buy leg in a directional two-leg trade
    pub fn buy_side(self) -> OptionSide {
        match self {
            MarketDirection::Bullish => OptionSide::CE,
            MarketDirection::Bearish => OptionSide::PE,
        }
    }

    /// Side of the sell leg in a directional two-leg trade
    pub fn sell_side(self) -> OptionSide {
        self.buy_side().opposite()
    }

    /// Side bought back on expiry day (Bullish view closes the put)
    pub fn expiry_buyback_side(self) -> OptionSide {
        match self {
            MarketDirection::Bullish => OptionSide::PE,
            MarketDirection::Bearish => OptionSide::CE,
        }
    }
}

/// Trade category selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TradeCategory {
    FreshBuy,
    FreshSell,
    FreshBoth,
    SquareOffBoth,
    SquareOffSingle,
    ExpirySingle,
    IgnoreAlert,
}

/// Option strike, constrained to the weekly Nifty grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Strike(i32);

impl Strike {
    pub const MIN: i32 = 24_000;
    pub const MAX: i32 = 50_000;
    pub const STEP: i32 = 50;

    /// Create a strike, enforcing the grid: multiple of 50 in [24000, 50000]
    pub fn new(value: i32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(GatewayError::validation(format!(
                "strike {} is outside the allowed range {}..{}",
                value,
                Self::MIN,
                Self::MAX
            )));
        }
        if value % Self::STEP != 0 {
            return Err(GatewayError::validation(format!(
                "strike {} is not a multiple of {}",
                value,
                Self::STEP
            )));
        }
        Ok(Strike(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Strike {
    type Error = GatewayError;

    fn try_from(value: i32) -> Result<Self> {
        Strike::new(value)
    }
}

impl From<Strike> for i32 {
    fn from(strike: Strike) -> i32 {
        strike.0
    }
}

impl std::fmt::Display for Strike {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five fixed square-off phrasings selectable on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareOffTemplate {
    #[serde(rename = "book100")]
    Book100,
    #[serde(rename = "book75")]
    Book75,
    #[serde(rename = "book50")]
    Book50,
    #[serde(rename = "costToCost")]
    CostToCost,
    #[serde(rename = "exitNow")]
    ExitNow,
}

impl SquareOffTemplate {
    /// The fixed phrasing sent ahead of the leg instructions
    pub fn text(self) -> &'static str {
        match self {
            SquareOffTemplate::Book100 => "Modify stop loss and book 100% profit.",
            SquareOffTemplate::Book75 => "Modify stop loss and book 75% profit.",
            SquareOffTemplate::Book50 => "Modify stop loss and book 50% profit.",
            SquareOffTemplate::CostToCost => "Exit both positions cost to cost.",
            SquareOffTemplate::ExitNow => "Exit the position immediately.",
        }
    }
}

/// Which leg a single-leg square-off closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExitMode {
    /// Close an existing long: the instruction verb is "Sell"
    FromBuy,
    /// Close an existing short: the instruction verb is "Buy"
    FromSell,
}

impl ExitMode {
    /// Verb used in the square-off instruction
    pub fn verb(self) -> &'static str {
        match self {
            ExitMode::FromBuy => "Sell",
            ExitMode::FromSell => "Buy",
        }
    }
}

/// A validated trade intent
///
/// Built only by the form validator; composition is total over these values.
/// Created fresh per submission and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeIntent {
    /// Single-leg fresh entry (buy or sell)
    FreshSingle {
        action: TradeAction,
        strike: Strike,
        side: OptionSide,
        base_price: Decimal,
        stop_loss: Option<Decimal>,
    },
    /// Two-leg fresh entry; sides derive from the direction
    FreshBoth {
        strike: Strike,
        direction: MarketDirection,
        buy_price: Decimal,
        sell_price: Decimal,
        buy_stop_loss: Option<Decimal>,
        sell_stop_loss: Option<Decimal>,
    },
    /// Close both legs of a directional position
    SquareOffBoth {
        strike: Strike,
        direction: MarketDirection,
        template: SquareOffTemplate,
        ce_exit: Decimal,
        pe_exit: Decimal,
    },
    /// Close one leg of a position
    SquareOffSingle {
        strike: Strike,
        template: SquareOffTemplate,
        mode: ExitMode,
        side: OptionSide,
        exit_price: Decimal,
    },
    /// Expiry-day buyback of the short leg determined by the market view
    ExpirySingle {
        strike: Strike,
        direction: MarketDirection,
        template: SquareOffTemplate,
        exit_price: Decimal,
    },
    /// Fixed instruction to disregard the previous alert
    IgnoreAlert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strike_accepts_grid_values() {
        assert!(Strike::new(24_000).is_ok());
        assert!(Strike::new(25_950).is_ok());
        assert!(Strike::new(50_000).is_ok());
    }

    #[test]
    fn strike_rejects_off_grid_values() {
        assert!(Strike::new(23_950).is_err());
        assert!(Strike::new(50_050).is_err());
        assert!(Strike::new(24_025).is_err());
    }

    #[test]
    fn direction_determines_both_sides() {
        assert_eq!(MarketDirection::Bullish.buy_side(), OptionSide::CE);
        assert_eq!(MarketDirection::Bullish.sell_side(), OptionSide::PE);
        assert_eq!(MarketDirection::Bearish.buy_side(), OptionSide::PE);
        assert_eq!(MarketDirection::Bearish.sell_side(), OptionSide::CE);
    }

    #[test]
    fn expiry_buyback_side_is_the_short_hedge() {
        assert_eq!(
            MarketDirection::Bullish.expiry_buyback_side(),
            OptionSide::PE
        );
        assert_eq!(
            MarketDirection::Bearish.expiry_buyback_side(),
            OptionSide::CE
        );
    }

    #[test]
    fn template_text_matches_selection() {
        assert_eq!(
            SquareOffTemplate::Book100.text(),
            "Modify stop loss and book 100% profit."
        );
        assert_eq!(
            SquareOffTemplate::ExitNow.text(),
            "Exit the position immediately."
        );
    }
}
