//! Message composer
//!
//! Pure mapping from a validated [`TradeIntent`] to the outbound alert text.
//! The expiry label is passed in so the same intent always composes to
//! byte-identical output.

use rust_decimal::Decimal;

use crate::common::types::{OptionSide, Strike, TradeAction, TradeIntent};
use crate::compose::range::{band_of, format_price};

/// Fixed text for the ignore-alert instruction
pub const IGNORE_ALERT_TEXT: &str = "Kindly ignore the alert";

fn fresh_leg(
    action: TradeAction,
    expiry: &str,
    strike: Strike,
    side: OptionSide,
    base_price: Decimal,
) -> String {
    format!(
        "\"{action}\" {expiry} \"Nifty {strike} {side}\" between {}",
        band_of(base_price)
    )
}

fn stop_loss_clause(strike: Strike, side: OptionSide, stop_loss: Decimal) -> String {
    format!(
        "Stop loss for {strike} {side} is {}",
        format_price(stop_loss)
    )
}

/// Compose the outbound alert text for a validated intent
pub fn compose(intent: &TradeIntent, expiry: &str) -> String {
    match intent {
        TradeIntent::FreshSingle {
            action,
            strike,
            side,
            base_price,
            stop_loss,
        } => {
            let mut message = format!(
                "FRESH TRADE\n\n{}",
                fresh_leg(*action, expiry, *strike, *side, *base_price)
            );
            if let Some(sl) = stop_loss {
                message.push_str("\n\n");
                message.push_str(&stop_loss_clause(*strike, *side, *sl));
            }
            message
        }
        TradeIntent::FreshBoth {
            strike,
            direction,
            buy_price,
            sell_price,
            buy_stop_loss,
            sell_stop_loss,
        } => {
            let buy_side = direction.buy_side();
            let sell_side = direction.sell_side();
            let mut message = format!(
                "FRESH TRADE\n\n{} AND {}",
                fresh_leg(TradeAction::Buy, expiry, *strike, buy_side, *buy_price),
                fresh_leg(TradeAction::Sell, expiry, *strike, sell_side, *sell_price),
            );
            match (buy_stop_loss, sell_stop_loss) {
                (Some(buy_sl), Some(sell_sl)) => {
                    message.push_str(&format!(
                        "\n\nStop loss for {strike} {buy_side} is {} and for {strike} {sell_side} is {}",
                        format_price(*buy_sl),
                        format_price(*sell_sl),
                    ));
                }
                (Some(buy_sl), None) => {
                    message.push_str("\n\n");
                    message.push_str(&stop_loss_clause(*strike, buy_side, *buy_sl));
                }
                (None, Some(sell_sl)) => {
                    message.push_str("\n\n");
                    message.push_str(&stop_loss_clause(*strike, sell_side, *sell_sl));
                }
                (None, None) => {}
            }
            message
        }
        TradeIntent::SquareOffBoth {
            strike,
            direction,
            template,
            ce_exit,
            pe_exit,
        } => {
            // Closing a directional position reverses both legs: the bought
            // side is sold and the sold side is bought back.
            let sell_side = direction.buy_side();
            let buy_side = direction.sell_side();
            let sell_exit = match sell_side {
                OptionSide::CE => ce_exit,
                OptionSide::PE => pe_exit,
            };
            let buy_exit = match buy_side {
                OptionSide::CE => ce_exit,
                OptionSide::PE => pe_exit,
            };
            format!(
                "SQUARE OFF\n{} Sell {strike} {sell_side} @ {} and Buy {strike} {buy_side} @ {}",
                template.text(),
                format_price(*sell_exit),
                format_price(*buy_exit),
            )
        }
        TradeIntent::SquareOffSingle {
            strike,
            template,
            mode,
            side,
            exit_price,
        } => format!(
            "SQUARE OFF\n{} {} {strike} {side} @ {}",
            template.text(),
            mode.verb(),
            format_price(*exit_price),
        ),
        TradeIntent::ExpirySingle {
            strike,
            direction,
            template,
            exit_price,
        } => format!(
            "SQUARE OFF\n{} Buy {strike} {} @ {}",
            template.text(),
            direction.expiry_buyback_side(),
            format_price(*exit_price),
        ),
        TradeIntent::IgnoreAlert => IGNORE_ALERT_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::{ExitMode, MarketDirection, SquareOffTemplate};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn strike(value: i32) -> Strike {
        Strike::new(value).unwrap()
    }

    #[test]
    fn fresh_buy_scenario() {
        let intent = TradeIntent::FreshSingle {
            action: TradeAction::Buy,
            strike: strike(24_000),
            side: OptionSide::CE,
            base_price: dec!(160),
            stop_loss: None,
        };
        assert_eq!(
            compose(&intent, "11 Nov"),
            "FRESH TRADE\n\n\"BUY\" 11 Nov \"Nifty 24000 CE\" between 160 - 165"
        );
    }

    #[test]
    fn fresh_sell_with_stop_loss() {
        let intent = TradeIntent::FreshSingle {
            action: TradeAction::Sell,
            strike: strike(24_500),
            side: OptionSide::PE,
            base_price: dec!(90.5),
            stop_loss: Some(dec!(120)),
        };
        assert_eq!(
            compose(&intent, "18 Nov"),
            "FRESH TRADE\n\n\"SELL\" 18 Nov \"Nifty 24500 PE\" between 90.50 - 95.50\
             \n\nStop loss for 24500 PE is 120"
        );
    }

    #[test]
    fn fresh_both_bullish_derives_ce_buy_pe_sell() {
        let intent = TradeIntent::FreshBoth {
            strike: strike(25_000),
            direction: MarketDirection::Bullish,
            buy_price: dec!(100),
            sell_price: dec!(110),
            buy_stop_loss: None,
            sell_stop_loss: None,
        };
        let message = compose(&intent, "11 Nov");
        assert_eq!(
            message,
            "FRESH TRADE\n\n\"BUY\" 11 Nov \"Nifty 25000 CE\" between 100 - 105 \
             AND \"SELL\" 11 Nov \"Nifty 25000 PE\" between 110 - 115"
        );
    }

    #[test]
    fn fresh_both_bearish_inverts_the_pair() {
        let intent = TradeIntent::FreshBoth {
            strike: strike(25_000),
            direction: MarketDirection::Bearish,
            buy_price: dec!(100),
            sell_price: dec!(110),
            buy_stop_loss: None,
            sell_stop_loss: None,
        };
        let message = compose(&intent, "11 Nov");
        assert!(message.contains("\"BUY\" 11 Nov \"Nifty 25000 PE\""));
        assert!(message.contains("\"SELL\" 11 Nov \"Nifty 25000 CE\""));
    }

    #[test]
    fn fresh_both_with_both_stop_losses() {
        let intent = TradeIntent::FreshBoth {
            strike: strike(25_000),
            direction: MarketDirection::Bullish,
            buy_price: dec!(100),
            sell_price: dec!(110),
            buy_stop_loss: Some(dec!(80)),
            sell_stop_loss: Some(dec!(140)),
        };
        let message = compose(&intent, "11 Nov");
        assert!(message.ends_with(
            "Stop loss for 25000 CE is 80 and for 25000 PE is 140"
        ));
    }

    #[test]
    fn fresh_both_with_only_sell_stop_loss() {
        let intent = TradeIntent::FreshBoth {
            strike: strike(25_000),
            direction: MarketDirection::Bullish,
            buy_price: dec!(100),
            sell_price: dec!(110),
            buy_stop_loss: None,
            sell_stop_loss: Some(dec!(140)),
        };
        let message = compose(&intent, "11 Nov");
        assert!(message.ends_with("Stop loss for 25000 PE is 140"));
        assert!(!message.contains("and for"));
    }

    #[test]
    fn square_off_both_bullish_scenario() {
        let intent = TradeIntent::SquareOffBoth {
            strike: strike(25_900),
            direction: MarketDirection::Bullish,
            template: SquareOffTemplate::Book100,
            ce_exit: dec!(120),
            pe_exit: dec!(125),
        };
        assert_eq!(
            compose(&intent, "11 Nov"),
            "SQUARE OFF\nModify stop loss and book 100% profit. \
             Sell 25900 CE @ 120 and Buy 25900 PE @ 125"
        );
    }

    #[test]
    fn square_off_both_bearish_swaps_verbs() {
        let intent = TradeIntent::SquareOffBoth {
            strike: strike(25_900),
            direction: MarketDirection::Bearish,
            template: SquareOffTemplate::Book100,
            ce_exit: dec!(120),
            pe_exit: dec!(125),
        };
        assert_eq!(
            compose(&intent, "11 Nov"),
            "SQUARE OFF\nModify stop loss and book 100% profit. \
             Sell 25900 PE @ 125 and Buy 25900 CE @ 120"
        );
    }

    #[test]
    fn square_off_single_exit_from_buy_sells() {
        let intent = TradeIntent::SquareOffSingle {
            strike: strike(24_800),
            template: SquareOffTemplate::ExitNow,
            mode: ExitMode::FromBuy,
            side: OptionSide::CE,
            exit_price: dec!(95.25),
        };
        assert_eq!(
            compose(&intent, "11 Nov"),
            "SQUARE OFF\nExit the position immediately. Sell 24800 CE @ 95.25"
        );
    }

    #[test]
    fn square_off_single_exit_from_sell_buys() {
        let intent = TradeIntent::SquareOffSingle {
            strike: strike(24_800),
            template: SquareOffTemplate::CostToCost,
            mode: ExitMode::FromSell,
            side: OptionSide::PE,
            exit_price: dec!(140),
        };
        assert_eq!(
            compose(&intent, "11 Nov"),
            "SQUARE OFF\nExit both positions cost to cost. Buy 24800 PE @ 140"
        );
    }

    #[test]
    fn expiry_single_bullish_buys_back_the_put() {
        let intent = TradeIntent::ExpirySingle {
            strike: strike(26_000),
            direction: MarketDirection::Bullish,
            template: SquareOffTemplate::Book50,
            exit_price: dec!(12),
        };
        assert_eq!(
            compose(&intent, "11 Nov"),
            "SQUARE OFF\nModify stop loss and book 50% profit. Buy 26000 PE @ 12"
        );
    }

    #[test]
    fn ignore_alert_is_the_fixed_text() {
        assert_eq!(
            compose(&TradeIntent::IgnoreAlert, "11 Nov"),
            "Kindly ignore the alert"
        );
        // The expiry label must not leak into the output
        assert_eq!(
            compose(&TradeIntent::IgnoreAlert, "18 Nov"),
            "Kindly ignore the alert"
        );
    }

    #[test]
    fn composition_is_idempotent() {
        let intent = TradeIntent::FreshSingle {
            action: TradeAction::Buy,
            strike: strike(24_000),
            side: OptionSide::CE,
            base_price: dec!(160),
            stop_loss: Some(dec!(130)),
        };
        assert_eq!(compose(&intent, "11 Nov"), compose(&intent, "11 Nov"));
    }
}
