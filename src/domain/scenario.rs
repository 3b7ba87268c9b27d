/// The three figures the owner types in: what a cup costs to make, what it
/// sells for, and how much total profit the stand should clear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub cost_per_cup: f64,
    pub price_per_cup: f64,
    pub target_profit: f64,
}

impl Default for Scenario {
    /// The canonical example scenario, also used by the reset action.
    fn default() -> Self {
        Self {
            cost_per_cup: 10.0,
            price_per_cup: 25.0,
            target_profit: 7000.0,
        }
    }
}

impl Scenario {
    /// Builds a scenario from the raw field strings. Anything that does not
    /// parse to a non-negative finite number becomes zero, so a half-typed
    /// or cleared field degrades instead of erroring.
    pub fn from_inputs(cost: &str, price: &str, target: &str) -> Self {
        Self {
            cost_per_cup: coerce_amount(cost),
            price_per_cup: coerce_amount(price),
            target_profit: coerce_amount(target),
        }
    }
}

/// Coerces one raw field to a finite, non-negative amount.
pub fn coerce_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.max(0.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_plain_and_decimal_numbers() {
        assert_eq!(coerce_amount("10"), 10.0);
        assert_eq!(coerce_amount("12.5"), 12.5);
        assert_eq!(coerce_amount("  7000 "), 7000.0);
    }

    #[test]
    fn junk_input_becomes_zero() {
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("abc"), 0.0);
        assert_eq!(coerce_amount("12x"), 0.0);
    }

    #[test]
    fn non_finite_input_becomes_zero() {
        assert_eq!(coerce_amount("inf"), 0.0);
        assert_eq!(coerce_amount("NaN"), 0.0);
        assert_eq!(coerce_amount("1e999"), 0.0);
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(coerce_amount("-5"), 0.0);
        assert_eq!(coerce_amount("-0.01"), 0.0);
    }

    #[test]
    fn from_inputs_coerces_each_field_independently() {
        let scenario = Scenario::from_inputs("10", "oops", "7000");
        assert_eq!(scenario.cost_per_cup, 10.0);
        assert_eq!(scenario.price_per_cup, 0.0);
        assert_eq!(scenario.target_profit, 7000.0);
    }

    #[test]
    fn default_is_the_example_scenario_every_time() {
        assert_eq!(Scenario::default(), Scenario::default());
        let defaults = Scenario::default();
        assert_eq!(defaults.cost_per_cup, 10.0);
        assert_eq!(defaults.price_per_cup, 25.0);
        assert_eq!(defaults.target_profit, 7000.0);
    }
}
