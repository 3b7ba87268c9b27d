use super::scenario::Scenario;

/// Everything the result cards show, derived from one [`Scenario`].
///
/// Never stored anywhere: the page recomputes this on every render, so the
/// displayed numbers cannot drift from the inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub margin_per_cup: f64,
    pub cups_needed: u64,
    pub total_cost: f64,
    pub revenue_at_goal: f64,
    pub profit_at_goal: f64,
}

impl Projection {
    /// The goal is only reachable while each cup sold gains money.
    pub fn is_achievable(&self) -> bool {
        self.margin_per_cup > 0.0
    }
}

/// Projects how many cups the stand must sell to reach the target profit,
/// and what that volume costs and earns.
///
/// Cups round up: a fractional requirement still means one more whole cup,
/// so the profit at goal never undershoots the target. With a zero or
/// negative margin the goal is unreachable and everything reports zero; the
/// caller is expected to check [`Projection::is_achievable`] before showing
/// the numbers.
pub fn project(scenario: &Scenario) -> Projection {
    let margin_per_cup = scenario.price_per_cup - scenario.cost_per_cup;
    if margin_per_cup <= 0.0 {
        return Projection {
            margin_per_cup,
            cups_needed: 0,
            total_cost: 0.0,
            revenue_at_goal: 0.0,
            profit_at_goal: 0.0,
        };
    }

    let cups_needed = (scenario.target_profit / margin_per_cup).ceil() as u64;
    let total_cost = cups_needed as f64 * scenario.cost_per_cup;
    let revenue_at_goal = cups_needed as f64 * scenario.price_per_cup;

    Projection {
        margin_per_cup,
        cups_needed,
        total_cost,
        revenue_at_goal,
        profit_at_goal: revenue_at_goal - total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(cost: f64, price: f64, target: f64) -> Scenario {
        Scenario {
            cost_per_cup: cost,
            price_per_cup: price,
            target_profit: target,
        }
    }

    #[test]
    fn the_example_scenario_works_out() {
        let outlook = project(&scenario(10.0, 25.0, 7000.0));
        assert!(outlook.is_achievable());
        assert_eq!(outlook.margin_per_cup, 15.0);
        assert_eq!(outlook.cups_needed, 467);
        assert_eq!(outlook.total_cost, 4670.0);
        assert_eq!(outlook.revenue_at_goal, 11675.0);
        assert_eq!(outlook.profit_at_goal, 7005.0);
    }

    #[test]
    fn fractional_requirements_round_up_to_a_whole_cup() {
        // 100 / 15 = 6.66..., so the seventh cup is needed.
        let outlook = project(&scenario(10.0, 25.0, 100.0));
        assert_eq!(outlook.cups_needed, 7);
        assert_eq!(outlook.profit_at_goal, 105.0);
    }

    #[test]
    fn profit_at_goal_never_undershoots_the_target() {
        for target in [1.0, 99.0, 1000.0, 7000.0, 123456.0] {
            let outlook = project(&scenario(10.0, 25.0, target));
            assert!(
                outlook.profit_at_goal >= target,
                "target {target} undershot: {}",
                outlook.profit_at_goal
            );
        }
    }

    #[test]
    fn positive_margin_is_achievable() {
        assert!(project(&scenario(0.0, 25.0, 1000.0)).is_achievable());
        assert!(project(&scenario(24.99, 25.0, 1000.0)).is_achievable());
    }

    #[test]
    fn price_at_or_below_cost_is_not_achievable() {
        for (cost, price) in [(25.0, 25.0), (30.0, 10.0), (0.0, 0.0)] {
            let outlook = project(&scenario(cost, price, 7000.0));
            assert!(!outlook.is_achievable());
            assert_eq!(outlook.cups_needed, 0);
            assert_eq!(outlook.total_cost, 0.0);
            assert_eq!(outlook.revenue_at_goal, 0.0);
            assert_eq!(outlook.profit_at_goal, 0.0);
        }
    }

    #[test]
    fn a_zero_target_needs_no_cups() {
        let outlook = project(&scenario(10.0, 25.0, 0.0));
        assert!(outlook.is_achievable());
        assert_eq!(outlook.cups_needed, 0);
        assert_eq!(outlook.revenue_at_goal, 0.0);
    }
}
