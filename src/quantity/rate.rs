use crate::quantity::{earnings::Earnings, time::TimeUnits};

quantity!(
    /// Earnings per each time unit that remains after a project is finished.
    EarningsRate,
    suffix: "$/t"
);

implement_mul!(EarningsRate, TimeUnits, Earnings);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_mul() {
        assert_eq!(EarningsRate(1500).checked_mul(TimeUnits(3)), Some(Earnings(4500)));
        assert_eq!(EarningsRate(i64::MAX / 2).checked_mul(TimeUnits(3)), None);
    }
}
