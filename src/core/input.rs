use crate::quantity::time::TimeUnits;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("invalid input `{0}`: the time budget must be a whole number")]
    InvalidInput(String),
}

/// Parse a user-provided time budget.
///
/// Any finite whole number is accepted, including zero and negative values, in either integer
/// (`12`) or decimal (`12.0`, `1e1`) notation. Fractions, infinities, `NaN` and anything
/// non-numeric are rejected.
pub fn parse_time_budget(input: &str) -> Result<TimeUnits, InputError> {
    let input = input.trim();
    if let Ok(time_budget) = input.parse::<i64>() {
        return Ok(TimeUnits(time_budget));
    }
    input
        .parse::<f64>()
        .ok()
        .and_then(whole_number)
        .map(TimeUnits)
        .ok_or_else(|| InputError::InvalidInput(input.to_string()))
}

#[expect(clippy::cast_possible_truncation)]
#[expect(clippy::cast_precision_loss)]
fn whole_number(value: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2⁶³, which is already out of range:
    (value.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&value))
        .then_some(value as i64)
}
