/// Rounds to two decimal places, the precision averages are stored and shown with.
/// Ties go to the even hundredth.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
