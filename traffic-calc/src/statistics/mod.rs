/// Arithmetic mean of a slice of values.
///
/// An empty slice has a mean of 0.0 so callers never divide by zero.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}
