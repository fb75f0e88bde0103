/// Percentage of correct answers, rounded to one decimal place.
///
/// `asked == 0` yields 0.0; the runner never finishes a quiz with zero questions.
pub fn percentage(score: u32, asked: u32) -> f64 {
    if asked == 0 {
        return 0.0;
    }
    round1(score as f64 / asked as f64 * 100.0)
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Arithmetic mean, `None` when there is nothing to average.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
