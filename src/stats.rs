//! Descriptive statistics over objective values.

/// Summary statistics of a set of objective values.
///
/// The standard deviation is the population form (divides by `n`).
///
/// # Examples
///
/// ```
/// use u_tabu::stats::Summary;
///
/// let s = Summary::from_values(&[3.0, 1.0, 2.0, 10.0]).unwrap();
/// assert_eq!(s.count, 4);
/// assert!((s.mean - 4.0).abs() < 1e-12);
/// assert!((s.median - 2.5).abs() < 1e-12);
/// assert_eq!(s.max, 10.0);
/// assert_eq!(s.min, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of values summarised.
    pub count: usize,
    pub mean: f64,
    /// Middle value; the average of the two middle values for even counts.
    pub median: f64,
    pub max: f64,
    pub min: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Computes the summary, or `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count: values.len(),
            mean,
            median,
            max: sorted[sorted.len() - 1],
            min: sorted[0],
            std_dev: variance.sqrt(),
        })
    }
}
