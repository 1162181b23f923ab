//! Descriptive statistics over the multistart cost samples.

/// Mean, sample variance (n−1 divisor) and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleStats {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl SampleStats {
    /// Computes statistics over the samples. Fewer than two samples have
    /// zero variance; an empty slice yields all zeros.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                variance: 0.0,
                std_dev: 0.0,
            };
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = if samples.len() < 2 {
            0.0
        } else {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
        };
        Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }
}
