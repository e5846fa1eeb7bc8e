//! Linear velocity of a displacement time series.
//!
//! Ordinary least squares of displacement against the axis date vector
//! (fractional years), so the slope comes out in displacement units per year.
//! The slope standard error follows the usual two-parameter form
//! `sqrt((1 - r^2) * ss_y / ss_x / (n - 2))`.

use crate::types::{DateError, DateResult};

/// Straight-line fit `y = intercept + slope * x`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub r_value: f64,
    /// Standard error of the slope
    pub stderr: f64,
}

/// Fit displacement `y` against fractional years `x`
pub fn linear_velocity(x: &[f64], y: &[f64]) -> DateResult<LinearFit> {
    if x.len() != y.len() {
        return Err(DateError::InvalidInputKind(format!(
            "date vector has {} entries but displacement has {}",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 2 {
        return Err(DateError::InvalidInputKind(
            "linear velocity needs at least two epochs".to_string(),
        ));
    }

    let x_mean = x.iter().sum::<f64>() / n as f64;
    let y_mean = y.iter().sum::<f64>() / n as f64;

    let mut ss_x = 0.0;
    let mut ss_y = 0.0;
    let mut ss_xy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        ss_x += dx * dx;
        ss_y += dy * dy;
        ss_xy += dx * dy;
    }

    if ss_x == 0.0 {
        return Err(DateError::Regression(
            "all epochs share the same date".to_string(),
        ));
    }

    let slope = ss_xy / ss_x;
    let intercept = y_mean - slope * x_mean;
    let r_value = if ss_y == 0.0 {
        0.0
    } else {
        (ss_xy / (ss_x * ss_y).sqrt()).clamp(-1.0, 1.0)
    };

    let stderr = if n == 2 {
        0.0
    } else {
        ((1.0 - r_value * r_value) * ss_y / ss_x / (n - 2) as f64).sqrt()
    };

    log::debug!("Linear velocity: {} +/- {}", slope, stderr);

    Ok(LinearFit {
        slope,
        intercept,
        r_value,
        stderr,
    })
}
