use ordered_float::OrderedFloat;

use crate::{
    engine::LineResult,
    interpreter::value::core::Value,
    util::num::{format_number, usize_to_f64},
};

/// The P10/P50/P90 summary of a sample array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentiles {
    /// Value below which 10% of the draws fall.
    pub p10: f64,
    /// The median.
    pub p50: f64,
    /// Value below which 90% of the draws fall.
    pub p90: f64,
}

impl Percentiles {
    /// Summarises `samples`, or returns `None` for an empty slice.
    ///
    /// The draws are sorted and every percentile interpolated linearly
    /// between the two nearest order statistics, so the result does not
    /// depend on the input order and always satisfies
    /// `p10 <= p50 <= p90`.
    ///
    /// # Example
    /// ```
    /// use fermi::report::Percentiles;
    ///
    /// let draws: Vec<f64> = (0..=100).rev().map(f64::from).collect();
    /// let p = Percentiles::of(&draws).unwrap();
    /// assert_eq!((p.p10, p.p50, p.p90), (10.0, 50.0, 90.0));
    /// ```
    #[must_use]
    pub fn of(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable_by_key(|v| OrderedFloat(*v));

        Some(Self { p10: percentile(&sorted, 0.10),
                    p50: percentile(&sorted, 0.50),
                    p90: percentile(&sorted, 0.90), })
    }
}

/// Linear-interpolation percentile of an ascending, non-empty slice.
///
/// `fraction` is in `[0, 1]`; the rank `fraction * (n - 1)` is interpolated
/// between its neighbouring order statistics.
#[must_use]
pub fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    let rank = fraction * usize_to_f64(sorted.len() - 1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let weight = rank - usize_to_f64(lower);

    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Renders a value for display.
///
/// Scalars are formatted with [`format_number`]; sample arrays as
/// `"{p10} {p50} {p90} (P10, P50, P90)"`.
///
/// # Example
/// ```
/// use fermi::{Value, report::format_result};
///
/// assert_eq!(format_result(&Value::Scalar(2_700_000.0)), "2.70M");
///
/// let draws: Vec<f64> = (0..=100).map(|v| f64::from(v) * 1_000.0).collect();
/// assert_eq!(format_result(&Value::from(draws)),
///            "10.00K 50.00K 90.00K (P10, P50, P90)");
/// ```
#[must_use]
pub fn format_result(value: &Value) -> String {
    match value {
        Value::Scalar(v) => format_number(*v),
        Value::Samples(samples) => match Percentiles::of(samples) {
            Some(p) => format!("{} {} {} (P10, P50, P90)",
                               format_number(p.p10),
                               format_number(p.p50),
                               format_number(p.p90)),
            None => "(no samples)".to_string(),
        },
    }
}

/// Renders a model next to its results.
///
/// Each source line is echoed, followed for assignments and expressions by
/// `=> <value>` and for failures by `=> ERROR: <message>`. Comments and
/// blank lines get no result line.
///
/// # Example
/// ```
/// use fermi::{execute_model, report::render_model};
///
/// let source = "# households\npopulation = 2.7M\nhouseholds = population / 2.5";
/// let results = execute_model(source);
/// assert_eq!(render_model(source, &results),
///            "# households\npopulation = 2.7M\n=> 2.70M\nhouseholds = population / 2.5\n=> 1.08M");
/// ```
#[must_use]
pub fn render_model(source: &str, results: &[LineResult]) -> String {
    let mut out = Vec::with_capacity(results.len() * 2);

    for (line, result) in source.lines().zip(results) {
        out.push(line.to_string());
        match result {
            LineResult::Assignment { value, .. } | LineResult::Expression { value, .. } => {
                out.push(format!("=> {}", format_result(value)));
            },
            LineResult::Error { message, .. } => out.push(format!("=> ERROR: {message}")),
            LineResult::Comment { .. } | LineResult::Empty => {},
        }
    }

    out.join("\n")
}
