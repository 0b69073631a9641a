//! Display offset for finished indicator series.
//!
//! Shifting reads only from the input slice and writes into a fresh vector,
//! so fill values are always taken from the unshifted series.

/// Shift `values` by `offset` samples, keeping the length.
///
/// - `offset > 0` moves values right. The first `offset` slots are filled with
///   the first defined value of the input (or `values[0]` when nothing is
///   defined).
/// - `offset < 0` moves values left. The last `|offset|` slots repeat
///   `values[len - |offset| - 1]`. Shifting the whole series out leaves only
///   `NaN`.
pub fn apply_offset(values: &[f64], offset: i64) -> Vec<f64> {
    let len = values.len();
    if offset == 0 || len == 0 {
        return values.to_vec();
    }

    let shift = usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX);

    if offset > 0 {
        let fill = values
            .iter()
            .copied()
            .find(|v| !v.is_nan())
            .unwrap_or(values[0]);

        (0..len)
            .map(|i| if i < shift { fill } else { values[i - shift] })
            .collect()
    } else {
        if shift >= len {
            return vec![f64::NAN; len];
        }

        let last_source = len - shift;
        let fill = values[last_source - 1];

        (0..len)
            .map(|i| if i < last_source { values[i + shift] } else { fill })
            .collect()
    }
}
