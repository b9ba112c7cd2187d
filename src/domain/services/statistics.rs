//! Numeric helpers behind the region summaries.
//!
//! Summation and percentile interpolation follow the conventions of the
//! reference analytics stack (pairwise summation, linear interpolation
//! between closest ranks) so that reported figures agree with it exactly on
//! the same inputs.

const PAIRWISE_BLOCK: usize = 128;

/// Pairwise sum with eight-way unrolled leaves.
pub fn pairwise_sum(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 8 {
        values.iter().fold(0.0, |acc, v| acc + v)
    } else if n <= PAIRWISE_BLOCK {
        let mut r = [0.0f64; 8];
        r.copy_from_slice(&values[..8]);
        let unrolled = n - n % 8;
        for chunk in values[8..unrolled].chunks_exact(8) {
            for (acc, v) in r.iter_mut().zip(chunk) {
                *acc += v;
            }
        }
        let mut res = ((r[0] + r[1]) + (r[2] + r[3])) + ((r[4] + r[5]) + (r[6] + r[7]));
        for v in &values[unrolled..] {
            res += v;
        }
        res
    } else {
        let mut half = n / 2;
        half -= half % 8;
        pairwise_sum(&values[..half]) + pairwise_sum(&values[half..])
    }
}

/// Arithmetic mean, `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(pairwise_sum(values) / values.len() as f64)
}

/// Percentile `pct` (0..=100) of `values` using linear interpolation between
/// the two closest ranks: rank = `pct/100 * (n - 1)`.
///
/// Returns `None` for an empty sample or a `pct` outside `0..=100`.
pub fn percentile_linear(values: &[f64], pct: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=100.0).contains(&pct) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (sorted.len() - 1) as f64 * (pct / 100.0);
    let lower = rank.floor();
    let lower_idx = lower as usize;
    let upper_idx = (lower_idx + 1).min(sorted.len() - 1);
    Some(lerp(sorted[lower_idx], sorted[upper_idx], rank - lower))
}

// Interpolates from whichever end is nearer to keep the rounding error small.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}
