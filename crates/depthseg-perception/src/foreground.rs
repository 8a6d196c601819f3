//! Foreground classification.
//!
//! Splits a depth buffer into the two working buffers the rest of the
//! kernel reads:
//!
//! - **clamped** – real depth up to `zkey`, `max_depth - 1` beyond it,
//!   sentinels untouched.  The gap marker compares these values, so a near
//!   object standing in front of distant background still produces a step.
//! - **foreground** – real depth up to `zkey`, `0` beyond it, sentinels
//!   untouched.  Only strictly positive values are foreground candidates.

/// Fill `clamped` and `fore` from `z`.  Both outputs are resized to `z.len()`.
pub fn split_foreground(
    z: &[f32],
    zkey: f64,
    max_depth: f64,
    clamped: &mut Vec<f32>,
    fore: &mut Vec<f32>,
) {
    let far = (max_depth - 1.0) as f32;
    clamped.clear();
    fore.clear();
    clamped.reserve(z.len());
    fore.reserve(z.len());
    for &v in z {
        if f64::from(v) > zkey {
            clamped.push(far);
            fore.push(0.0);
        } else {
            clamped.push(v);
            fore.push(v);
        }
    }
}

/// Zero every positive value whose raw depth in `z` lies beyond `zkey`.
///
/// The far/near decision reads `z`, never `values`, so it does not depend on
/// the clamp applied to background pixels.  Sentinels and gap markers are
/// kept.  Only the common prefix of the two slices is visited.
pub fn clip_beyond(values: &mut [f32], z: &[f32], zkey: f64) {
    for (v, &raw) in values.iter_mut().zip(z) {
        if *v > 0.0 && f64::from(raw) > zkey {
            *v = 0.0;
        }
    }
}

/// True when `v` is a foreground candidate.
pub fn is_foreground(v: f32) -> bool {
    v > 0.0
}
