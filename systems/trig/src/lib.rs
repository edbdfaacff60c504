#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Precomputed trigonometry for the Corridor renderer.
//!
//! Heading changes accumulate every frame, so the engine resolves sines and
//! cosines through a fixed table of discretized angles instead of calling
//! into libm per frame. The table is built once at startup and read-only
//! afterwards.

use std::f64::consts::TAU;

/// Sine/cosine pair resolved from the table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinCos {
    /// Sine of the bucketed angle.
    pub sin: f64,
    /// Cosine of the bucketed angle.
    pub cos: f64,
}

/// Fixed-resolution sine and cosine tables indexed by angle bucket.
#[derive(Clone, Debug)]
pub struct AngleTable {
    sin: Vec<f64>,
    cos: Vec<f64>,
}

impl AngleTable {
    /// Builds the tables with `buckets` entries covering one full turn.
    ///
    /// Bucket `i` holds the sine and cosine of `i * 2π / buckets`. Must be
    /// called with at least one bucket; tuning validation guarantees this
    /// upstream.
    #[must_use]
    pub fn new(buckets: u32) -> Self {
        assert!(buckets > 0, "angle table requires at least one bucket");
        let mut sin = Vec::with_capacity(buckets as usize);
        let mut cos = Vec::with_capacity(buckets as usize);
        for bucket in 0..buckets {
            let angle = f64::from(bucket) * TAU / f64::from(buckets);
            sin.push(angle.sin());
            cos.push(angle.cos());
        }
        Self { sin, cos }
    }

    /// Number of buckets covering one full turn.
    #[must_use]
    pub fn buckets(&self) -> u32 {
        self.sin.len() as u32
    }

    /// Resolves the sine/cosine pair for an arbitrary heading in radians.
    ///
    /// The heading accumulates without bound from mouse input, so the index
    /// is wrapped here: `floor(angle · N / 2π) mod N`, with negative results
    /// normalized into `[0, N)`. Total for every finite input.
    #[must_use]
    pub fn lookup(&self, angle: f64) -> SinCos {
        let buckets = self.sin.len() as i64;
        let raw = (angle * self.sin.len() as f64 / TAU).floor() as i64;
        let index = raw.rem_euclid(buckets) as usize;
        SinCos {
            sin: self.sin[index],
            cos: self.cos[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AngleTable;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn bucket_zero_is_exact() {
        let table = AngleTable::new(3600);
        let pair = table.lookup(0.0);
        assert_eq!(pair.sin, 0.0);
        assert_eq!(pair.cos, 1.0);
    }

    #[test]
    fn lookup_is_periodic_over_full_turns() {
        let table = AngleTable::new(3600);
        for k in [-3_i32, -1, 1, 2, 7] {
            let base = table.lookup(1.234);
            let shifted = table.lookup(1.234 + f64::from(k) * TAU);
            assert!((base.sin - shifted.sin).abs() < 1e-9);
            assert!((base.cos - shifted.cos).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_angles_normalize_into_range() {
        let table = AngleTable::new(3600);
        let negative = table.lookup(-1.0);
        let positive = table.lookup(TAU - 1.0);
        assert_eq!(negative, positive);
        assert!((negative.sin - (-1.0_f64).sin()).abs() < 2e-3);
    }

    #[test]
    fn quantization_error_is_bounded_by_bucket_width() {
        let table = AngleTable::new(3600);
        let bucket_width = TAU / 3600.0;
        for i in 0..100 {
            let angle = f64::from(i) * 0.137;
            let pair = table.lookup(angle);
            assert!((pair.sin - angle.sin()).abs() <= bucket_width);
            assert!((pair.cos - angle.cos()).abs() <= bucket_width);
        }
    }

    #[test]
    fn extreme_magnitudes_do_not_escape_the_table() {
        let table = AngleTable::new(3600);
        for angle in [1.0e18, -1.0e18, f64::MAX, f64::MIN] {
            let pair = table.lookup(angle);
            assert!(pair.sin.abs() <= 1.0);
            assert!(pair.cos.abs() <= 1.0);
        }
    }

    #[test]
    fn cardinal_angles_resolve_to_unit_axes() {
        let table = AngleTable::new(3600);
        let east = table.lookup(0.0);
        let south = table.lookup(FRAC_PI_2);
        let west = table.lookup(PI);
        assert!((east.cos - 1.0).abs() < 1e-2 && east.sin.abs() < 1e-2);
        assert!((south.sin - 1.0).abs() < 1e-2 && south.cos.abs() < 1e-2);
        assert!((west.cos + 1.0).abs() < 1e-2 && west.sin.abs() < 1e-2);
    }
}
