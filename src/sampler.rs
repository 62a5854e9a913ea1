//! Monte Carlo sampling kernel.

use std::hint::black_box;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One task's computed π approximation.
pub type Estimate = f64;

/// Unit of work: a fixed iteration budget and the seed of its random stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub iterations: u64,
    pub seed: u64,
}

/// Estimates π by sampling `task.iterations` points in the unit square and
/// counting those inside the quarter circle.
///
/// The stream is a ChaCha8 generator seeded from `task.seed`, so identical
/// tasks produce bit-identical estimates on every platform. Each iteration
/// draws four uniforms: `(x, y)` form the sample point, `(u, v)` feed a
/// synthetic transcendental load that models per-sample compute cost. The
/// load's results go through `black_box` and nowhere else; do not remove it,
/// the benchmark measures it on purpose.
pub fn sample(task: Task) -> Estimate {
    debug_assert!(task.iterations > 0, "task carries no iterations");

    let mut rng = ChaCha8Rng::seed_from_u64(task.seed);
    let mut hits: u64 = 0;

    for _ in 0..task.iterations {
        let x: f64 = rng.gen_range(0.0..1.0);
        let y: f64 = rng.gen_range(0.0..1.0);
        let u: f64 = rng.gen_range(0.0..1.0);
        let v: f64 = rng.gen_range(0.0..1.0);

        // Inputs stay inside every function's domain: ln sees >= 1,
        // sqrt sees >= 0, tan stays well below its first pole.
        let burn = u.sin() * v.cos() + (u * v).tan();
        let cubic = (1.0 + u * u * u).ln() + (v * v * v + x).sqrt();
        black_box(burn);
        black_box(cubic);

        // Two formulations of the same membership test; a point counts
        // only when both agree.
        if x * x + y * y <= 1.0 && x.hypot(y) <= 1.0 {
            hits += 1;
        }
    }

    4.0 * hits as f64 / task.iterations as f64
}
