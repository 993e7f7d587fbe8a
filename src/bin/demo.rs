//! Random coefficient batches through the vectorized solver, printed
//! side by side with the scalar reference.
//!
//! Run with `RUST_LOG=trace` to see which vector path each batch takes.

use anyhow::Result;
use lanemask::reference::solve_scalar;
use lanemask::{solve, F32x4, LaneCounts, SimdFloat};
use log::info;
use rand::Rng;

const LANES: usize = 4;

fn random_batch(rng: &mut impl Rng, lo: f32, hi: f32) -> F32x4 {
    let mut lanes = [0.0f32; LANES];
    for v in &mut lanes {
        *v = rng.gen_range(lo..hi);
    }
    F32x4::from_slice(&lanes)
}

fn describe(count: u32, r1: f32, r2: f32) -> String {
    match count {
        0 => "no roots".to_string(),
        1 => format!("1 root: {r1}"),
        2 => format!("2 roots: {r1}, {r2}"),
        _ => unreachable!("root count out of range"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = rand::thread_rng();

    info!("solving one random batch of {LANES} equations");
    let a = random_batch(&mut rng, 0.8, 1.2);
    let b = random_batch(&mut rng, -0.25, 0.25);
    let c = random_batch(&mut rng, -4.0, 1.0);
    let solution = solve(a, b, c);

    let (mut av, mut bv, mut cv) = ([0.0; LANES], [0.0; LANES], [0.0; LANES]);
    a.store(&mut av);
    b.store(&mut bv);
    c.store(&mut cv);
    let (mut r1, mut r2) = ([0.0; LANES], [0.0; LANES]);
    solution.r1.store(&mut r1);
    solution.r2.store(&mut r2);

    for lane in 0..LANES {
        let count = solution.roots.lane(lane);
        println!(
            "{}, {}, {} -> {}",
            av[lane],
            bv[lane],
            cv[lane],
            describe(count, r1[lane], r2[lane])
        );
        let (scalar_count, s1, s2) = solve_scalar(av[lane], bv[lane], cv[lane]);
        println!("\tscalar solver -> {}", describe(scalar_count, s1, s2));
    }
    Ok(())
}
