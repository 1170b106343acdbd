//! Steps a point around the Z axis and checks that a full turn brings it back.
//!
//! Usage: `orbit [steps]` (default: 12)

use std::f32::consts::TAU;

use anyhow::{bail, Context};
use varia::{vec3, Axis, Mat3f};

fn main() -> anyhow::Result<()> {
    varia::init_logger!();

    let steps = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid step count '{arg}'"))?,
        None => 12,
    };
    if steps == 0 {
        bail!("step count must be at least 1");
    }

    let step = Mat3f::rotation(Axis::Z, TAU / steps as f32);
    let start = vec3(2.0, 0.0, 0.5);

    let mut pos = start;
    for i in 1..=steps {
        pos = step * pos;
        log::info!("step {i:>3}: {pos:.3} (angle to start: {:.3})", pos.angle_between(start));
    }

    let full_turn: Mat3f = std::iter::repeat(step).take(steps as usize).product();
    let drift = (full_turn * start - start).length();
    log::info!("drift after full turn: {drift:e}");
    if drift > 1e-4 {
        bail!("rotation accumulated too much error ({drift})");
    }

    Ok(())
}
