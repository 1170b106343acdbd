//! Bounces a particle around the inside of a box, reflecting its velocity off the walls.
//!
//! Usage: `bounce [vx] [vy]` (default: 0.7 0.3)

use anyhow::Context;
use varia::{scalar, vec2, Vec2f};

const SIZE: f32 = 10.0;

fn main() -> anyhow::Result<()> {
    varia::init_logger!();

    let mut args = std::env::args().skip(1);
    let mut component = |default: f32| -> anyhow::Result<f32> {
        match args.next() {
            Some(arg) => arg
                .parse()
                .with_context(|| format!("invalid velocity component '{arg}'")),
            None => Ok(default),
        }
    };
    let vx = component(0.7)?;
    let vy = component(0.3)?;

    let Some(mut velocity) = vec2(vx, vy).try_normalize() else {
        anyhow::bail!("velocity must be non-zero and finite");
    };
    let walls = [Vec2f::X, -Vec2f::X, Vec2f::Y, -Vec2f::Y];
    let mut pos = Vec2f::splat(SIZE / 2.0);

    for tick in 0..100 {
        pos += velocity;
        for normal in walls {
            // Inward-facing normals; a wall is hit when the particle is behind it.
            let offset = if normal.x + normal.y > 0.0 { 0.0 } else { SIZE };
            let dist = pos.dot(normal) + offset;
            if dist < 0.0 && velocity.dot(normal) < 0.0 {
                velocity = velocity.reflect(normal);
                log::debug!("tick {tick}: bounced off wall {normal:?}, velocity now {velocity:.2}");
            }
        }
        pos = pos.clamp(Vec2f::ZERO, Vec2f::splat(SIZE));
    }

    log::info!(
        "final position {pos:.2}, speed {:.3}, heading {:.1}°",
        velocity.length(),
        scalar::clamp(Vec2f::X.signed_angle_to(velocity).to_degrees(), -180.0, 180.0),
    );
    Ok(())
}
