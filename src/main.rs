//! Elastic Sandbox entry point
//!
//! Native headless driver: runs a scripted session through the fixed-step
//! sandbox and logs the state. A windowed front end feeds the same
//! `Sandbox` with real input events and draws its instances and HUD.
//!
//! Usage: `elastic-sandbox [settings.json]`

use std::path::PathBuf;

use elastic_sandbox::consts::{SIM_DT, TICK_RATE};
use elastic_sandbox::input::{InputEvent, Key};
use elastic_sandbox::{Sandbox, Settings};

/// Frames to simulate (10 seconds)
const SESSION_FRAMES: u64 = 10 * TICK_RATE as u64;

/// Scripted input: (frame, event)
fn demo_script() -> Vec<(u64, InputEvent)> {
    let key = |c| InputEvent::KeyDown(Key::Char(c));
    vec![
        (0, key('g')),
        (0, InputEvent::KeyDown(Key::ArrowRight)),
        (0, InputEvent::PointerDown { x: 100.0, y: 300.0 }),
        (0, InputEvent::KeyDown(Key::ArrowLeft)),
        (0, key('c')),
        (0, key('m')),
        (0, key('m')),
        (0, InputEvent::PointerDown { x: 700.0, y: 300.0 }),
        (120, key('g')),
        (120, InputEvent::KeyDown(Key::ArrowUp)),
        (120, key('c')),
        (120, InputEvent::KeyDown(Key::Space)),
        (240, InputEvent::KeyDown(Key::ArrowDown)),
        (240, key('n')),
        (240, InputEvent::PointerDown { x: 380.0, y: 120.0 }),
        (480, key('e')),
        (480, InputEvent::KeyDown(Key::Space)),
        (SESSION_FRAMES - 1, InputEvent::Quit),
    ]
}

fn run(settings: &Settings) {
    let mut sandbox = Sandbox::new(settings);
    let script = demo_script();

    for frame in 0..SESSION_FRAMES {
        for (_, event) in script.iter().filter(|(at, _)| *at == frame) {
            sandbox.handle_event(event);
        }
        if !sandbox.is_running() {
            break;
        }

        sandbox.update(SIM_DT);

        if frame % TICK_RATE as u64 == 0 {
            let hud = sandbox.hud();
            log::info!(
                "tick {:>4} | bodies {:>2} | {} | {} | {} | {} | KE {:.2}",
                sandbox.world().time_ticks,
                hud.body_count,
                hud.mass,
                hud.direction,
                hud.gravity,
                hud.color,
                sandbox.world().kinetic_energy(),
            );
        }
    }

    for body in sandbox.world().bodies() {
        log::info!(
            "body {} [{}] m={} pos=({:.1}, {:.1}) vel=({:.2}, {:.2})",
            body.id,
            body.color().name(),
            body.mass_label(),
            body.pos.x,
            body.pos.y,
            body.vel.x,
            body.vel.y,
        );
    }
    log::info!(
        "Session ended after {} ticks, {} collisions",
        sandbox.world().time_ticks,
        sandbox.collisions()
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Elastic Sandbox (headless) starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    run(&settings);
}
