//! Fixed-timestep driver
//!
//! Bridges a variable-rate frame loop to the fixed 60 Hz simulation: frame
//! deltas accumulate and each whole `SIM_DT` runs one tick. Input events are
//! queued as commands and consumed by the next tick.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::hud::Hud;
use crate::input::{InputEvent, map_event};
use crate::render::{BodyInstance, build_instances};
use crate::settings::Settings;
use crate::sim::{SimulationWorld, TickInput, tick};

/// Sandbox session holding all state
pub struct Sandbox {
    world: SimulationWorld,
    input: TickInput,
    accumulator: f64,
    running: bool,
    /// Colliding pairs resolved since startup
    collisions: u64,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Sandbox {
    pub fn new(settings: &Settings) -> Self {
        Self {
            world: SimulationWorld::new(settings),
            input: TickInput::default(),
            accumulator: 0.0,
            running: true,
            collisions: 0,
        }
    }

    pub fn world(&self) -> &SimulationWorld {
        &self.world
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Queue an input event for the next tick
    pub fn handle_event(&mut self, event: &InputEvent) {
        if matches!(event, InputEvent::Quit) {
            log::info!("Quit requested");
            self.running = false;
            return;
        }
        if let Some(command) = map_event(event) {
            self.input.push(command);
        }
    }

    /// Feed a frame delta (seconds). Returns the number of ticks run.
    pub fn update(&mut self, dt: f64) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.collisions += tick(&mut self.world, &self.input) as u64;
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Commands are one-shot
            self.input.clear();
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        substeps
    }

    pub fn hud(&self) -> Hud {
        Hud::from_world(&self.world)
    }

    pub fn instances(&self) -> Vec<BodyInstance> {
        build_instances(&self.world)
    }
}
