//! Fixed timestep simulation tick
//!
//! Applies the commands queued for a tick, then advances the world once.

use glam::DVec2;

use super::world::{Direction, SimulationWorld};

/// A discrete command from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Spawn a body at a point with the pending parameters
    SpawnAt(DVec2),
    /// Spawn a body at the arena center with the pending parameters
    SpawnCenter,
    /// Aim the pending launch velocity
    SetDirection(Direction),
    IncreaseMass,
    DecreaseMass,
    ToggleGravity,
    CycleColor,
    ClearAll,
}

/// Input commands for a single tick, applied in order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Apply one command to the world
pub fn apply_command(world: &mut SimulationWorld, command: &Command) {
    match *command {
        Command::SpawnAt(pos) => {
            world.spawn_pending(pos);
        }
        Command::SpawnCenter => {
            world.spawn_center();
        }
        Command::SetDirection(direction) => world.set_pending_direction(direction),
        Command::IncreaseMass => world.increase_pending_mass(),
        Command::DecreaseMass => world.decrease_pending_mass(),
        Command::ToggleGravity => world.toggle_gravity(),
        Command::CycleColor => world.cycle_pending_color(),
        Command::ClearAll => world.clear_all(),
    }
}

/// Advance the world by one fixed tick. Returns the number of colliding pairs.
pub fn tick(world: &mut SimulationWorld, input: &TickInput) -> usize {
    for command in &input.commands {
        apply_command(world, command);
    }
    world.step()
}
