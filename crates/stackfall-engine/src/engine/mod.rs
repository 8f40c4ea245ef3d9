//! Game flow: piece generation and the controller state machine.

pub use self::{controller::*, spawner::*};

mod controller;
mod spawner;
