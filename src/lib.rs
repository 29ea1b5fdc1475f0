//! Mazechase simulation core.
//!
//! A tick-driven maze-chase arcade simulation: actor movement against wall
//! geometry, collectible consumption, power-up windows, ghost capture, and
//! player death. Rendering, asset decoding, and raw input capture are
//! external collaborators; this crate owns the per-tick update rules only.
//!
//! The crate exposes the ECS building blocks for use by a host program and
//! by integration tests:
//! - [`components`] – positions, colliders, velocities, intents, markers
//! - [`events`] – capture and animation-completion events with observers
//! - [`game`] – world construction, the tick schedule, and the tick driver
//! - [`resources`] – layout, config, score, clock, RNG, portals, input
//! - [`systems`] – the per-tick passes the schedule chains together

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
