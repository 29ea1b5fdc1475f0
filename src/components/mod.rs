//! ECS components for maze entities.
//!
//! Components define the data attached to entities in the simulation world:
//! position, collision extent, velocity, buffered intent, animation track,
//! and role markers.
//!
//! Submodules overview:
//! - [`actors`] – role markers: player, dying, ghost, wall, food, pellet
//! - [`animation`] – active animation set/track, doubles as facing state
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap tests
//! - [`direction`] – cardinal headings and buffered direction intent
//! - [`mapposition`] – world-space position in scaled pixel space
//! - [`rigidbody`] – unit-velocity kinematic body

pub mod actors;
pub mod animation;
pub mod boxcollider;
pub mod direction;
pub mod mapposition;
pub mod rigidbody;
