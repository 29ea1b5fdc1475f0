//! Simulation systems.
//!
//! This module groups the ECS systems that advance the maze simulation.
//! The tick schedule in [`crate::game`] chains them in a fixed order;
//! several passes depend on state changes made by earlier ones within the
//! same tick.
//!
//! Submodules overview
//! - [`animation`] – advance animation tracks, emit completion events
//! - [`collectibles`] – food/pellet consumption and the power window
//! - [`ghosts`] – ghost wall stop, random redirection, player contact
//! - [`input`] – forward the buffered press to the player's intent
//! - [`movement`] – integrate positions from unit velocities
//! - [`player`] – stop the player against imminent walls
//! - [`steering`] – speculative turn probes (the movement resolver)
//! - [`teleport`] – portal-zone screen wrapping
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod collectibles;
pub mod ghosts;
pub mod input;
pub mod movement;
pub mod player;
pub mod steering;
pub mod teleport;
pub mod time;
