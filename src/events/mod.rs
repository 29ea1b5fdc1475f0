//! Event types and observers used by the simulation.
//!
//! Events provide a decoupled way for systems to communicate terminal state
//! transitions without tight coupling.
//!
//! Submodules:
//! - [`animation`] – track completion notifications and the dying→dead
//!   player transition
//! - [`capture`] – ghost capture notifications, scoring, and removal
//!
//! See each submodule for concrete event data and semantics.
pub mod animation;
pub mod capture;
