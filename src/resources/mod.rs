//! ECS resources made available to systems.
//!
//! Long-lived data injected into the simulation world and accessed by
//! systems during execution.
//!
//! Overview
//! - `gameconfig` – INI-backed tunables: scale, speed, timing windows
//! - `gamerng` – injectable seedable random source for the ghost AI
//! - `input` – single buffered direction press from the input collaborator
//! - `layout` – serializable maze description and its validation
//! - `portals` – the two screen-wrap teleport zones
//! - `powerwindow` – expiry timestamp of the current vulnerability window
//! - `score` – point accumulator and status display string
//! - `worldtime` – simulation time and delta

pub mod gameconfig;
pub mod gamerng;
pub mod input;
pub mod layout;
pub mod portals;
pub mod powerwindow;
pub mod score;
pub mod worldtime;
