//! Marker and role components for the maze population.
//!
//! Static geometry ([`Wall`]) and collectibles ([`Food`], [`PowerPellet`])
//! are rect entities tagged with a marker. The two actor roles carry their
//! role-specific state: [`Ghost`] tracks vulnerability and the animation-set
//! snapshot taken when a power window opens; [`Dying`] marks the player
//! between fatal contact and the end of the death track.
use bevy_ecs::prelude::Component;

/// The single player actor. Exactly one entity carries this marker while
/// the player is in play; it is despawned when the death track completes.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// The player is mid death-sequence: velocity is zeroed, input is ignored,
/// and despawn follows the death track's completion event.
#[derive(Component, Debug, Clone, Copy)]
pub struct Dying;

/// An enemy actor.
#[derive(Component, Debug, Clone, Default)]
pub struct Ghost {
    /// While true, player contact captures this ghost instead of killing
    /// the player.
    pub vulnerable: bool,
    /// Animation set to restore when the power window closes. Snapshotted
    /// on the first pellet of a window; a pellet eaten while already
    /// vulnerable keeps the earlier snapshot.
    pub original_set: Option<String>,
}

/// Immutable wall rectangle. The wall set is static for the session.
#[derive(Component, Debug, Clone, Copy)]
pub struct Wall;

/// Regular collectible worth 100 points, consumed at most once.
#[derive(Component, Debug, Clone, Copy)]
pub struct Food;

/// Power pellet: opens a vulnerability window on consumption.
#[derive(Component, Debug, Clone, Copy)]
pub struct PowerPellet;
