//! Animation playback advance.
//!
//! The core only accumulates elapsed time; frame decoding lives in the
//! renderer. Completion of a non-looping track (the death sequence) fires
//! [`AnimationFinishedEvent`] exactly once.
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::events::animation::AnimationFinishedEvent;
use crate::resources::worldtime::WorldTime;

/// Advance every animation track and emit completion events.
pub fn animation(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Animation)>,
    time: Res<WorldTime>,
) {
    for (entity, mut anim) in query.iter_mut() {
        anim.elapsed += time.delta;
        if !anim.looping && !anim.finished && anim.elapsed >= anim.duration {
            anim.finished = true;
            commands.trigger(AnimationFinishedEvent {
                entity,
                key: anim.key.clone(),
            });
        }
    }
}
