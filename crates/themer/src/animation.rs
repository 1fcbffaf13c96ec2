//! Transition settings for animated theme switches

use serde::{Deserialize, Serialize};
use std::time::Duration;
use themer_core::Easing;

/// How the host should animate the visual commit of a theme switch.
///
/// The engine only stores and forwards these; timing is the host's job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    #[serde(with = "millis")]
    pub duration: Duration,
    #[serde(default, with = "millis")]
    pub delay: Duration,
    #[serde(default)]
    pub easing: Easing,
}

impl AnimationSettings {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Delay plus duration
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Eased progress `elapsed` into the transition, in `0.0..=1.0`
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(elapsed) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(t)
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
