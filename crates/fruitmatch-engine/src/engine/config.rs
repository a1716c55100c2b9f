use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, FruitKinds, MAX_GRID_SIZE};

use super::animation::FALL_SECS_PER_UNIT;

/// Presentation timings.
///
/// These only decide how long the board stays in each waiting phase; they
/// never change which state the board ends up in. Serialized as whole
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    #[serde(rename = "swap_ms", with = "duration_ms")]
    pub swap: Duration,
    #[serde(rename = "fall_ms", with = "duration_ms")]
    pub fall: Duration,
    #[serde(rename = "post_match_delay_ms", with = "duration_ms")]
    pub post_match_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            swap: Duration::from_millis(200),
            fall: Duration::from_millis(150),
            post_match_delay: Duration::from_millis(100),
        }
    }
}

impl Timings {
    /// No swap animation, fall base time or post-match delay. Falls still take
    /// their distance-based time plus the settle margin.
    pub const INSTANT: Self = Self {
        swap: Duration::ZERO,
        fall: Duration::ZERO,
        post_match_delay: Duration::ZERO,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Requested board edge, clamped into `[6, 8]` when a board is created.
    pub grid_size: usize,
    pub fruit_kinds: u8,
    /// Distance between neighbouring cell centres in world units.
    pub tile_spacing: f32,
    pub timings: Timings,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_size: 7,
            fruit_kinds: 6,
            tile_spacing: 1.0,
            timings: Timings::default(),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        FruitKinds::new(self.fruit_kinds)?;
        // Spawns fall from up to twice the board height.
        #[expect(clippy::cast_precision_loss)]
        let longest_fall = (2 * MAX_GRID_SIZE) as f32 * self.tile_spacing * FALL_SECS_PER_UNIT;
        if !(self.tile_spacing > 0.0 && longest_fall.is_finite()) {
            return Err(ConfigError::InvalidTileSpacing {
                spacing: self.tile_spacing,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub board: BoardConfig,
    #[serde(rename = "game_duration_secs", with = "duration_secs")]
    pub game_duration: Duration,
    pub fps: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            game_duration: Duration::from_secs(60),
            fps: 60,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize as _, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(value.as_millis()).map_err(serde::ser::Error::custom)?;
        serializer.serialize_u64(millis)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize as _, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(value.as_secs())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
