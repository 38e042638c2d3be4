// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `AudioEmitter` settings and the `CurveKind` selector.

use serde::{Deserialize, Deserializer, Serialize};

/// The lower bound of the strength bias.
pub const MIN_STRENGTH: f32 = -1.0;
/// The upper bound of the strength bias.
pub const MAX_STRENGTH: f32 = 1.0;

/// Selects the attenuation formula an emitter uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveKind {
    /// `1 / sqrt(distance) + strength`, unclamped.
    #[default]
    InverseSquare,
    /// `clamp(1 - log2(distance) / (2 + strength), 0, 1)`.
    Logarithmic,
}

/// Per-emitter configuration: which curve, how strong, and whether to pan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioEmitter {
    /// Attenuation curve.
    pub curve: CurveKind,
    /// Whether the emitter writes a stereo pan every frame.
    pub stereo: bool,
    /// Optional ceiling on the volume written to the sink. Mostly useful with
    /// [`CurveKind::InverseSquare`], which is otherwise unbounded near the volume.
    pub max_volume: Option<f32>,
    #[serde(deserialize_with = "deserialize_strength")]
    strength: f32,
}

/// Clamps a raw strength into `[MIN_STRENGTH, MAX_STRENGTH]`, mapping NaN to 0.
fn clamped_strength(strength: f32) -> f32 {
    if strength.is_nan() {
        0.0
    } else {
        strength.clamp(MIN_STRENGTH, MAX_STRENGTH)
    }
}

/// Deserialized strengths are clamped like any other write.
fn deserialize_strength<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f32::deserialize(deserializer)?;
    let clamped = clamped_strength(raw);
    if clamped.to_bits() != raw.to_bits() {
        log::warn!("Emitter strength {raw} is outside [-1, 1], clamped to {clamped}");
    }
    Ok(clamped)
}

impl Default for AudioEmitter {
    fn default() -> Self {
        Self {
            curve: CurveKind::InverseSquare,
            stereo: false,
            max_volume: None,
            strength: 0.0,
        }
    }
}

impl AudioEmitter {
    /// Creates emitter settings with the given curve, zero strength and mono output.
    pub fn new(curve: CurveKind) -> Self {
        Self {
            curve,
            ..Default::default()
        }
    }

    /// Sets the strength bias, builder style. See [`AudioEmitter::set_strength`].
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.set_strength(strength);
        self
    }

    /// Enables or disables stereo panning, builder style.
    pub fn with_stereo(mut self, stereo: bool) -> Self {
        self.stereo = stereo;
        self
    }

    /// Caps the output volume at `ceiling`, builder style.
    pub fn with_max_volume(mut self, ceiling: f32) -> Self {
        self.max_volume = Some(ceiling);
        self
    }

    /// The strength bias, always in `[-1, 1]`.
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Sets the strength bias, clamped to `[-1, 1]`. NaN resets it to 0.
    pub fn set_strength(&mut self, strength: f32) {
        self.strength = strength;
        self.clamp_strength();
    }

    /// Clamps the stored strength into `[-1, 1]`.
    ///
    /// Returns `true` if the value had to change.
    pub fn clamp_strength(&mut self) -> bool {
        let clamped = clamped_strength(self.strength);
        let changed = clamped.to_bits() != self.strength.to_bits();
        self.strength = clamped;
        changed
    }
}
