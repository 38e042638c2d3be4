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

//! Scene configuration: a listener pose and a set of volumetric emitters,
//! stored as RON.
//!
//! ```ron
//! (
//!     listener: (position: (x: 0.0, y: 0.0, z: 0.0), forward: (x: 0.0, y: 0.0, z: 1.0)),
//!     emitters: [
//!         (
//!             name: "river",
//!             collider: (shape: Box((x: 20.0, y: 1.0, z: 2.0)), center: (x: 0.0, y: 0.0, z: 8.0)),
//!             settings: (curve: Logarithmic, stereo: true, strength: 0.5),
//!         ),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vola_core::math::Vec3;

use crate::components::{AudioEmitter, AudioListener, Collider};

/// An error raised while loading or validating a scene configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid RON for a `SceneConfig`.
    #[error("failed to parse scene: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The scene parsed but describes an unusable setup.
    #[error("invalid scene: {0}")]
    Invalid(String),
}

/// The listener pose as written in a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListenerConfig {
    /// World-space position.
    pub position: Vec3,
    /// Facing direction; need not be normalized.
    pub forward: Vec3,
    /// World up, used to derive the listener's right vector.
    #[serde(default = "default_up")]
    pub up: Vec3,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
            up: Vec3::Y,
        }
    }
}

impl ListenerConfig {
    /// Builds the runtime listener.
    pub fn to_listener(&self) -> AudioListener {
        AudioListener::looking_along(self.position, self.forward, self.up)
    }
}

/// One emitter as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Label used in logs.
    pub name: String,
    /// The emitter's volume.
    pub collider: Collider,
    /// Curve, strength, stereo and ceiling.
    #[serde(default)]
    pub settings: AudioEmitter,
}

/// A full scene: one listener, any number of independent emitters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// The listener pose.
    #[serde(default)]
    pub listener: ListenerConfig,
    /// The emitters, each updated on its own.
    #[serde(default)]
    pub emitters: Vec<EmitterConfig>,
}

impl SceneConfig {
    /// Parses and validates a scene from a RON string.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let scene: SceneConfig = ron::de::from_str(source)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Reads, parses and validates a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        log::info!("Loading scene from {}", path.display());
        Self::from_ron_str(&source)
    }

    /// Serializes the scene back to pretty RON.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty_config = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        ron::ser::to_string_pretty(self, pretty_config)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Rejects unusable geometry and volume ceilings.
    ///
    /// Strength outside `[-1, 1]` is not an error: it was already clamped with
    /// a warning while parsing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let listener = &self.listener;
        if !(listener.position.is_finite() && listener.forward.is_finite() && listener.up.is_finite())
        {
            return Err(ConfigError::Invalid(
                "listener pose contains non-finite values".into(),
            ));
        }
        if listener.up.cross(listener.forward).normalize() == Vec3::ZERO {
            return Err(ConfigError::Invalid(
                "listener forward must be non-zero and not parallel to up".into(),
            ));
        }

        for emitter in &self.emitters {
            if !emitter.collider.is_valid() {
                return Err(ConfigError::Invalid(format!(
                    "emitter '{}' has an invalid collider",
                    emitter.name
                )));
            }
            if let Some(ceiling) = emitter.settings.max_volume {
                if !(ceiling.is_finite() && ceiling >= 0.0) {
                    return Err(ConfigError::Invalid(format!(
                        "emitter '{}' has max_volume {ceiling}, expected a finite value >= 0",
                        emitter.name
                    )));
                }
            }
        }
        Ok(())
    }
}
