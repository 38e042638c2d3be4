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

//! Defines the `AudioListener` for volumetric spatial audio.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use vola_core::math::Vec3;

/// A shared, externally owned listener.
///
/// The owner (player, camera) moves it; emitters only ever take a read lock.
pub type ListenerHandle = Arc<RwLock<AudioListener>>;

/// The point of audition in the scene.
///
/// `right` is used for stereo panning. `forward` is carried so that the
/// orientation can be rebuilt and inspected, but panning does not read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioListener {
    /// World-space position.
    pub position: Vec3,
    /// Unit vector the listener faces.
    pub forward: Vec3,
    /// Unit vector to the listener's right.
    pub right: Vec3,
}

impl Default for AudioListener {
    /// A listener at the origin facing +Z with +X to its right.
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
            right: Vec3::X,
        }
    }
}

impl AudioListener {
    /// Creates a listener from an explicit position and basis.
    pub fn new(position: Vec3, forward: Vec3, right: Vec3) -> Self {
        Self {
            position,
            forward,
            right,
        }
    }

    /// Creates a listener at `position` facing `forward`, deriving `right`
    /// from the world `up` vector (Y-up, +Z forward gives +X right).
    pub fn looking_along(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        let forward = forward.normalize();
        Self {
            position,
            forward,
            right: up.cross(forward).normalize(),
        }
    }

    /// Wraps the listener into a shareable handle.
    pub fn into_handle(self) -> ListenerHandle {
        Arc::new(RwLock::new(self))
    }
}
