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

//! The directional stereo panning lane.

use vola_core::lane::Lane;
use vola_core::math::{clamp_finite, lerp};

use super::{PanInput, PanLane};

/// Pans with a magnitude below this are written as exactly 0.
pub const PAN_DEAD_ZONE: f32 = 0.001;
/// Below this distance the listener is treated as inside the emitter.
pub const NEAR_FIELD_DISTANCE: f32 = 0.01;
/// Recentering speed: the per-frame interpolation factor is `delta_time * RECENTER_RATE`.
pub const RECENTER_RATE: f32 = 0.6;

/// A lane that pans by projecting the heading to the emitter onto the
/// listener's right vector.
///
/// 1. `heading = normalize(closest_point - listener_position)`
/// 2. `pan = dot(heading, listener_right)`, kept in `[-1, 1]`
/// 3. `|pan| < PAN_DEAD_ZONE` snaps to exactly 0
/// 4. Within [`NEAR_FIELD_DISTANCE`] the heading is meaningless, so the
///    previous pan is eased toward 0 by `delta_time * RECENTER_RATE` instead.
///    This decay depends on the frame rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StereoPanLane;

impl StereoPanLane {
    /// Creates a new `StereoPanLane`.
    pub fn new() -> Self {
        Self
    }

    /// Directional pan from the heading alone, dead zone applied.
    pub fn directional_pan(&self, input: &PanInput) -> f32 {
        let heading = (input.closest_point - input.listener_position).normalize();
        let pan = clamp_finite(heading.dot(input.listener_right), -1.0, 1.0, 0.0);
        if pan.abs() < PAN_DEAD_ZONE {
            0.0
        } else {
            pan
        }
    }

    /// Eases `previous_pan` toward 0 by one frame's worth of recentering.
    pub fn recenter(&self, previous_pan: f32, delta_time: f32) -> f32 {
        let previous_pan = clamp_finite(previous_pan, -1.0, 1.0, 0.0);
        lerp(previous_pan, 0.0, delta_time * RECENTER_RATE)
    }
}

impl Lane for StereoPanLane {
    fn strategy_name(&self) -> &'static str {
        "StereoPan"
    }
}

impl PanLane for StereoPanLane {
    fn pan(&self, input: &PanInput) -> f32 {
        let distance = input.listener_position.distance(input.closest_point);
        if distance < NEAR_FIELD_DISTANCE {
            log::trace!("StereoPanLane: near field ({distance}), recentering pan");
            self.recenter(input.previous_pan, input.delta_time)
        } else {
            self.directional_pan(input)
        }
    }
}
