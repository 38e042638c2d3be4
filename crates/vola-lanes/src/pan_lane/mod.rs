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

//! Groups the stereo panning lanes.

mod stereo_pan_lane;

pub use stereo_pan_lane::*;

use vola_core::lane::Lane;
use vola_core::math::Vec3;

/// Everything a panning lane may read for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanInput {
    /// Listener position.
    pub listener_position: Vec3,
    /// Listener right vector.
    pub listener_right: Vec3,
    /// Closest point of the emitter's volume to the listener.
    pub closest_point: Vec3,
    /// Pan written to the sink on the previous frame.
    pub previous_pan: f32,
    /// Seconds elapsed since the previous frame.
    pub delta_time: f32,
}

/// A trait defining the behavior of a stereo panning lane.
pub trait PanLane: Lane {
    /// Computes the pan for this frame, in `[-1, 1]`.
    fn pan(&self, input: &PanInput) -> f32;
}
