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

//! Groups the distance attenuation lanes.

mod inverse_square_lane;
mod logarithmic_lane;

pub use inverse_square_lane::*;
pub use logarithmic_lane::*;

use vola_core::lane::Lane;
use vola_data::CurveKind;

/// A trait defining the behavior of a distance attenuation lane.
pub trait AttenuationLane: Lane {
    /// Maps a distance to the closest point of the emitter, and the emitter's
    /// strength bias, to an output volume.
    ///
    /// # Arguments
    /// * `distance`: Distance from the listener to the emitter's closest point, `>= 0`.
    /// * `strength`: Strength bias in `[-1, 1]`.
    fn attenuate(&self, distance: f32, strength: f32) -> f32;
}

static INVERSE_SQUARE: InverseSquareLane = InverseSquareLane;
static LOGARITHMIC: LogarithmicLane = LogarithmicLane;

/// Returns the lane implementing `kind`.
pub fn select_curve(kind: CurveKind) -> &'static dyn AttenuationLane {
    match kind {
        CurveKind::InverseSquare => &INVERSE_SQUARE,
        CurveKind::Logarithmic => &LOGARITHMIC,
    }
}
