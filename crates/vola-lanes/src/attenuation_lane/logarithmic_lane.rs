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

//! The logarithmic attenuation curve.

use vola_core::lane::Lane;
use vola_core::math::clamp_finite;

use super::AttenuationLane;

/// A lane with a soft, clamped falloff: `clamp(1 - log2(distance) / (2 + strength), 0, 1)`.
///
/// Volume is 1 up to distance 1, reaches 0 at distance `2^(2 + strength)`, and
/// stays in `[0, 1]` for every input. At distance 0, `log2` yields `-inf` and
/// the result clamps to 1. A NaN intermediate maps to silence.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogarithmicLane;

impl LogarithmicLane {
    /// Creates a new `LogarithmicLane`.
    pub fn new() -> Self {
        Self
    }
}

impl Lane for LogarithmicLane {
    fn strategy_name(&self) -> &'static str {
        "Logarithmic"
    }
}

impl AttenuationLane for LogarithmicLane {
    fn attenuate(&self, distance: f32, strength: f32) -> f32 {
        let log_distance = distance.log2();
        let divider = 2.0 + strength;
        clamp_finite(1.0 - log_distance / divider, 0.0, 1.0, 0.0)
    }
}
