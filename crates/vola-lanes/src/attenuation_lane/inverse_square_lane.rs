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

//! The inverse-square attenuation curve.

use vola_core::lane::Lane;

use super::AttenuationLane;

/// A lane approximating inverse-square falloff as `1 / sqrt(distance) + strength`.
///
/// The square root of the distance is used rather than its square, and the
/// strength is added rather than multiplied. The result is not clamped: it
/// exceeds 1 close to the volume and is `+inf` at distance 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct InverseSquareLane;

impl InverseSquareLane {
    /// Creates a new `InverseSquareLane`.
    pub fn new() -> Self {
        Self
    }
}

impl Lane for InverseSquareLane {
    fn strategy_name(&self) -> &'static str {
        "InverseSquare"
    }
}

impl AttenuationLane for InverseSquareLane {
    fn attenuate(&self, distance: f32, strength: f32) -> f32 {
        1.0 / distance.sqrt() + strength
    }
}
