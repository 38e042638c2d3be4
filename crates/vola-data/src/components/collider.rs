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

use serde::{Deserialize, Serialize};
use vola_core::math::Vec3;
use vola_core::physics::{ClosestPointQuery, ColliderShape};

/// A collision volume placed in the world, used as the extent of an emitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Shape of the collider.
    pub shape: ColliderShape,
    /// World-space center of the shape.
    #[serde(default = "default_center")]
    pub center: Vec3,
}

fn default_center() -> Vec3 {
    Vec3::ZERO
}

impl Default for Collider {
    fn default() -> Self {
        Self {
            shape: ColliderShape::Sphere(0.5),
            center: Vec3::ZERO,
        }
    }
}

impl Collider {
    /// Creates a new box collider.
    pub fn new_box(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            shape: ColliderShape::Box(half_extents),
            center,
        }
    }

    /// Creates a new sphere collider.
    pub fn new_sphere(center: Vec3, radius: f32) -> Self {
        Self {
            shape: ColliderShape::Sphere(radius),
            center,
        }
    }

    /// Creates a new Y-aligned capsule collider.
    pub fn new_capsule(center: Vec3, half_height: f32, radius: f32) -> Self {
        Self {
            shape: ColliderShape::Capsule(half_height, radius),
            center,
        }
    }

    /// Returns `true` if the center is finite and the shape dimensions are valid.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite() && self.shape.is_valid()
    }
}

impl ClosestPointQuery for Collider {
    fn closest_point(&self, point: Vec3) -> Vec3 {
        self.shape.closest_point(self.center, point)
    }
}
