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

use crate::math::{Aabb, Vec3};

/// Closest point on a solid axis-aligned box.
pub fn closest_point_on_box(center: Vec3, half_extents: Vec3, point: Vec3) -> Vec3 {
    Aabb::from_center_half_extents(center, half_extents).closest_point(point)
}

/// Closest point on a solid sphere.
pub fn closest_point_on_sphere(center: Vec3, radius: f32, point: Vec3) -> Vec3 {
    push_to_radius(center, radius.abs(), point)
}

/// Closest point on a solid capsule whose core segment runs along Y.
pub fn closest_point_on_capsule(center: Vec3, half_height: f32, radius: f32, point: Vec3) -> Vec3 {
    let half_height = half_height.abs();
    let along = (point.y - center.y).clamp(-half_height, half_height);
    let segment_point = Vec3::new(center.x, center.y + along, center.z);
    push_to_radius(segment_point, radius.abs(), point)
}

// Points within `radius` of `core` are inside; the rest project onto the shell.
fn push_to_radius(core: Vec3, radius: f32, point: Vec3) -> Vec3 {
    let delta = point - core;
    let dist_sq = delta.length_squared();
    if dist_sq <= radius * radius {
        point
    } else {
        core + delta * (radius / dist_sq.sqrt())
    }
}
