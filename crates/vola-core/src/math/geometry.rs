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

//! Provides the axis-aligned box primitive used by box-shaped volumes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Vec3;

/// Represents an Axis-Aligned Bounding Box (AABB).
///
/// An AABB is a rectangular prism aligned with the coordinate axes, defined by its
/// minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// The corner of the box with the smallest coordinates on all axes.
    pub min: Vec3,
    /// The corner of the box with the largest coordinates on all axes.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a new `Aabb` from two corner points.
    ///
    /// `min` receives the component-wise minimum and `max` the component-wise
    /// maximum, regardless of argument order.
    #[inline]
    pub fn from_min_max(min_pt: Vec3, max_pt: Vec3) -> Self {
        Self {
            min: min_pt.min(max_pt),
            max: min_pt.max(max_pt),
        }
    }

    /// Creates a new `Aabb` from a center point and its half-extents.
    ///
    /// The provided `half_extents` will be made non-negative.
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let safe_half_extents = half_extents.abs();
        Self {
            min: center - safe_half_extents,
            max: center + safe_half_extents,
        }
    }

    /// Returns the point of the box closest to `point`.
    ///
    /// The box is treated as solid: a point inside it is its own closest point.
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_min_max_orders_corners() {
        let aabb = Aabb::from_min_max(Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_from_center_half_extents() {
        let aabb = Aabb::from_center_half_extents(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, 2.0, 0.5));
        assert_eq!(aabb.min, Vec3::new(0.0, -1.0, 0.5));
        assert_eq!(aabb.max, Vec3::new(2.0, 3.0, 1.5));
    }

    #[test]
    fn test_aabb_closest_point() {
        let aabb = Aabb::from_min_max(-Vec3::ONE, Vec3::ONE);
        // Outside on one axis: projects onto the face.
        assert_eq!(
            aabb.closest_point(Vec3::new(5.0, 0.25, 0.0)),
            Vec3::new(1.0, 0.25, 0.0)
        );
        // Outside on all axes: snaps to the corner.
        assert_eq!(aabb.closest_point(Vec3::new(-4.0, 9.0, 3.0)), Vec3::new(-1.0, 1.0, 1.0));
        // Inside: the point itself.
        let inside = Vec3::new(0.1, -0.2, 0.3);
        assert_eq!(aabb.closest_point(inside), inside);
    }
}
