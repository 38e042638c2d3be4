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

//! # Physics Abstractions
//!
//! The closest-point query contract that volumetric emitters depend on, and
//! the primitive shapes shipped with it.
//!
//! Any geometry backend can stand in for the built-in shapes by implementing
//! [`ClosestPointQuery`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::{Aabb, Vec3};

mod closest_point;

pub use closest_point::*;

/// A volume that can report the point of its surface (or interior) nearest to
/// a query position.
///
/// Implementations treat the volume as solid: a query position inside the
/// volume is returned unchanged, so the distance to it is zero.
pub trait ClosestPointQuery {
    /// Returns the point of the volume closest to `point`, in world space.
    fn closest_point(&self, point: Vec3) -> Vec3;
}

/// Supported collider shapes, expressed in the collider's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColliderShape {
    /// Axis-aligned box with half-extents.
    Box(Vec3),
    /// Sphere with radius.
    Sphere(f32),
    /// Capsule along the Y axis with half-height and radius.
    Capsule(f32, f32),
}

impl ColliderShape {
    /// Returns the point of this shape, centered at `center`, closest to `point`.
    pub fn closest_point(&self, center: Vec3, point: Vec3) -> Vec3 {
        match *self {
            ColliderShape::Box(half_extents) => {
                closest_point_on_box(center, half_extents, point)
            }
            ColliderShape::Sphere(radius) => closest_point_on_sphere(center, radius, point),
            ColliderShape::Capsule(half_height, radius) => {
                closest_point_on_capsule(center, half_height, radius, point)
            }
        }
    }

    /// Returns `true` if every dimension of the shape is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        let ok = |v: f32| v.is_finite() && v >= 0.0;
        match *self {
            ColliderShape::Box(h) => ok(h.x) && ok(h.y) && ok(h.z),
            ColliderShape::Sphere(r) => ok(r),
            ColliderShape::Capsule(h, r) => ok(h) && ok(r),
        }
    }
}

impl ClosestPointQuery for Aabb {
    fn closest_point(&self, point: Vec3) -> Vec3 {
        Aabb::closest_point(self, point)
    }
}

impl<T: ClosestPointQuery + ?Sized> ClosestPointQuery for Box<T> {
    fn closest_point(&self, point: Vec3) -> Vec3 {
        (**self).closest_point(point)
    }
}
