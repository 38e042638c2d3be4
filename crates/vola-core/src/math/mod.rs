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

//! Provides the small set of math primitives the audio system needs.
//!
//! The types here are deliberately minimal: a 3D vector, an axis-aligned box,
//! and a handful of scalar helpers for clamping and interpolation. Nothing in
//! this module depends on a host engine.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

// --- Declare Sub-Modules ---

pub mod geometry;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::geometry::Aabb;
pub use self::vector::Vec3;

// --- Utility Functions ---

/// Clamps a value to a specified minimum and maximum range.
///
/// NaN is returned unchanged; callers that must never forward NaN should
/// use [`clamp_finite`] instead.
///
/// # Examples
///
/// ```
/// use vola_core::math::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Clamps `value` to `[min_val, max_val]`, mapping NaN to `nan_fallback`.
///
/// Infinities clamp to the nearest bound.
///
/// # Examples
///
/// ```
/// use vola_core::math::clamp_finite;
/// assert_eq!(clamp_finite(f32::INFINITY, 0.0, 1.0, 0.0), 1.0);
/// assert_eq!(clamp_finite(f32::NEG_INFINITY, 0.0, 1.0, 0.0), 0.0);
/// assert_eq!(clamp_finite(f32::NAN, 0.0, 1.0, 0.0), 0.0);
/// ```
#[inline]
pub fn clamp_finite(value: f32, min_val: f32, max_val: f32, nan_fallback: f32) -> f32 {
    if value.is_nan() {
        nan_fallback
    } else {
        clamp(value, min_val, max_val)
    }
}

/// Clamps a floating-point value to the `[0.0, 1.0]` range.
///
/// # Examples
///
/// ```
/// use vola_core::math::saturate;
/// assert_eq!(saturate(1.5), 1.0);
/// assert_eq!(saturate(-0.5), 0.0);
/// ```
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Linearly interpolates between `start` and `end`.
/// The interpolation factor `t` is clamped to the `[0.0, 1.0]` range.
///
/// # Examples
///
/// ```
/// use vola_core::math::lerp;
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
/// ```
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * saturate(t)
}
