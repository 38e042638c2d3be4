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

//! # Vola Lanes
//!
//! The per-frame algorithms: attenuation curves that turn a distance into a
//! volume, and the panning rule that turns a heading into a stereo balance.

#![warn(missing_docs)]

pub mod attenuation_lane;
pub mod pan_lane;

pub use attenuation_lane::*;
pub use pan_lane::*;
