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

//! Defines the abstract `AudioSink` trait.

/// The outbound contract for whatever plays an emitter's sound.
///
/// Emitters write two independent scalars per frame. The sink may be a mixer
/// voice, a platform audio source, or a plain value holder in tests.
pub trait AudioSink {
    /// Sets the output volume. The value is not guaranteed to be in `[0, 1]`:
    /// logarithmic attenuation is, inverse-square attenuation is not.
    fn set_volume(&mut self, volume: f32);

    /// Returns the volume last written.
    fn volume(&self) -> f32;

    /// Sets the stereo pan, in `[-1, 1]` (-1 full left, +1 full right).
    fn set_pan(&mut self, pan: f32);

    /// Returns the pan last written.
    fn pan(&self) -> f32;
}
