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

//! Defines the `StereoSink`, a plain two-field audio output.

use serde::{Deserialize, Serialize};
use vola_core::audio::AudioSink;

/// An audio output holding the volume and pan written by an emitter.
///
/// A mixer reads it back through [`StereoSink::channel_gains`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StereoSink {
    /// Volume last written. Unclamped.
    pub volume: f32,
    /// Pan last written, in `[-1, 1]`.
    pub pan: f32,
}

impl Default for StereoSink {
    fn default() -> Self {
        Self {
            volume: 1.0,
            pan: 0.0,
        }
    }
}

impl StereoSink {
    /// Creates a sink at full volume, centered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns equal-power `(left, right)` gains for the current pan, scaled by volume.
    ///
    /// A centered pan gives each channel `volume * sqrt(0.5)`; a full-right pan
    /// silences the left channel.
    pub fn channel_gains(&self) -> (f32, f32) {
        // Map [-1, 1] onto [0, 1] before the square-root law.
        let p = (self.pan.clamp(-1.0, 1.0) + 1.0) * 0.5;
        (self.volume * (1.0 - p).sqrt(), self.volume * p.sqrt())
    }
}

impl AudioSink for StereoSink {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_pan(&mut self, pan: f32) {
        self.pan = pan;
    }

    fn pan(&self) -> f32 {
        self.pan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_centered_gains_are_equal_power() {
        let sink = StereoSink::new();
        let (l, r) = sink.channel_gains();
        assert_abs_diff_eq!(l, r);
        assert_abs_diff_eq!(l * l + r * r, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hard_right_silences_left() {
        let sink = StereoSink {
            volume: 0.5,
            pan: 1.0,
        };
        let (l, r) = sink.channel_gains();
        assert_abs_diff_eq!(l, 0.0);
        assert_abs_diff_eq!(r, 0.5);
    }

    #[test]
    fn test_sink_trait_roundtrip() {
        let mut sink = StereoSink::new();
        sink.set_volume(0.25);
        sink.set_pan(-0.5);
        assert_eq!(AudioSink::volume(&sink), 0.25);
        assert_eq!(AudioSink::pan(&sink), -0.5);
    }
}
