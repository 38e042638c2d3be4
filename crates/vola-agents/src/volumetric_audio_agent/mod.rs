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

//! The agent that turns a listener and a collision volume into volume and pan.

mod error;

pub use error::EmitterError;

use vola_core::audio::AudioSink;
use vola_core::lane::Lane;
use vola_core::math::Vec3;
use vola_core::physics::ClosestPointQuery;
use vola_data::{AudioEmitter, EmitterConfig, ListenerHandle, StereoSink};
use vola_lanes::{select_curve, AttenuationLane, PanInput, PanLane, StereoPanLane};

/// What one update computed, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterSample {
    /// Closest point of the volume to the listener.
    pub closest_point: Vec3,
    /// Distance from the listener to `closest_point`.
    pub distance: f32,
    /// Volume written to the sink.
    pub volume: f32,
    /// Pan written to the sink, or `None` in mono mode.
    pub pan: Option<f32>,
}

/// Drives one volumetric emitter.
///
/// Construction goes through [`VolumetricAudioAgentBuilder`], which refuses to
/// produce an agent without a listener and a collision volume, so every agent
/// that exists can be updated.
pub struct VolumetricAudioAgent {
    name: String,
    settings: AudioEmitter,
    collider: Box<dyn ClosestPointQuery>,
    sink: Box<dyn AudioSink>,
    listener: ListenerHandle,
    pan_lane: StereoPanLane,
    last_sample: Option<EmitterSample>,
    warned_unbounded: bool,
}

impl VolumetricAudioAgent {
    /// Starts building an agent named `name`.
    pub fn builder(name: impl Into<String>) -> VolumetricAudioAgentBuilder {
        VolumetricAudioAgentBuilder::new(name)
    }

    /// Builds an agent from a scene entry, writing into a fresh [`StereoSink`].
    pub fn from_config(
        config: &EmitterConfig,
        listener: ListenerHandle,
    ) -> Result<Self, EmitterError> {
        if !config.collider.is_valid() {
            return Err(EmitterError::InvalidConfiguration(format!(
                "emitter '{}' has an invalid collider",
                config.name
            )));
        }
        Self::builder(config.name.clone())
            .settings(config.settings)
            .collider(config.collider)
            .listener(listener)
            .build()
    }

    /// Recomputes volume and, in stereo mode, pan for this frame.
    ///
    /// # Arguments
    /// * `delta_time`: Seconds elapsed since the previous update. Only the
    ///   near-field pan recentering reads it.
    pub fn update(&mut self, delta_time: f32) -> Result<EmitterSample, EmitterError> {
        let listener = *self
            .listener
            .read()
            .map_err(|_| EmitterError::ListenerUnavailable)?;
        if !listener.position.is_finite() {
            return Err(EmitterError::NonFiniteGeometry("listener position"));
        }

        let closest_point = self.collider.closest_point(listener.position);
        if !closest_point.is_finite() {
            return Err(EmitterError::NonFiniteGeometry("closest point"));
        }
        let distance = listener.position.distance(closest_point);

        let pan = if self.settings.stereo {
            let pan = self.pan_lane.pan(&PanInput {
                listener_position: listener.position,
                listener_right: listener.right,
                closest_point,
                previous_pan: self.sink.pan(),
                delta_time,
            });
            self.sink.set_pan(pan);
            Some(pan)
        } else {
            None
        };

        let lane = select_curve(self.settings.curve);
        let mut volume = lane.attenuate(distance, self.settings.strength());
        if let Some(ceiling) = self.settings.max_volume {
            // `f32::min` also replaces NaN with the ceiling.
            volume = volume.min(ceiling);
        }
        if !volume.is_finite() && !self.warned_unbounded {
            log::warn!(
                "Emitter '{}': {} volume is {volume} at distance {distance}; \
                 set a max_volume to bound it",
                self.name,
                lane.strategy_name()
            );
            self.warned_unbounded = true;
        }
        self.sink.set_volume(volume);

        let sample = EmitterSample {
            closest_point,
            distance,
            volume,
            pan,
        };
        log::trace!("Emitter '{}': {sample:?}", self.name);
        self.last_sample = Some(sample);
        Ok(sample)
    }

    /// The emitter's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The emitter's settings.
    pub fn settings(&self) -> &AudioEmitter {
        &self.settings
    }

    /// Mutable access to the settings. Strength stays clamped because every
    /// write to it, deserialization included, goes through the clamp.
    pub fn settings_mut(&mut self) -> &mut AudioEmitter {
        &mut self.settings
    }

    /// The sink this agent writes into.
    pub fn sink(&self) -> &dyn AudioSink {
        &*self.sink
    }

    /// The shared listener this agent reads.
    pub fn listener(&self) -> &ListenerHandle {
        &self.listener
    }

    /// The result of the most recent successful update.
    pub fn last_sample(&self) -> Option<EmitterSample> {
        self.last_sample
    }
}

/// Collects an agent's collaborators and validates them in [`build`](Self::build).
pub struct VolumetricAudioAgentBuilder {
    name: String,
    settings: AudioEmitter,
    collider: Option<Box<dyn ClosestPointQuery>>,
    sink: Option<Box<dyn AudioSink>>,
    listener: Option<ListenerHandle>,
}

impl VolumetricAudioAgentBuilder {
    /// Creates a builder with default settings and no collaborators.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: AudioEmitter::default(),
            collider: None,
            sink: None,
            listener: None,
        }
    }

    /// Sets the emitter settings.
    pub fn settings(mut self, settings: AudioEmitter) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the collision volume queried for the closest point.
    pub fn collider(mut self, collider: impl ClosestPointQuery + 'static) -> Self {
        self.collider = Some(Box::new(collider));
        self
    }

    /// Sets the output sink. Defaults to a [`StereoSink`].
    pub fn sink(mut self, sink: impl AudioSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Sets the listener the emitter is heard by.
    pub fn listener(mut self, listener: ListenerHandle) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Validates the configuration and produces the agent.
    pub fn build(self) -> Result<VolumetricAudioAgent, EmitterError> {
        let listener = self.listener.ok_or(EmitterError::MissingListener)?;
        let collider = self.collider.ok_or(EmitterError::MissingCollider)?;
        if let Some(ceiling) = self.settings.max_volume {
            if !(ceiling.is_finite() && ceiling >= 0.0) {
                return Err(EmitterError::InvalidConfiguration(format!(
                    "emitter '{}' has max_volume {ceiling}, expected a finite value >= 0",
                    self.name
                )));
            }
        }

        log::info!(
            "Emitter '{}' ready: curve {:?}, strength {}, stereo {}",
            self.name,
            self.settings.curve,
            self.settings.strength(),
            self.settings.stereo
        );

        Ok(VolumetricAudioAgent {
            name: self.name,
            settings: self.settings,
            collider,
            sink: self
                .sink
                .unwrap_or_else(|| Box::new(StereoSink::default()) as Box<dyn AudioSink>),
            listener,
            pan_lane: StereoPanLane::new(),
            last_sample: None,
            warned_unbounded: false,
        })
    }
}
