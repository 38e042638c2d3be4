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

use std::fmt;

/// An error that can occur while building or updating a `VolumetricAudioAgent`.
#[derive(Debug, Clone, PartialEq)]
pub enum EmitterError {
    /// No listener was provided.
    MissingListener,
    /// No collision volume was provided.
    MissingCollider,
    /// The provided configuration cannot produce meaningful output.
    InvalidConfiguration(String),
    /// The listener's lock was poisoned by a panicking writer.
    ListenerUnavailable,
    /// A position needed for this frame was infinite or NaN.
    NonFiniteGeometry(&'static str),
}

impl fmt::Display for EmitterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitterError::MissingListener => write!(f, "Emitter has no listener"),
            EmitterError::MissingCollider => write!(f, "Emitter has no collision volume"),
            EmitterError::InvalidConfiguration(msg) => {
                write!(f, "Invalid emitter configuration: {msg}")
            }
            EmitterError::ListenerUnavailable => write!(f, "Listener lock is poisoned"),
            EmitterError::NonFiniteGeometry(what) => write!(f, "Non-finite {what}"),
        }
    }
}

impl std::error::Error for EmitterError {}
