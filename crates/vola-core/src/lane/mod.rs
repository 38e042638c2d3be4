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

//! # Lane Abstraction
//!
//! A **Lane** is a swappable processing strategy. Agents pick a lane per task
//! (which attenuation curve, which panning rule) and call its domain-specific
//! method every frame.
//!
//! The hierarchy has two levels:
//!
//! 1. **`Lane`** (this trait): the identity shared by all lanes.
//! 2. **Domain traits** extending it, such as `AttenuationLane` and `PanLane`
//!    in `vola-lanes`.

/// Base trait for all lane types.
pub trait Lane: Send + Sync {
    /// Human-readable name of the strategy this lane implements.
    fn strategy_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullLane;

    impl Lane for NullLane {
        fn strategy_name(&self) -> &'static str {
            "Null"
        }
    }

    #[test]
    fn test_lane_identity_through_trait_object() {
        let lane: Box<dyn Lane> = Box::new(NullLane);
        assert_eq!(lane.strategy_name(), "Null");
    }
}
