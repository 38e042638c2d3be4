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

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use vola_agents::{EmitterError, VolumetricAudioAgent};
use vola_core::audio::AudioSink;
use vola_core::math::{Aabb, Vec3};
use vola_data::{
    AudioEmitter, AudioListener, Collider, CurveKind, EmitterConfig, ListenerHandle, SceneConfig,
};

fn listener_at(position: Vec3) -> ListenerHandle {
    AudioListener::new(position, Vec3::Z, Vec3::X).into_handle()
}

fn point_emitter(
    at: Vec3,
    settings: AudioEmitter,
    listener: ListenerHandle,
) -> VolumetricAudioAgent {
    VolumetricAudioAgent::builder("test")
        .settings(settings)
        .collider(Collider::new_sphere(at, 0.0))
        .listener(listener)
        .build()
        .unwrap()
}

#[derive(Default)]
struct RecordingSink {
    writes: Rc<RefCell<Vec<(&'static str, f32)>>>,
    volume: f32,
    pan: f32,
}

impl AudioSink for RecordingSink {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.writes.borrow_mut().push(("volume", volume));
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_pan(&mut self, pan: f32) {
        self.pan = pan;
        self.writes.borrow_mut().push(("pan", pan));
    }

    fn pan(&self) -> f32 {
        self.pan
    }
}

#[test]
fn test_source_to_the_right_pans_fully_right() {
    let settings = AudioEmitter::new(CurveKind::InverseSquare).with_stereo(true);
    let mut agent = point_emitter(Vec3::new(1.0, 0.0, 0.0), settings, listener_at(Vec3::ZERO));

    let sample = agent.update(1.0 / 60.0).unwrap();

    assert_eq!(sample.pan, Some(1.0));
    assert_eq!(agent.sink().pan(), 1.0);
    assert_abs_diff_eq!(agent.sink().volume(), 1.0);
}

#[test]
fn test_inverse_square_reference_scenario() {
    let settings = AudioEmitter::new(CurveKind::InverseSquare);
    let mut agent = point_emitter(Vec3::new(0.0, 0.0, 4.0), settings, listener_at(Vec3::ZERO));

    let sample = agent.update(0.016).unwrap();

    assert_abs_diff_eq!(sample.distance, 4.0);
    assert_eq!(sample.volume, 0.5);
    assert_eq!(sample.pan, None);
}

#[test]
fn test_logarithmic_reference_scenario() {
    let settings = AudioEmitter::new(CurveKind::Logarithmic);
    let mut agent = point_emitter(Vec3::new(0.0, 0.0, 4.0), settings, listener_at(Vec3::ZERO));

    assert_eq!(agent.update(0.016).unwrap().volume, 0.0);
}

#[test]
fn test_distance_is_measured_to_the_volume_not_its_center() {
    // A long wall 10 units ahead: the listener hears its nearest face.
    let wall = Collider::new_box(Vec3::new(0.0, 0.0, 10.0), Vec3::new(50.0, 5.0, 6.0));
    let mut agent = VolumetricAudioAgent::builder("wall")
        .settings(AudioEmitter::new(CurveKind::InverseSquare).with_stereo(true))
        .collider(wall)
        .listener(listener_at(Vec3::new(30.0, 0.0, 0.0)))
        .build()
        .unwrap();

    let sample = agent.update(0.016).unwrap();

    assert_eq!(sample.closest_point, Vec3::new(30.0, 0.0, 4.0));
    assert_abs_diff_eq!(sample.distance, 4.0);
    assert_eq!(sample.volume, 0.5);
    // Straight ahead of the listener even though the wall's center is far to the left.
    assert_eq!(sample.pan, Some(0.0));
}

#[test]
fn test_listener_inside_volume() {
    let listener = listener_at(Vec3::new(0.5, 0.0, 0.0));
    let volume = Aabb::from_min_max(-Vec3::ONE, Vec3::ONE);

    let mut log_agent = VolumetricAudioAgent::builder("log")
        .settings(AudioEmitter::new(CurveKind::Logarithmic).with_stereo(true))
        .collider(volume)
        .listener(listener.clone())
        .build()
        .unwrap();
    let sample = log_agent.update(0.016).unwrap();
    assert_eq!(sample.distance, 0.0);
    assert_eq!(sample.volume, 1.0);
    assert!(sample.pan.unwrap().is_finite());

    // Without a ceiling the inverse-square curve is unbounded at distance 0.
    let mut inv_agent = VolumetricAudioAgent::builder("inv")
        .settings(AudioEmitter::new(CurveKind::InverseSquare).with_stereo(true))
        .collider(volume)
        .listener(listener.clone())
        .build()
        .unwrap();
    let sample = inv_agent.update(0.016).unwrap();
    assert!(sample.volume.is_infinite() && sample.volume > 0.0);

    // With a ceiling it is held there.
    let mut capped = VolumetricAudioAgent::builder("capped")
        .settings(AudioEmitter::new(CurveKind::InverseSquare).with_max_volume(2.0))
        .collider(volume)
        .listener(listener)
        .build()
        .unwrap();
    assert_eq!(capped.update(0.016).unwrap().volume, 2.0);
}

#[test]
fn test_near_field_recenters_over_frames() {
    let listener = listener_at(Vec3::ZERO);
    let mut agent = point_emitter(
        Vec3::new(3.0, 0.0, 0.0),
        AudioEmitter::new(CurveKind::Logarithmic).with_stereo(true),
        listener.clone(),
    );
    assert_eq!(agent.update(0.016).unwrap().pan, Some(1.0));

    // Walk into the source: pan eases back toward center instead of snapping.
    listener.write().unwrap().position = Vec3::new(3.0, 0.0, 0.0);
    let mut previous = agent.sink().pan();
    for _ in 0..600 {
        let pan = agent.update(1.0 / 60.0).unwrap().pan.unwrap();
        assert!(pan.abs() <= previous.abs());
        assert!(pan >= 0.0);
        previous = pan;
    }
    assert!(previous > 0.0 && previous < 0.01, "got {previous}");
}

#[test]
fn test_mono_never_writes_pan() {
    let sink = RecordingSink::default();
    let writes = sink.writes.clone();
    let mut agent = VolumetricAudioAgent::builder("mono")
        .settings(AudioEmitter::new(CurveKind::Logarithmic))
        .collider(Collider::new_sphere(Vec3::new(2.0, 0.0, 0.0), 0.5))
        .sink(sink)
        .listener(listener_at(Vec3::ZERO))
        .build()
        .unwrap();

    agent.update(0.016).unwrap();
    agent.update(0.016).unwrap();

    let writes = writes.borrow();
    assert_eq!(writes.len(), 2);
    assert!(writes.iter().all(|(field, _)| *field == "volume"));
}

#[test]
fn test_stereo_writes_pan_then_volume() {
    let sink = RecordingSink::default();
    let writes = sink.writes.clone();
    let mut agent = VolumetricAudioAgent::builder("stereo")
        .settings(AudioEmitter::new(CurveKind::Logarithmic).with_stereo(true))
        .collider(Collider::new_sphere(Vec3::new(-2.0, 0.0, 0.0), 0.5))
        .sink(sink)
        .listener(listener_at(Vec3::ZERO))
        .build()
        .unwrap();

    agent.update(0.016).unwrap();

    let writes = writes.borrow();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], ("pan", -1.0));
    assert_eq!(writes[1].0, "volume");
}

#[test]
fn test_missing_collaborators_fail_at_build() {
    let err = VolumetricAudioAgent::builder("orphan")
        .collider(Collider::default())
        .build()
        .err();
    assert_eq!(err, Some(EmitterError::MissingListener));

    let err = VolumetricAudioAgent::builder("orphan")
        .listener(listener_at(Vec3::ZERO))
        .build()
        .err();
    assert_eq!(err, Some(EmitterError::MissingCollider));
}

#[test]
fn test_non_finite_listener_fails_fast() {
    let listener = listener_at(Vec3::ZERO);
    let mut agent = point_emitter(
        Vec3::new(1.0, 0.0, 0.0),
        AudioEmitter::new(CurveKind::Logarithmic).with_stereo(true),
        listener.clone(),
    );
    agent.update(0.016).unwrap();
    let before = (agent.sink().volume(), agent.sink().pan());

    listener.write().unwrap().position = Vec3::new(f32::NAN, 0.0, 0.0);
    assert_eq!(
        agent.update(0.016),
        Err(EmitterError::NonFiniteGeometry("listener position"))
    );
    // The sink keeps the last good values.
    assert_eq!((agent.sink().volume(), agent.sink().pan()), before);
}

#[test]
fn test_poisoned_listener_is_reported() {
    let listener = listener_at(Vec3::ZERO);
    let mut agent = point_emitter(
        Vec3::new(1.0, 0.0, 0.0),
        AudioEmitter::default(),
        listener.clone(),
    );

    let poisoner = listener.clone();
    let _ = std::thread::spawn(move || {
        let _guard = poisoner.write().unwrap();
        panic!("poison the listener lock");
    })
    .join();

    assert_eq!(agent.update(0.016), Err(EmitterError::ListenerUnavailable));
}

#[test]
fn test_strength_stays_clamped_through_settings_mut() {
    let mut agent = point_emitter(
        Vec3::new(0.0, 0.0, 4.0),
        AudioEmitter::new(CurveKind::InverseSquare),
        listener_at(Vec3::ZERO),
    );
    agent.settings_mut().set_strength(10.0);
    assert_eq!(agent.settings().strength(), 1.0);
    assert_eq!(agent.update(0.016).unwrap().volume, 1.5);
}

#[test]
fn test_deserialized_settings_keep_strength_clamped() {
    let settings: AudioEmitter = ron::from_str("(curve: InverseSquare, strength: 5.0)").unwrap();
    let mut agent = point_emitter(Vec3::new(0.0, 0.0, 4.0), settings, listener_at(Vec3::ZERO));

    assert_eq!(agent.settings().strength(), 1.0);
    assert_eq!(agent.update(0.016).unwrap().volume, 1.5);
}

#[test]
fn test_build_rejects_unusable_ceilings() {
    for ceiling in [-1.0, f32::INFINITY, f32::NAN] {
        let result = VolumetricAudioAgent::builder("capped")
            .settings(AudioEmitter::default().with_max_volume(ceiling))
            .collider(Collider::default())
            .listener(listener_at(Vec3::ZERO))
            .build();
        assert!(
            matches!(result, Err(EmitterError::InvalidConfiguration(_))),
            "max_volume {ceiling} should be rejected"
        );
    }

    // A hand-built scene entry skips `SceneConfig::validate` but not the builder.
    let config = EmitterConfig {
        name: "negative".into(),
        collider: Collider::default(),
        settings: AudioEmitter::new(CurveKind::Logarithmic).with_max_volume(-0.5),
    };
    assert!(matches!(
        VolumetricAudioAgent::from_config(&config, listener_at(Vec3::ZERO)),
        Err(EmitterError::InvalidConfiguration(_))
    ));

    // Zero is a valid, if silent, ceiling.
    let mut agent = point_emitter(
        Vec3::new(0.0, 0.0, 4.0),
        AudioEmitter::default().with_max_volume(0.0),
        listener_at(Vec3::ZERO),
    );
    assert_eq!(agent.update(0.016).unwrap().volume, 0.0);
}

#[test]
fn test_agents_from_scene_config() {
    let scene = SceneConfig::from_ron_str(
        r#"(
            listener: (position: (x: 0.0, y: 0.0, z: 0.0), forward: (x: 0.0, y: 0.0, z: 1.0)),
            emitters: [
                (
                    name: "hum",
                    collider: (shape: Sphere(1.0), center: (x: -5.0, y: 0.0, z: 0.0)),
                    settings: (curve: Logarithmic, stereo: true, strength: 1.0),
                ),
            ],
        )"#,
    )
    .unwrap();
    let listener = scene.listener.to_listener().into_handle();

    let mut agent = VolumetricAudioAgent::from_config(&scene.emitters[0], listener).unwrap();
    let sample = agent.update(0.016).unwrap();

    // Surface at x = -4: log2(4) / 3 = 2/3 of the way down.
    assert_abs_diff_eq!(sample.distance, 4.0);
    assert_abs_diff_eq!(sample.volume, 1.0 - 2.0 / 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(sample.pan.unwrap(), -1.0);
    assert_eq!(agent.name(), "hum");
    assert_eq!(agent.last_sample(), Some(sample));
}

#[test]
fn test_from_config_rejects_invalid_collider() {
    let config = EmitterConfig {
        name: "broken".into(),
        collider: Collider::new_sphere(Vec3::ZERO, f32::NAN),
        settings: AudioEmitter::default(),
    };
    assert!(matches!(
        VolumetricAudioAgent::from_config(&config, listener_at(Vec3::ZERO)),
        Err(EmitterError::InvalidConfiguration(_))
    ));
}
