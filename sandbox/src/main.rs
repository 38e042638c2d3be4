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

// Vola Sandbox
// Walks a listener along the X axis past the emitters of a scene and logs
// what each emitter would send to its audio sink.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vola_agents::VolumetricAudioAgent;
use vola_core::math::Vec3;
use vola_data::SceneConfig;

const DEFAULT_SCENE: &str = include_str!("../assets/scene.ron");

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// RON scene file; the bundled scene is used when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 240)]
    frames: u32,
    /// Seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Listener walking speed along +X, in units per second.
    #[arg(long, default_value_t = 10.0)]
    speed: f32,
    /// Log a report every N frames.
    #[arg(long, default_value_t = 30)]
    report_every: u32,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scene = match &args.scene {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => SceneConfig::from_ron_str(DEFAULT_SCENE).context("parsing bundled scene")?,
    };

    let listener = scene.listener.to_listener().into_handle();
    let mut agents = scene
        .emitters
        .iter()
        .map(|emitter| VolumetricAudioAgent::from_config(emitter, listener.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!(
        "Simulating {} frames of {:.4}s with {} emitter(s)",
        args.frames,
        args.dt,
        agents.len()
    );

    let step = Vec3::new(args.speed * args.dt, 0.0, 0.0);
    let report_every = args.report_every.max(1);
    for frame in 0..args.frames {
        let position = {
            let mut listener = listener
                .write()
                .map_err(|_| anyhow::anyhow!("listener lock poisoned"))?;
            if frame > 0 {
                listener.position += step;
            }
            listener.position
        };

        for agent in &mut agents {
            let sample = agent
                .update(args.dt)
                .with_context(|| format!("updating emitter '{}'", agent.name()))?;
            if frame % report_every == 0 {
                let pan = sample
                    .pan
                    .map_or_else(|| "mono".to_string(), |p| format!("{p:+.3}"));
                log::info!(
                    "frame {frame:>4} listener x={:>7.2} | {:<10} d={:>6.2} vol={:>6.3} pan={pan}",
                    position.x,
                    agent.name(),
                    sample.distance,
                    sample.volume,
                );
            }
        }
    }

    Ok(())
}
