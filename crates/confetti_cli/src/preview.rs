//! Headless preview: play an explosion on a fixed frame clock and record
//! one particle's transform per frame

use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use confetti::{
    ConfettiCanvas, ConfettiPiece, ExplosionBuilder, ExplosionConfig, ExplosionState, Particle,
    ParticleTransform, ScreenSize,
};
use confetti_animation::AnimationScheduler;
use serde::Serialize;

/// Frame clock and probe settings
#[derive(Clone, Copy, Debug)]
pub struct PreviewOptions {
    pub fps: u32,
    pub screen: ScreenSize,
    /// Index of the particle to record
    pub particle: usize,
}

/// One recorded frame
#[derive(Clone, Debug, Serialize)]
pub struct PreviewFrame {
    pub frame: usize,
    pub elapsed_ms: f32,
    pub clock: f32,
    pub color: String,
    #[serde(flatten)]
    pub transform: ParticleTransform,
    /// Lifecycle events fired since the previous frame
    pub events: Vec<&'static str>,
}

type EventLog = Arc<Mutex<Vec<&'static str>>>;

fn record(log: &EventLog, name: &'static str) {
    log.lock().unwrap_or_else(|e| e.into_inner()).push(name);
}

fn drain(log: &EventLog) -> Vec<&'static str> {
    std::mem::take(&mut *log.lock().unwrap_or_else(|e| e.into_inner()))
}

/// Canvas that keeps the colour drawn for one piece
struct Probe {
    index: usize,
    color: Option<String>,
}

impl ConfettiCanvas for Probe {
    fn draw_confetti(&mut self, piece: ConfettiPiece<'_>) {
        if piece.index == self.index {
            self.color = Some(piece.color.to_string());
        }
    }
}

/// Play `config` to completion and return the probed frames
pub fn run(config: ExplosionConfig, options: PreviewOptions) -> Result<Vec<PreviewFrame>> {
    if options.fps == 0 {
        anyhow::bail!("--fps must be at least 1");
    }
    if options.particle >= config.count {
        anyhow::bail!(
            "--particle {} is out of range for {} pieces",
            options.particle,
            config.count
        );
    }

    let events: EventLog = Arc::new(Mutex::new(Vec::new()));
    let listener = |name: &'static str| {
        let events = Arc::clone(&events);
        move |_: &[Particle]| record(&events, name)
    };

    let scheduler = AnimationScheduler::new();
    let mut explosion = ExplosionBuilder::new(config)
        .on_animation_start(listener("start"))
        .on_animation_resume(listener("resume"))
        .on_animation_stop(listener("stop"))
        .on_animation_end(listener("end"))
        .build(scheduler.clone())
        .context("Failed to create explosion")?;

    let dt = 1000.0 / options.fps as f32;
    let last_frame = (explosion.config().total_duration_ms() as f32 / dt).ceil() as usize + 1;
    tracing::info!(
        pieces = explosion.particles().len(),
        duration_ms = explosion.config().total_duration_ms(),
        fps = options.fps,
        "previewing"
    );

    explosion.mount();
    if !explosion.config().auto_start {
        explosion.start();
    }

    let mut frames = Vec::with_capacity(last_frame + 1);
    for frame in 0..=last_frame {
        let mut probe = Probe {
            index: options.particle,
            color: None,
        };
        explosion.render(&options.screen, &mut probe)?;
        let transform = explosion.frame(&options.screen)?[options.particle];

        frames.push(PreviewFrame {
            frame,
            elapsed_ms: frame as f32 * dt,
            clock: explosion.clock().get(),
            color: probe.color.unwrap_or_default(),
            transform,
            events: drain(&events),
        });

        if explosion.state() == ExplosionState::Completed {
            break;
        }
        scheduler.tick(dt);
    }

    tracing::debug!(frames = frames.len(), "preview finished");
    Ok(frames)
}

/// One JSON object per line
pub fn write_json(out: &mut impl Write, frames: &[PreviewFrame]) -> Result<()> {
    for frame in frames {
        serde_json::to_writer(&mut *out, frame)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Fixed-width table
pub fn write_table(out: &mut impl Write, frames: &[PreviewFrame]) -> Result<()> {
    writeln!(
        out,
        "{:>5} {:>8} {:>6} {:>9} {:>9} {:>8} {:>8} {:>8} {:>7} {:>5}  {:<8} events",
        "frame", "ms", "clock", "x", "y", "rot_x", "rot_y", "rot_z", "swing", "alpha", "color"
    )?;
    for f in frames {
        let t = &f.transform;
        writeln!(
            out,
            "{:>5} {:>8.1} {:>6.3} {:>9.1} {:>9.1} {:>8.1} {:>8.1} {:>8.1} {:>7.1} {:>5.2}  {:<8} {}",
            f.frame,
            f.elapsed_ms,
            f.clock,
            t.left,
            t.top,
            t.rotate_x,
            t.rotate_y,
            t.rotate_z,
            t.swing,
            t.opacity,
            f.color,
            f.events.join(",")
        )?;
    }
    Ok(())
}
