//! The explosion component
//!
//! Owns the particle list and the single clock every particle is sampled
//! from, builds the reset/burst/fall sequence on a [`TweenEngine`], and
//! reports lifecycle events to registered listeners.

use std::sync::{Arc, Mutex, MutexGuard};

use confetti_animation::{AnimatedValue, EndCallback, EndResult, SequenceId, TweenEngine};
use confetti_core::{AnimationEvent, EventDispatcher, StateMachine};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::ExplosionConfig;
use crate::error::Result;
use crate::host::{ConfettiCanvas, ConfettiPiece, ScreenMetrics};
use crate::palette::Palette;
use crate::particle::{Particle, ParticleGenerator};
use crate::transform::{ParticleTrack, ParticleTransform};

/// Lifecycle state of an explosion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExplosionState {
    /// Never started
    Idle,
    Running,
    /// Played to the end
    Completed,
    /// Halted by [`Explosion::stop`]
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Command {
    Start,
    Resume,
    Stop,
    Finish,
}

type Lifecycle = StateMachine<ExplosionState, Command>;

fn lifecycle() -> Lifecycle {
    use ExplosionState::*;

    StateMachine::builder(Idle)
        .on_any(&[Idle, Running, Completed, Stopped], Command::Start, Running)
        .on_any(&[Running, Completed, Stopped], Command::Resume, Running)
        .on(Running, Command::Stop, Stopped)
        .on(Running, Command::Finish, Completed)
        .build()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Builder for attaching lifecycle listeners before construction
pub struct ExplosionBuilder {
    config: ExplosionConfig,
    listeners: EventDispatcher<[Particle]>,
}

impl ExplosionBuilder {
    pub fn new(config: ExplosionConfig) -> Self {
        Self {
            config,
            listeners: EventDispatcher::new(),
        }
    }

    /// Called when a fresh run begins
    pub fn on_animation_start<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Particle]) + Send + Sync + 'static,
    {
        self.listeners.register(AnimationEvent::Start, f);
        self
    }

    /// Called when playback resumes
    pub fn on_animation_resume<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Particle]) + Send + Sync + 'static,
    {
        self.listeners.register(AnimationEvent::Resume, f);
        self
    }

    /// Called when playback is stopped
    pub fn on_animation_stop<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Particle]) + Send + Sync + 'static,
    {
        self.listeners.register(AnimationEvent::Stop, f);
        self
    }

    /// Called when a run plays to the end
    pub fn on_animation_end<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Particle]) + Send + Sync + 'static,
    {
        self.listeners.register(AnimationEvent::End, f);
        self
    }

    /// Generate the particles and create the explosion
    pub fn build<E: TweenEngine>(self, engine: E) -> Result<Explosion<E>> {
        let palette = self.config.palette()?;
        let particles: Arc<[Particle]> = ParticleGenerator::new(self.config.seed)
            .generate(self.config.count)
            .into();

        let mut color_rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        color_rng.set_stream(1);

        tracing::debug!(
            count = particles.len(),
            duration_ms = self.config.total_duration_ms(),
            "explosion created"
        );

        Ok(Explosion {
            config: self.config,
            palette,
            particles,
            clock: AnimatedValue::new(0.0),
            engine,
            sequence: None,
            listeners: Arc::new(self.listeners),
            lifecycle: Arc::new(Mutex::new(lifecycle())),
            color_rng,
            mounted: false,
        })
    }
}

/// A one-shot confetti burst driven by a tween engine
pub struct Explosion<E: TweenEngine> {
    config: ExplosionConfig,
    palette: Palette,
    particles: Arc<[Particle]>,
    clock: AnimatedValue,
    engine: E,
    sequence: Option<SequenceId>,
    listeners: Arc<EventDispatcher<[Particle]>>,
    lifecycle: Arc<Mutex<Lifecycle>>,
    color_rng: ChaCha8Rng,
    mounted: bool,
}

impl<E: TweenEngine> Explosion<E> {
    /// Create an explosion without listeners
    pub fn new(config: ExplosionConfig, engine: E) -> Result<Self> {
        ExplosionBuilder::new(config).build(engine)
    }

    pub fn config(&self) -> &ExplosionConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The shared clock (0 at rest, 1 at the burst peak, 2 when landed)
    pub fn clock(&self) -> &AnimatedValue {
        &self.clock
    }

    pub fn state(&self) -> ExplosionState {
        lock(&self.lifecycle).current_state()
    }

    /// Whether a timeline has been built
    pub fn has_timeline(&self) -> bool {
        self.sequence.is_some()
    }

    /// Attach to the host. Starts the run when `auto_start` is set; later
    /// calls do nothing.
    pub fn mount(&mut self) {
        if std::mem::replace(&mut self.mounted, true) {
            tracing::warn!("explosion already mounted");
            return;
        }
        if self.config.auto_start {
            self.start();
        }
    }

    /// Build a fresh timeline and play it from the beginning
    pub fn start(&mut self) {
        self.run(false);
    }

    /// Continue the existing timeline without rebuilding it
    pub fn resume(&mut self) {
        self.run(true);
    }

    /// Notify listeners, then halt playback where it is
    pub fn stop(&mut self) {
        tracing::debug!("explosion stopped");
        self.listeners.dispatch(AnimationEvent::Stop, &self.particles);

        if let Some(id) = self.sequence {
            self.engine.stop(id);
        }
        let moved = lock(&self.lifecycle).send(Command::Stop);
        if moved.is_none() {
            tracing::trace!(state = ?self.state(), "stop outside a running explosion");
        }
    }

    fn run(&mut self, resume: bool) {
        if resume {
            tracing::debug!("explosion resumed");
            if self.sequence.is_some() {
                lock(&self.lifecycle).send(Command::Resume);
            }
            self.listeners.dispatch(AnimationEvent::Resume, &self.particles);
        } else {
            if let Some(old) = self.sequence.take() {
                self.engine.release(old);
            }
            let id = self.engine.sequence(&self.clock, self.config.timeline());
            self.sequence = Some(id);
            tracing::debug!(?id, "explosion started");

            lock(&self.lifecycle).send(Command::Start);
            self.listeners.dispatch(AnimationEvent::Start, &self.particles);
        }

        let Some(id) = self.sequence else {
            tracing::warn!("resume before start; nothing to play");
            return;
        };
        let on_end = self.completion();
        self.engine.start(id, on_end);
    }

    fn completion(&self) -> EndCallback {
        let particles = Arc::clone(&self.particles);
        let listeners = Arc::clone(&self.listeners);
        let lifecycle = Arc::clone(&self.lifecycle);

        Box::new(move |result: EndResult| {
            if !result.finished {
                return;
            }
            lock(&lifecycle).send(Command::Finish);
            tracing::debug!("explosion finished");
            listeners.dispatch(AnimationEvent::End, &particles);
        })
    }

    /// Transforms of every particle at the current clock value
    pub fn frame(&self, screen: &impl ScreenMetrics) -> Result<Vec<ParticleTransform>> {
        let size = screen.window_size();
        let t = self.clock.get();

        self.particles
            .iter()
            .map(|p| -> Result<ParticleTransform> {
                let track = ParticleTrack::new(p, self.config.origin, size, self.config.fade_out)?;
                Ok(track.sample(t))
            })
            .collect()
    }

    /// Draw every particle at the current clock value.
    ///
    /// Colours are drawn from the palette on every pass, so a piece's
    /// colour is not stable across renders.
    pub fn render(
        &mut self,
        screen: &impl ScreenMetrics,
        canvas: &mut impl ConfettiCanvas,
    ) -> Result<()> {
        let frame = self.frame(screen)?;

        for (index, transform) in frame.iter().enumerate() {
            canvas.draw_confetti(ConfettiPiece {
                index,
                color: self.palette.pick(&mut self.color_rng),
                container_transform: transform.container_transform(),
                transform: transform.transform(),
                opacity: transform.opacity,
            });
        }
        Ok(())
    }
}

impl<E: TweenEngine> Drop for Explosion<E> {
    fn drop(&mut self) {
        if let Some(id) = self.sequence.take() {
            self.engine.release(id);
        }
    }
}
