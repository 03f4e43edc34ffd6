//! Runs several component animations one after another or all at once.

use factoryvis_core::constants::DEFAULT_COMPONENT_ANIMATION_SECS;

use crate::component::ComponentAnimation;
use crate::easing::{ease_out_cubic, EasingFn};
use crate::renderable::Renderable;

/// How a sequence schedules its animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SequenceMode {
    /// Each animation starts when the previous one completes.
    #[default]
    Sequential,
    /// All animations start together.
    Parallel,
}

#[derive(Debug, Clone)]
pub struct AnimationSequence<R: Renderable> {
    animations: Vec<ComponentAnimation<R>>,
    mode: SequenceMode,
    duration: f64,
    easing: EasingFn,
    current: usize,
    running: bool,
    complete: bool,
}

impl<R: Renderable> Default for AnimationSequence<R> {
    fn default() -> Self {
        Self::new(SequenceMode::default())
    }
}

impl<R: Renderable> AnimationSequence<R> {
    pub fn new(mode: SequenceMode) -> Self {
        Self {
            animations: Vec::new(),
            mode,
            duration: DEFAULT_COMPONENT_ANIMATION_SECS,
            easing: ease_out_cubic,
            current: 0,
            running: false,
            complete: false,
        }
    }

    pub fn with(mut self, animation: ComponentAnimation<R>) -> Self {
        self.animations.push(animation);
        self
    }

    /// Duration and curve used for every animation in the sequence.
    pub fn with_timing(mut self, duration: f64, easing: EasingFn) -> Self {
        self.duration = duration;
        self.easing = easing;
        self
    }

    pub fn push(&mut self, animation: ComponentAnimation<R>) {
        self.animations.push(animation);
    }

    pub fn start(&mut self) {
        if self.animations.is_empty() {
            self.complete = true;
            return;
        }

        self.running = true;
        self.current = 0;

        match self.mode {
            SequenceMode::Parallel => {
                for animation in &mut self.animations {
                    animation.start(self.duration, self.easing);
                }
            }
            SequenceMode::Sequential => {
                self.animations[0].start(self.duration, self.easing);
            }
        }
    }

    pub fn update(&mut self, dt: f64) {
        if !self.running || self.complete {
            return;
        }

        match self.mode {
            SequenceMode::Parallel => {
                let mut all_complete = true;
                for animation in &mut self.animations {
                    animation.update(dt);
                    all_complete &= animation.is_complete();
                }
                if all_complete {
                    self.finish();
                }
            }
            SequenceMode::Sequential => {
                let current = &mut self.animations[self.current];
                current.update(dt);
                if current.is_complete() {
                    self.current += 1;
                    match self.animations.get_mut(self.current) {
                        Some(next) => {
                            next.start(self.duration, self.easing);
                        }
                        None => self.finish(),
                    }
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.running = false;
        self.complete = false;
        for animation in &mut self.animations {
            animation.reset();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn mode(&self) -> SequenceMode {
        self.mode
    }

    /// Index of the animation a sequential run is on.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn animations(&self) -> &[ComponentAnimation<R>] {
        &self.animations
    }

    fn finish(&mut self) {
        self.complete = true;
        self.running = false;
    }
}
