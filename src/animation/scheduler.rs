//! Animation scheduler
//!
//! Holds the set of running animations and advances each of them once per
//! frame tick. The scheduler is owned by the top-level frame loop and passed
//! by reference to whatever needs to start or stop animations.

use log::trace;

use super::tween::Animation;

#[derive(Debug, Default)]
pub struct Scheduler {
    active: Vec<Animation>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `anim`. Returns false if it was already active.
    pub fn play(&mut self, anim: &Animation) -> bool {
        if self.is_active(anim) {
            return false;
        }
        self.active.push(anim.clone());
        trace!("scheduler: play ({} active)", self.active.len());
        true
    }

    /// Deregister `anim`. Returns false if it was not active.
    pub fn stop(&mut self, anim: &Animation) -> bool {
        match self.active.iter().position(|a| a.ptr_eq(anim)) {
            Some(idx) => {
                self.active.swap_remove(idx);
                trace!("scheduler: stop ({} active)", self.active.len());
                true
            }
            None => false,
        }
    }

    /// Advance every animation that was active when the tick began.
    ///
    /// Iterates a snapshot so animations may deregister themselves (or
    /// others) mid-tick. Animations started during the tick wait for the
    /// next one.
    pub fn update(&mut self, dt: f32) {
        let snapshot = self.active.clone();
        for anim in &snapshot {
            anim.update(dt, self);
        }
    }

    /// Drop every registration without notifying the animations
    pub fn clear(&mut self) {
        trace!("scheduler: clear ({} dropped)", self.active.len());
        self.active.clear();
    }

    pub fn is_active(&self, anim: &Animation) -> bool {
        self.active.iter().any(|a| a.ptr_eq(anim))
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::scene::shared_node;

    fn linear(duration: f32) -> Animation {
        Animation::scale(shared_node(), duration, 0.0, 1.0, Easing::Linear).unwrap()
    }

    #[test]
    fn test_play_is_idempotent() {
        let mut scheduler = Scheduler::new();
        let anim = linear(1.0);

        assert!(scheduler.play(&anim));
        assert!(!scheduler.play(&anim));
        anim.play(&mut scheduler);
        anim.clone().play(&mut scheduler);

        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_stop_unknown_is_noop() {
        let mut scheduler = Scheduler::new();
        let playing = linear(1.0);
        let stranger = linear(1.0);
        playing.play(&mut scheduler);

        assert!(!scheduler.stop(&stranger));
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_self_removal_does_not_skip_others() {
        let mut scheduler = Scheduler::new();
        let short = linear(0.1);
        let long_a = linear(10.0);
        let long_b = linear(10.0);

        long_a.play(&mut scheduler);
        short.play(&mut scheduler);
        long_b.play(&mut scheduler);

        scheduler.update(0.5);

        assert!(!scheduler.is_active(&short));
        assert_eq!(short.progress(), 1.0);
        assert!((long_a.progress() - 0.05).abs() < 1e-6);
        assert!((long_b.progress() - 0.05).abs() < 1e-6);
        assert_eq!(scheduler.len(), 2);
    }

    #[test]
    fn test_all_finishing_together() {
        let mut scheduler = Scheduler::new();
        let anims: Vec<Animation> = (0..24).map(|_| linear(0.2)).collect();
        for anim in &anims {
            anim.play(&mut scheduler);
        }

        scheduler.update(0.2);

        assert!(scheduler.is_empty());
        assert!(anims.iter().all(|a| a.progress() == 1.0));
    }

    #[test]
    fn test_clear_detaches_silently() {
        let mut scheduler = Scheduler::new();
        let a = linear(1.0);
        let b = linear(1.0);
        a.play(&mut scheduler);
        b.play(&mut scheduler);

        scheduler.clear();

        assert!(scheduler.is_empty());
        assert!(a.is_running());
        assert!(b.is_running());

        // Inert: ticks no longer reach them
        scheduler.update(0.5);
        assert_eq!(a.progress(), 0.0);

        // Playing again re-registers
        a.play(&mut scheduler);
        assert!(scheduler.is_active(&a));
    }
}
