// Time-bounded eased transitions over one scalar of a scene node

use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::Rc;

use log::trace;

use super::interpolation::{clamp_unit, lerp_f32};
use super::scheduler::Scheduler;
use crate::easing::Easing;
use crate::error::GlobeError;
use crate::scene::SharedNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Constructed, never played
    Idle,
    Running,
    /// Stopped explicitly or completed
    Stopped,
}

/// Which property a transition writes and between which values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Uniform scale factor
    Scale { start: f32, end: f32 },
    /// Angle in radians around the Y axis
    Rotation { start: f32, end: f32 },
}

impl Transition {
    pub fn sample(&self, eased: f32) -> f32 {
        match *self {
            Transition::Scale { start, end } | Transition::Rotation { start, end } => {
                lerp_f32(start, end, eased)
            }
        }
    }

    fn apply(&self, target: &SharedNode, eased: f32) {
        let value = self.sample(eased);
        let mut node = target.borrow_mut();
        match self {
            Transition::Scale { .. } => node.set_uniform_scale(value),
            Transition::Rotation { .. } => node.rotation.y = value,
        }
    }
}

#[derive(Debug)]
pub struct Tween {
    t: f32,
    duration: f32,
    easing: Easing,
    transition: Transition,
    target: SharedNode,
    state: AnimationState,
}

/// Shared handle to a tween; clones refer to the same animation
#[derive(Debug, Clone)]
pub struct Animation(Rc<RefCell<Tween>>);

impl Animation {
    pub fn new(
        target: SharedNode,
        duration: f32,
        transition: Transition,
        easing: Easing,
    ) -> Result<Self, GlobeError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(GlobeError::InvalidDuration(duration));
        }

        Ok(Self(Rc::new(RefCell::new(Tween {
            t: 0.0,
            duration,
            easing,
            transition,
            target,
            state: AnimationState::Idle,
        }))))
    }

    pub fn scale(
        target: SharedNode,
        duration: f32,
        start: f32,
        end: f32,
        easing: Easing,
    ) -> Result<Self, GlobeError> {
        Self::new(target, duration, Transition::Scale { start, end }, easing)
    }

    pub fn rotation(
        target: SharedNode,
        duration: f32,
        start: f32,
        end: f32,
        easing: Easing,
    ) -> Result<Self, GlobeError> {
        Self::new(target, duration, Transition::Rotation { start, end }, easing)
    }

    /// Full turn from `start`
    pub fn spin(target: SharedNode, duration: f32, start: f32, easing: Easing) -> Result<Self, GlobeError> {
        Self::rotation(target, duration, start, start + TAU, easing)
    }

    pub fn play(&self, scheduler: &mut Scheduler) {
        if scheduler.play(self) {
            self.0.borrow_mut().state = AnimationState::Running;
        }
    }

    pub fn stop(&self, scheduler: &mut Scheduler) {
        if scheduler.stop(self) {
            self.0.borrow_mut().state = AnimationState::Stopped;
        }
    }

    /// Advance by `dt`, write the eased value, and retire on completion.
    ///
    /// The final write happens at t == 1 before the animation leaves the
    /// active set.
    pub fn update(&self, dt: f32, scheduler: &mut Scheduler) {
        let finished = {
            let mut tween = self.0.borrow_mut();
            // Negative or NaN steps leave t where it is
            let step = (dt / tween.duration).max(0.0);
            tween.t = clamp_unit(tween.t + step);
            let eased = tween.easing.apply(tween.t);
            tween.transition.apply(&tween.target, eased);
            tween.t >= 1.0
        };

        if finished {
            trace!("animation finished: {:?}", self.transition());
            self.stop(scheduler);
        }
    }

    pub fn progress(&self) -> f32 {
        self.0.borrow().t
    }

    pub fn duration(&self) -> f32 {
        self.0.borrow().duration
    }

    pub fn state(&self) -> AnimationState {
        self.0.borrow().state
    }

    /// Whether this animation believes it is playing.
    ///
    /// `Scheduler::clear` does not reset this.
    pub fn is_running(&self) -> bool {
        self.state() == AnimationState::Running
    }

    pub fn transition(&self) -> Transition {
        self.0.borrow().transition
    }

    pub fn target(&self) -> SharedNode {
        Rc::clone(&self.0.borrow().target)
    }

    pub fn ptr_eq(&self, other: &Animation) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::shared_node;

    #[test]
    fn test_rejects_bad_duration() {
        for duration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = Animation::scale(shared_node(), duration, 0.0, 1.0, Easing::Linear);
            assert!(matches!(result, Err(GlobeError::InvalidDuration(_))));
        }
    }

    #[test]
    fn test_linear_scale_completes() {
        let mut scheduler = Scheduler::new();
        let node = shared_node();
        let anim = Animation::scale(node.clone(), 1.0, 0.0, 10.0, Easing::Linear).unwrap();
        assert_eq!(anim.state(), AnimationState::Idle);

        anim.play(&mut scheduler);
        assert!(anim.is_running());

        scheduler.update(0.5);
        assert!((node.borrow().scale.x - 5.0).abs() < 1e-6);
        assert!(scheduler.is_active(&anim));

        scheduler.update(0.6);
        assert_eq!(anim.progress(), 1.0);
        assert_eq!(node.borrow().scale.x, 10.0);
        assert_eq!(node.borrow().scale.z, 10.0);
        assert!(!scheduler.is_active(&anim));
        assert_eq!(anim.state(), AnimationState::Stopped);
    }

    #[test]
    fn test_easing_shapes_value() {
        let mut scheduler = Scheduler::new();
        let node = shared_node();
        let anim = Animation::scale(node.clone(), 2.0, 0.0, 8.0, Easing::EaseInCubic).unwrap();
        anim.play(&mut scheduler);

        scheduler.update(1.0);
        // 0.5^3 * 8
        assert!((node.borrow().scale.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_writes_y_only() {
        let mut scheduler = Scheduler::new();
        let node = shared_node();
        let anim = Animation::spin(node.clone(), 4.0, 0.0, Easing::Linear).unwrap();
        anim.play(&mut scheduler);

        scheduler.update(1.0);
        let n = node.borrow();
        assert!((n.rotation.y - TAU / 4.0).abs() < 1e-5);
        assert_eq!(n.rotation.x, 0.0);
        assert_eq!(n.scale, nalgebra_glm::vec3(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_stop_keeps_progress() {
        let mut scheduler = Scheduler::new();
        let anim = Animation::scale(shared_node(), 1.0, 0.0, 1.0, Easing::Linear).unwrap();
        anim.play(&mut scheduler);
        scheduler.update(0.25);

        anim.stop(&mut scheduler);
        assert_eq!(anim.state(), AnimationState::Stopped);
        assert_eq!(anim.progress(), 0.25);

        // Further ticks do not touch a stopped animation
        scheduler.update(0.25);
        assert_eq!(anim.progress(), 0.25);
    }

    #[test]
    fn test_stop_before_play_is_noop() {
        let mut scheduler = Scheduler::new();
        let anim = Animation::scale(shared_node(), 1.0, 0.0, 1.0, Easing::Linear).unwrap();
        anim.stop(&mut scheduler);
        assert_eq!(anim.state(), AnimationState::Idle);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_terminates_within_bound() {
        let mut scheduler = Scheduler::new();
        let duration = 0.5;
        let dt = 1.0 / 60.0;
        let anim = Animation::scale(shared_node(), duration, 1.0, 2.0, Easing::EaseOutQuad).unwrap();
        anim.play(&mut scheduler);

        let bound = (duration / dt).ceil() as usize + 1;
        let mut ticks = 0;
        while scheduler.is_active(&anim) {
            scheduler.update(dt);
            ticks += 1;
            assert!(ticks <= bound, "still running after {ticks} ticks");
        }
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_backward_and_nan_ticks_hold_progress() {
        let mut scheduler = Scheduler::new();
        let node = shared_node();
        let anim = Animation::scale(node.clone(), 1.0, 0.0, 10.0, Easing::Linear).unwrap();
        anim.play(&mut scheduler);

        scheduler.update(0.5);
        scheduler.update(-0.3);
        assert_eq!(anim.progress(), 0.5);
        assert!(anim.is_running());

        scheduler.update(f32::NAN);
        assert_eq!(anim.progress(), 0.5);
        assert!((node.borrow().scale.x - 5.0).abs() < 1e-6);

        scheduler.update(0.5);
        assert_eq!(anim.progress(), 1.0);
        assert!(!scheduler.is_active(&anim));
    }
}
