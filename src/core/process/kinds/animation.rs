//=========================================================================
// Animation Process
//=========================================================================
//
// Plays one action on an animated entity: starts it with a blend on init,
// advances the action clock every frame and poses the skeleton at the new
// time. One-shot actions finish at their length; looping actions wrap.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::entity::AnimatedEntity;
use crate::core::error::ProcessError;
use crate::core::process::{Process, ProcessCommands};

//=== AnimationProcess ====================================================

/// Drives a named action on an [`AnimatedEntity`].
pub struct AnimationProcess<E: AnimatedEntity> {
    entity: Rc<RefCell<E>>,
    action: String,
    length: f32,
    time: f32,
    speed: f32,
    blend_frames: f32,
    looping: bool,
    finished: bool,
    follow_up: Option<Box<dyn Process>>,
}

impl<E: AnimatedEntity> AnimationProcess<E> {
    /// Default blend applied when the action starts.
    pub const DEFAULT_BLEND_FRAMES: f32 = 10.0;

    /// Creates a one-shot animation of `action` at normal speed.
    ///
    /// Fails if the entity has no such action.
    pub fn new(entity: Rc<RefCell<E>>, action: impl Into<String>) -> Result<Self, ProcessError> {
        let action = action.into();
        let length = {
            let entity = entity.borrow();
            if !entity.has_action(&action) {
                warn!("Entity has no action '{}'", action);
                return Err(ProcessError::UnknownAction(action));
            }
            entity
                .action_length(&action)
                .ok_or_else(|| ProcessError::UnknownAction(action.clone()))?
        };

        Ok(Self {
            entity,
            action,
            length: length.max(0.0),
            time: 0.0,
            speed: 1.0,
            blend_frames: Self::DEFAULT_BLEND_FRAMES,
            looping: false,
            finished: false,
            follow_up: None,
        })
    }

    /// Loops the action until the process is removed.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Playback rate; negative values are clamped to zero.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.max(0.0);
        self
    }

    /// Number of frames to blend from the previous action.
    pub fn with_blend_frames(mut self, blend_frames: f32) -> Self {
        self.blend_frames = blend_frames.max(0.0);
        self
    }

    /// Sets the process that takes over once a one-shot action ends.
    pub fn then<P>(mut self, follow_up: P) -> Self
    where
        P: Process + 'static,
    {
        self.follow_up = Some(Box::new(follow_up));
        self
    }

    /// Current position in the action, in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }
}

impl<E: AnimatedEntity> Process for AnimationProcess<E> {
    fn init(&mut self) {
        self.time = 0.0;
        self.finished = false;
        self.entity
            .borrow_mut()
            .play_action(&self.action, self.blend_frames);
    }

    fn update(&mut self, delta: f32, _commands: &mut ProcessCommands) {
        self.time += delta * self.speed;

        if self.time >= self.length {
            if self.looping && self.length > 0.0 {
                self.time %= self.length;
            } else {
                self.time = self.length;
                self.finished = true;
            }
        }

        self.entity
            .borrow_mut()
            .evaluate_action(&self.action, self.time);
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn on_finish(&mut self, canceled: bool) {
        if canceled {
            debug!("Animation '{}' canceled at {:.3}s", self.action, self.time);
            self.entity.borrow_mut().reset_pose();
        }
    }

    fn take_follow_up(&mut self) -> Option<Box<dyn Process>> {
        self.follow_up.take()
    }

    fn name(&self) -> &str {
        &self.action
    }
}

//=== Tests ===============================================================
