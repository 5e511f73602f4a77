//=========================================================================
// Animated Entity
//=========================================================================
//
// Boundary between game logic and the scene graph's skinned entities.
//
// Rendering, mesh/skeleton binding and blending math are owned by the
// scene graph. Processes only need to start an action, advance it and
// put the skeleton back in its start pose, which is what this trait
// exposes.
//
//=========================================================================

/// A scene entity with a skeleton and named actions.
///
/// Implemented by the rendering backend; [`AnimationProcess`] drives it
/// once per frame.
///
/// [`AnimationProcess`]: crate::core::process::kinds::AnimationProcess
pub trait AnimatedEntity {
    /// Returns true if the skeleton has an action with this name.
    fn has_action(&self, action: &str) -> bool;

    /// Length of the action in seconds, if it exists.
    fn action_length(&self, action: &str) -> Option<f32>;

    /// Makes `action` the active action, blending over `blend_frames`.
    fn play_action(&mut self, action: &str, blend_frames: f32);

    /// Poses the skeleton at `time` seconds into `action`.
    fn evaluate_action(&mut self, action: &str, time: f32);

    /// Returns the skeleton to its start pose.
    fn reset_pose(&mut self) {}
}
