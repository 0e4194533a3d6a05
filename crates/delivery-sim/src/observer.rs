//! Replay observer trait for step-by-step inspection.

use delivery_core::{AgentId, GridPos};

/// Callbacks invoked by the simulator as it replays a route.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl RouteObserver for StepPrinter {
///     fn on_step(&mut self, i: usize, agent: AgentId, pos: GridPos, newly_visited: bool) {
///         println!("step {i}: {agent} at {pos} (new: {newly_visited})");
///     }
/// }
/// ```
pub trait RouteObserver {
    /// Called after each step is applied.
    ///
    /// `pos` is the selected agent's position after the step (unchanged for
    /// `Hold` steps); `newly_visited` is `true` iff this step added `pos`
    /// to the visited set.
    fn on_step(&mut self, _step_index: usize, _agent: AgentId, _pos: GridPos, _newly_visited: bool) {
    }

    /// Called once after the final step, with the total number of steps
    /// applied.
    fn on_route_end(&mut self, _steps_applied: usize) {}
}

/// A [`RouteObserver`] that does nothing.  Use when you need to build a
/// simulator from a pre-parsed route but don't want step callbacks.
pub struct NoopObserver;

impl RouteObserver for NoopObserver {}
