//! The `DeliverySimulator` and its replay loop.

use delivery_core::{AgentId, DeliveryResult, GridPos, Route, Step};
use rustc_hash::FxHashSet;

use crate::{NoopObserver, Roster, RouteObserver};

/// Replays a delivery route against a round-robin agent roster and records
/// every cell any agent ever occupies.
///
/// Construction is eager: the entire route is replayed before the
/// constructor returns, so every query afterwards is stable.  Each instance
/// owns its roster and visited set exclusively.
///
/// The visited set is an [`FxHashSet`] keyed by [`GridPos`], giving O(1)
/// average-case membership instead of a linear scan per step.  The origin
/// is always a member, even for an empty route, so
/// [`delivery_count`][DeliverySimulator::delivery_count] is always >= 1.
pub struct DeliverySimulator {
    roster: Roster,
    visited: FxHashSet<GridPos>,
    steps_applied: usize,
}

impl DeliverySimulator {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build a simulator from an instruction string and replay it.
    ///
    /// `deliveries` is parsed permissively: characters outside `^>v<` are
    /// no-op steps that still consume a round-robin turn.  `helpers` is the
    /// number of agents beyond the first, so `helpers = 0` means exactly
    /// one agent.
    pub fn new(deliveries: &str, helpers: usize) -> DeliverySimulator {
        Self::from_route(&Route::parse(deliveries), helpers, &mut NoopObserver)
    }

    /// Build a simulator from a pre-parsed route, invoking `observer` after
    /// every step.
    pub fn from_route<O: RouteObserver>(
        route: &Route,
        helpers: usize,
        observer: &mut O,
    ) -> DeliverySimulator {
        let mut sim = DeliverySimulator {
            roster: Roster::new(helpers),
            visited: FxHashSet::default(),
            steps_applied: 0,
        };
        sim.visited.insert(GridPos::ORIGIN); // starting delivery
        sim.replay(route, observer);
        sim
    }

    // ── Replay loop ───────────────────────────────────────────────────────

    fn replay<O: RouteObserver>(&mut self, route: &Route, observer: &mut O) {
        for (step_index, &step) in route.steps().iter().enumerate() {
            let agent = self.roster.agent_for_step(step_index);

            let pos = self.roster.position_mut(agent);
            if let Step::Move(direction) = step {
                *pos = pos.step(direction);
            }
            // Hold steps re-insert the unchanged position; the set makes
            // that a no-op.
            let pos = *pos;
            let newly_visited = self.visited.insert(pos);

            observer.on_step(step_index, agent, pos, newly_visited);
        }
        self.steps_applied = route.len();
        observer.on_route_end(self.steps_applied);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Number of distinct cells visited by any agent, including the origin.
    /// Always >= 1.
    #[inline]
    pub fn delivery_count(&self) -> usize {
        self.visited.len()
    }

    /// The full set of visited cells.
    #[inline]
    pub fn visited(&self) -> &FxHashSet<GridPos> {
        &self.visited
    }

    /// Whether any agent ever occupied `pos`.
    #[inline]
    pub fn was_visited(&self, pos: GridPos) -> bool {
        self.visited.contains(&pos)
    }

    /// The agent roster in its final state.
    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Final position of `agent`, or `AgentNotFound` if out of range.
    pub fn agent_position(&self, agent: AgentId) -> DeliveryResult<GridPos> {
        self.roster.position(agent)
    }

    /// Number of route steps applied (equals the route length, `Hold`s
    /// included).
    #[inline]
    pub fn steps_applied(&self) -> usize {
        self.steps_applied
    }
}
