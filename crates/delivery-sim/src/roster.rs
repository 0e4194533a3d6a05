//! The agent roster: per-agent positions and round-robin selection.

use delivery_core::{AgentId, DeliveryError, DeliveryResult, GridPos};

/// The positions of all agents in one simulation.
///
/// Agent 0 is the original delivery resource; agents `1..=helpers` are the
/// additional helpers.  All agents start at [`GridPos::ORIGIN`] and are
/// mutated in place as steps are applied.
///
/// Round-robin selection is a modulo cursor over the roster rather than an
/// infinite cycling iterator: step `i` always goes to agent
/// `i mod roster_len`, which makes the assignment queryable without any
/// iterator state.
#[derive(Clone, Debug)]
pub struct Roster {
    positions: Vec<GridPos>,
}

impl Roster {
    /// Create a roster of `helpers + 1` agents, all at the origin.
    pub fn new(helpers: usize) -> Roster {
        Roster {
            positions: vec![GridPos::ORIGIN; helpers + 1],
        }
    }

    /// Number of agents.  Always >= 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A roster is never empty; this exists to satisfy the `len`/`is_empty`
    /// pairing convention.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The agent that step `step_index` is assigned to.
    #[inline]
    pub fn agent_for_step(&self, step_index: usize) -> AgentId {
        AgentId((step_index % self.positions.len()) as u32)
    }

    /// Current position of `agent`, or `AgentNotFound` if out of range.
    pub fn position(&self, agent: AgentId) -> DeliveryResult<GridPos> {
        self.positions
            .get(agent.index())
            .copied()
            .ok_or(DeliveryError::AgentNotFound(agent))
    }

    /// All agent positions, indexed by `AgentId`.
    #[inline]
    pub fn positions(&self) -> &[GridPos] {
        &self.positions
    }

    /// Mutable access for the replay loop.  `agent` must be in range;
    /// callers obtain IDs from [`agent_for_step`][Roster::agent_for_step].
    #[inline]
    pub(crate) fn position_mut(&mut self, agent: AgentId) -> &mut GridPos {
        &mut self.positions[agent.index()]
    }
}
