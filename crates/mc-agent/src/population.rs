//! Flat per-agent state storage.

use mc_core::AgentId;

/// All agents' states, indexed by `AgentId`.
///
/// The state vector is `pub` for direct indexing in hot loops and demo
/// summaries (`population.states[agent.index()]`).  The population never
/// grows or shrinks after construction, so the index space is fixed for the
/// whole run and `AgentId`s stay valid throughout.
pub struct Population<S> {
    /// One state per agent; `states[agent.index()]` is that agent's state.
    pub states: Vec<S>,
}

impl<S> Population<S> {
    /// Wrap an initial state vector.  Agent `i` gets `states[i]`.
    pub fn new(states: Vec<S>) -> Self {
        Self { states }
    }

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.states.len() as u32).map(AgentId)
    }

    /// One agent's state.
    #[inline]
    pub fn state(&self, agent: AgentId) -> &S {
        &self.states[agent.index()]
    }

    /// Mutable access to one agent's state.
    #[inline]
    pub fn state_mut(&mut self, agent: AgentId) -> &mut S {
        &mut self.states[agent.index()]
    }
}
