//! Per-step regime tags.

use mc_core::AgentId;

/// Per-agent regime tags for the current step.
///
/// An agent carries either no tag or exactly one — storage is
/// `Vec<Option<R>>`, so "two tags on one agent" is unrepresentable rather
/// than merely forbidden.  The engine fills every slot in the classify phase
/// and takes each tag back as the owning rule phase processes the agent;
/// between steps every slot is `None`.
pub struct RegimeTags<R> {
    tags: Vec<Option<R>>,
}

impl<R: Copy> RegimeTags<R> {
    /// All-clear tag storage for `count` agents.
    pub fn new(count: usize) -> Self {
        Self { tags: vec![None; count] }
    }

    /// Tag `agent` with `regime`, replacing any tag it already carries.
    #[inline]
    pub fn assign(&mut self, agent: AgentId, regime: R) {
        self.tags[agent.index()] = Some(regime);
    }

    /// Take `agent`'s tag, leaving it untagged.
    #[inline]
    pub fn clear(&mut self, agent: AgentId) -> Option<R> {
        self.tags[agent.index()].take()
    }

    /// `agent`'s current tag, if any.
    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<R> {
        self.tags[agent.index()]
    }

    /// `true` when no agent carries a tag.
    pub fn all_clear(&self) -> bool {
        self.tags.iter().all(|t| t.is_none())
    }

    /// Number of agents the storage covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// `true` if the storage covers no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
