//! Plain data row types written by output backends.

use boid_agent::AgentStore;
use boid_core::{AgentId, Frame};
use boid_sim::FrameStats;

/// One agent's transform at a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub frame:    u64,
    /// `0` for agents outside every simulated group.
    pub group:    u16,
    pub position: [f32; 3],
    pub forward:  [f32; 3],
}

impl AgentSnapshotRow {
    pub fn capture(agents: &AgentStore, agent: AgentId, frame: Frame) -> Self {
        let t = agents.transform(agent);
        Self {
            agent_id: agent.0,
            frame:    frame.0,
            group:    agents.group[agent.index()].0,
            position: t.position.to_array(),
            forward:  t.forward().to_array(),
        }
    }
}

/// Summary statistics for one simulated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame:            u64,
    pub delta_secs:       f32,
    pub agents:           u64,
    pub groups_simulated: u64,
    pub pass_through:     u64,
}

impl From<&FrameStats> for FrameSummaryRow {
    fn from(stats: &FrameStats) -> Self {
        Self {
            frame:            stats.frame.0,
            delta_secs:       stats.delta_secs,
            agents:           stats.agents as u64,
            groups_simulated: stats.groups_simulated as u64,
            pass_through:     stats.pass_through as u64,
        }
    }
}
