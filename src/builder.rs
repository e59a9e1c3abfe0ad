// TierSim: Tiered Topology and Routing Simulator written in Rust
// Copyright (C) 2022-2023 Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Module for generating random tiered topologies, according to parameters.

use log::*;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    network::Network,
    types::{LinkWeight, NetworkError, NodeId, Tier},
};

/// Parameters of the tiered topology generation. [`TopologyConfig::default`]
/// describes a 100-node network with 10 core, 20 distribution, and 70 access
/// nodes.
///
/// All cost ranges are inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Number of Tier1 (core) nodes.
    pub num_core: usize,
    /// Number of Tier2 (distribution) nodes.
    pub num_distribution: usize,
    /// Number of Tier3 (access) nodes.
    pub num_access: usize,
    /// Probability that a pair of core nodes is linked.
    pub mesh_probability: f64,
    /// Cost range of core-to-core links.
    pub core_cost: (LinkWeight, LinkWeight),
    /// Cost range of the links created by distribution nodes.
    pub distribution_cost: (LinkWeight, LinkWeight),
    /// Cost range of the links created by access nodes.
    pub access_cost: (LinkWeight, LinkWeight),
    /// Maximum number of candidate topologies to try before giving up with
    /// [`NetworkError::TopologyGenerationFailed`]. `None` retries until a
    /// connected candidate is found.
    pub max_attempts: Option<usize>,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            num_core: 10,
            num_distribution: 20,
            num_access: 70,
            mesh_probability: 0.75,
            core_cost: (5, 10),
            distribution_cost: (10, 20),
            access_cost: (20, 50),
            max_attempts: None,
        }
    }
}

impl TopologyConfig {
    /// Total number of nodes described by the configuration.
    pub fn num_nodes(&self) -> usize {
        self.num_core + self.num_distribution + self.num_access
    }

    /// Tier of the node with the given creation index. This is a pure
    /// function of the index: the first [`TopologyConfig::num_core`] indices
    /// are [`Tier::Tier1`], the next [`TopologyConfig::num_distribution`] are
    /// [`Tier::Tier2`], and all remaining ones are [`Tier::Tier3`].
    pub fn tier_of(&self, index: usize) -> Tier {
        if index < self.num_core {
            Tier::Tier1
        } else if index < self.num_core + self.num_distribution {
            Tier::Tier2
        } else {
            Tier::Tier3
        }
    }
}

/// Trait for generating random tiered topologies quickly. The following
/// example shows how to generate a connected network:
///
/// ```
/// use tiersim::prelude::*;
///
/// # fn main() -> Result<(), NetworkError> {
/// let net = Network::build_tiered(&TopologyConfig::default())?;
/// assert_eq!(net.num_nodes(), 100);
/// assert!(net.is_connected());
/// # Ok(())
/// # }
/// ```
pub trait TopologyBuilder: Sized {
    /// Generate a connected tiered network using the thread-local RNG.
    /// Candidate topologies are generated and discarded wholesale until one
    /// passes the connectivity check (see
    /// [`TopologyBuilder::build_tiered_seeded`] for the retry semantics).
    fn build_tiered(config: &TopologyConfig) -> Result<Self, NetworkError>;

    /// Generate a connected tiered network using the provided RNG, such that
    /// the result is deterministic for a fixed seed.
    ///
    /// With `config.max_attempts == None`, this function retries until a
    /// candidate passes the connectivity check. Termination then rests on a
    /// probabilistic liveness assumption: with the default link densities,
    /// the chance that every candidate is disconnected forever is negligible.
    /// Set `config.max_attempts` to get a hard failure instead.
    fn build_tiered_seeded<R: RngCore>(
        rng: &mut R,
        config: &TopologyConfig,
    ) -> Result<Self, NetworkError>;

    /// Generate a single candidate topology. This function cannot fail, but
    /// it gives no connectivity guarantee; use
    /// [`TopologyBuilder::build_tiered`] to get a connected network.
    fn build_tiered_candidate<R: RngCore>(rng: &mut R, config: &TopologyConfig) -> Self;
}

impl TopologyBuilder for Network {
    fn build_tiered(config: &TopologyConfig) -> Result<Self, NetworkError> {
        Self::build_tiered_seeded(&mut thread_rng(), config)
    }

    fn build_tiered_seeded<R: RngCore>(
        rng: &mut R,
        config: &TopologyConfig,
    ) -> Result<Self, NetworkError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let net = Self::build_tiered_candidate(rng, config);
            if net.is_connected() {
                debug!("Generated a connected topology after {attempt} attempt(s)");
                return Ok(net);
            }
            debug!("Discarding a disconnected candidate topology (attempt {attempt})");
            if let Some(max) = config.max_attempts {
                if attempt >= max {
                    return Err(NetworkError::TopologyGenerationFailed(max));
                }
            }
        }
    }

    fn build_tiered_candidate<R: RngCore>(rng: &mut R, config: &TopologyConfig) -> Self {
        let mut net = Network::new();
        let ids: Vec<NodeId> = (0..config.num_nodes())
            .map(|i| net.add_node(config.tier_of(i)))
            .collect();
        let core = &ids[..config.num_core];
        let distribution = &ids[config.num_core..config.num_core + config.num_distribution];
        let access = &ids[config.num_core + config.num_distribution..];

        // full mesh between the core nodes, with random holes. Each pair is
        // evaluated once, and the drawn cost applies to both directions.
        for j in 1..core.len() {
            for i in 0..j {
                if rng.gen_bool(config.mesh_probability) {
                    let cost = rng.gen_range(config.core_cost.0..=config.core_cost.1);
                    net.add_link(core[i], core[j], cost);
                }
            }
        }

        // each distribution node attaches to 1-2 core nodes and 2-3
        // distribution nodes, chosen without replacement
        for r in distribution {
            let num_up = rng.gen_range(1..=2);
            let num_peer = rng.gen_range(2..=3);
            let uplinks = core.choose_multiple(rng, num_up);
            let peers = distribution.choose_multiple(rng, num_peer);
            for peer in uplinks.chain(peers) {
                // a node may draw itself as a peer; that selection is dropped
                if peer != r {
                    let cost = rng
                        .gen_range(config.distribution_cost.0..=config.distribution_cost.1);
                    net.add_link(*r, *peer, cost);
                }
            }
        }

        // each access node attaches to exactly 2 distinct distribution nodes
        for r in access {
            for peer in distribution.choose_multiple(rng, 2) {
                let cost = rng.gen_range(config.access_cost.0..=config.access_cost.1);
                net.add_link(*r, *peer, cost);
            }
        }

        net
    }
}
