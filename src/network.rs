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

//! # Top-level Network module
//!
//! This module represents the network topology: the nodes, the links between
//! them, and the connectivity query that gates topology generation.

use std::collections::{HashSet, VecDeque};

use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use serde_with::{As, Same};

use crate::types::{LinkWeight, NetworkError, NodeId, RoutingTable, Tier, Topology};

/// A single node of the network.
///
/// The node id doubles as the index into [`Network::node_ids`] and into the
/// topology graph. The routing table is `None` until the routing engine has
/// run (see [`crate::routing::RoutingEngine`]), and stays populated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    name: String,
    id: NodeId,
    tier: Tier,
    #[serde(with = "As::<Option<Vec<(Same, Same)>>>")]
    pub(crate) routing_table: Option<RoutingTable>,
}

impl Node {
    pub(crate) fn new(name: String, id: NodeId, tier: Tier) -> Self {
        Self {
            name,
            id,
            tier,
            routing_table: None,
        }
    }

    /// Id of the node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tier of the node.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Routing table of the node, or `None` if it was not computed yet.
    pub fn routing_table(&self) -> Option<&RoutingTable> {
        self.routing_table.as_ref()
    }

    /// Total cost and hop entry towards `dest`, if the routing table is
    /// computed and contains the destination.
    pub fn route_to(&self, dest: NodeId) -> Option<(LinkWeight, NodeId)> {
        self.routing_table.as_ref().and_then(|t| t.get(&dest)).copied()
    }
}

/// # Network struct
///
/// The struct contains the topology graph (links and their costs) and all
/// nodes. The graph is the single source of truth for adjacency; nodes store
/// their tier and, once computed, their routing table.
///
/// ```rust
/// use tiersim::prelude::*;
///
/// fn main() -> Result<(), NetworkError> {
///     // create an empty network
///     let mut net = Network::new();
///
///     // add two nodes and connect them
///     let r1 = net.add_node(Tier::Tier1);
///     let r2 = net.add_node(Tier::Tier1);
///     net.add_link(r1, r2, 5);
///
///     assert_eq!(net.link_cost(r1, r2), Some(5));
///     assert_eq!(net.link_cost(r2, r1), Some(5));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    pub(crate) net: Topology,
    pub(crate) nodes: Vec<Node>,
}

impl Network {
    /// Generate an empty network.
    pub fn new() -> Self {
        Self {
            net: Topology::default(),
            nodes: Vec::new(),
        }
    }

    /// Add a new node of the given tier to the topology. The node will be
    /// called `"R{x}"`, where `x` is the new node id. This function returns
    /// the id of the node, which can be used to reference it.
    pub fn add_node(&mut self, tier: Tier) -> NodeId {
        let id = self.net.add_node(());
        self.nodes.push(Node::new(format!("R{}", id.index()), id, tier));
        id
    }

    /// Create an undirected link between `a` and `b` with the given cost. The
    /// cost applies to both directions. If the link does already exist (or if
    /// `a == b`), this function will do nothing, keeping the original cost.
    pub fn add_link(&mut self, a: NodeId, b: NodeId, cost: LinkWeight) {
        if a != b && self.net.find_edge(a, b).is_none() {
            self.net.add_edge(a, b, cost);
        }
    }

    /// Number of nodes in the network.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// All node ids in canonical (creation) order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id())
    }

    /// Get a reference to a node.
    pub fn get_node(&self, id: NodeId) -> Result<&Node, NetworkError> {
        self.nodes
            .get(id.index())
            .ok_or(NetworkError::NodeNotFound(id))
    }

    /// Get the tier of a node.
    pub fn get_tier(&self, id: NodeId) -> Result<Tier, NetworkError> {
        Ok(self.get_node(id)?.tier())
    }

    /// Get the name of a node.
    pub fn get_name(&self, id: NodeId) -> Result<&str, NetworkError> {
        Ok(self.get_node(id)?.name())
    }

    /// All neighbors of a node together with the link costs, sorted by
    /// neighbor id.
    pub fn neighbors(&self, id: NodeId) -> Vec<(NodeId, LinkWeight)> {
        let mut neighbors: Vec<(NodeId, LinkWeight)> = self
            .net
            .edges(id)
            .map(|e| {
                let other = if e.source() == id { e.target() } else { e.source() };
                (other, *e.weight())
            })
            .collect();
        neighbors.sort_by_key(|(n, _)| *n);
        neighbors
    }

    /// Cost of the link between `a` and `b`, if the link exists.
    pub fn link_cost(&self, a: NodeId, b: NodeId) -> Option<LinkWeight> {
        self.net
            .find_edge(a, b)
            .and_then(|e| self.net.edge_weight(e))
            .copied()
    }

    /// Get a reference to the topology graph.
    pub fn get_topology(&self) -> &Topology {
        &self.net
    }

    /// Check if every node of the network can be reached from every other
    /// node. This is done with a breadth-first traversal from the first node
    /// in canonical order, counting the visited nodes. The empty network is
    /// considered connected. This function has no side effects and is
    /// deterministic for a fixed topology.
    pub fn is_connected(&self) -> bool {
        if self.nodes.is_empty() {
            return true;
        }

        let start = self.nodes[0].id();
        let mut visited: HashSet<NodeId> = HashSet::with_capacity(self.nodes.len());
        visited.insert(start);
        let mut queue: VecDeque<NodeId> = VecDeque::from(vec![start]);

        while let Some(r) = queue.pop_front() {
            for x in self.net.neighbors(r) {
                if visited.insert(x) {
                    queue.push_back(x);
                }
            }
        }

        visited.len() == self.nodes.len()
    }
}
