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

//! Module containing all type definitions

use std::collections::HashMap;

use petgraph::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) type IndexType = u32;

/// Node identification (and index into the graph)
pub type NodeId = NodeIndex<IndexType>;

/// Link cost of a single link. Costs are strictly positive by construction.
pub type LinkWeight = u32;

/// Network topology graph. Links are undirected: a single edge carries the
/// cost of both directions.
pub type Topology = Graph<(), LinkWeight, Undirected, IndexType>;

/// Routing table of a single node, mapping every destination to the total
/// path cost and the hop through which the destination was reached. The entry
/// for the node itself is `(0, self)`.
pub type RoutingTable = HashMap<NodeId, (LinkWeight, NodeId)>;

/// Tier of a node. The tier is derived from the node id at creation time and
/// never changes afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Tier {
    /// Core node. Core nodes form a (probabilistic) full mesh.
    Tier1,
    /// Distribution node, connecting the access layer to the core.
    Tier2,
    /// Access node at the edge of the network.
    Tier3,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Tier1 => f.write_str("Tier1"),
            Tier::Tier2 => f.write_str("Tier2"),
            Tier::Tier3 => f.write_str("Tier3"),
        }
    }
}

/// Network Errors
#[derive(Error, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkError {
    /// Node is not present in the topology
    #[error("Network node was not found in topology: {0:?}")]
    NodeNotFound(NodeId),
    /// The routing table of a node was queried before it was computed
    #[error("Routing table of {0:?} has not been computed yet")]
    TableNotComputed(NodeId),
    /// A routing table exists but misses an entry for a node of the network
    #[error("Routing table of {0:?} has no entry for {1:?}")]
    MissingTableEntry(NodeId, NodeId),
    /// A cyclic hop chain was detected while reconstructing a path
    #[error("Forwarding loop occurred! path: {0:?}")]
    ForwardingLoop(Vec<NodeId>),
    /// The generator exhausted the configured number of attempts without
    /// producing a connected topology
    #[error("Could not generate a connected topology in {0} attempts")]
    TopologyGenerationFailed(usize),
}
