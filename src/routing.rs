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

//! This module contains the routing engine. It computes the converged routing
//! state of the network: one shortest-path routing table per node, usable to
//! reconstruct the route between any two nodes. No message passing is
//! simulated; the final state is computed using shortest path algorithms.

use std::collections::{HashMap, HashSet};

use petgraph::visit::EdgeRef;
use rayon::prelude::*;

use crate::{
    network::Network,
    types::{NetworkError, NodeId, RoutingTable, Topology},
};

/// Trait exposing the routing computation on a [`Network`].
///
/// ```
/// use tiersim::prelude::*;
///
/// # fn main() -> Result<(), NetworkError> {
/// let mut net = Network::new();
/// let r0 = net.add_node(Tier::Tier1);
/// let r1 = net.add_node(Tier::Tier1);
/// let r2 = net.add_node(Tier::Tier2);
/// net.add_link(r0, r1, 5);
/// net.add_link(r1, r2, 5);
/// net.add_link(r0, r2, 20);
///
/// net.compute_routing_tables();
/// assert_eq!(net.reconstruct_path(r0, r2)?, vec![r0, r1, r2]);
/// assert_eq!(net.get_node(r0)?.route_to(r2), Some((10, r1)));
/// # Ok(())
/// # }
/// ```
pub trait RoutingEngine {
    /// Compute the routing table of every node, replacing any previously
    /// computed tables. Recomputing on an unchanged network yields identical
    /// tables.
    ///
    /// The network must be connected. This precondition is the caller's
    /// contract and is not re-verified here (only a debug assertion); on a
    /// disconnected network, unreachable destinations end up missing from the
    /// tables.
    fn compute_routing_tables(&mut self);

    /// Reconstruct the route from `source` to `dest` (both inclusive) from
    /// the routing table of `source`. If `source == dest`, the path is the
    /// single-element sequence `[source]`.
    ///
    /// The backward walk through the hop entries is bounded by the node
    /// count: a corrupted table with a cyclic hop chain yields
    /// [`NetworkError::ForwardingLoop`] instead of looping forever.
    fn reconstruct_path(&self, source: NodeId, dest: NodeId)
        -> Result<Vec<NodeId>, NetworkError>;
}

impl RoutingEngine for Network {
    fn compute_routing_tables(&mut self) {
        debug_assert!(
            self.is_connected(),
            "routing tables must be computed on a connected network"
        );

        // one independent single-source computation per node. The topology is
        // only read, and every table is written by exactly one task, so the
        // sources are processed in parallel.
        let sources: Vec<NodeId> = self.node_ids().collect();
        let g = &self.net;
        let tables: Vec<(NodeId, RoutingTable)> = sources
            .into_par_iter()
            .map(|source| (source, shortest_path_tree(g, source)))
            .collect();

        for (source, table) in tables {
            self.nodes[source.index()].routing_table = Some(table);
        }
    }

    fn reconstruct_path(
        &self,
        source: NodeId,
        dest: NodeId,
    ) -> Result<Vec<NodeId>, NetworkError> {
        let table = self
            .get_node(source)?
            .routing_table()
            .ok_or(NetworkError::TableNotComputed(source))?;
        self.get_node(dest)?;

        let mut path = vec![dest];
        let mut current = dest;
        while current != source {
            if path.len() > self.num_nodes() {
                path.reverse();
                return Err(NetworkError::ForwardingLoop(path));
            }
            let (_, hop) = table
                .get(&current)
                .copied()
                .ok_or(NetworkError::MissingTableEntry(source, current))?;
            path.push(hop);
            current = hop;
        }
        path.reverse();
        Ok(path)
    }
}

/// Compute the single-source shortest-path table for `source` with Dijkstra's
/// algorithm. Ties between unsettled nodes of equal cost break on the lower
/// node id, so repeated runs produce identical tables. Nodes that are
/// unreachable from `source` keep no table entry.
fn shortest_path_tree(g: &Topology, source: NodeId) -> RoutingTable {
    let mut table: RoutingTable = HashMap::with_capacity(g.node_count());
    table.insert(source, (0, source));

    let mut unsettled: HashSet<NodeId> = g.node_indices().collect();
    while !unsettled.is_empty() {
        // settle the cheapest node that was already reached
        let next = unsettled
            .iter()
            .filter_map(|r| table.get(r).map(|(cost, _)| (*cost, *r)))
            .min();
        let (cost, current) = match next {
            Some(x) => x,
            None => break,
        };
        unsettled.remove(&current);

        for e in g.edges(current) {
            let neighbor = if e.source() == current { e.target() } else { e.source() };
            let challenger = cost + *e.weight();
            match table.get(&neighbor) {
                Some((best, _)) if *best <= challenger => {}
                _ => {
                    table.insert(neighbor, (challenger, current));
                }
            }
        }
    }

    table
}
