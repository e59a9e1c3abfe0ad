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

#![deny(missing_docs, missing_debug_implementations)]

//! # TierSim
//!
//! This is a library for generating synthetic, tiered network topologies and
//! computing shortest-path routing tables on them.
//!
//! ## Main Concepts
//!
//! The [`network::Network`] is the main datastructure to operate on. It
//! consists of nodes partitioned into three tiers (core, distribution, and
//! access), connected by undirected links with positive integer costs. The
//! topology is stored on a graph (see
//! [Petgraph](https://docs.rs/petgraph/latest/petgraph/index.html)); nodes
//! are referenced by index.
//!
//! Random topologies are generated with the [`builder::TopologyBuilder`]
//! trait: candidates are generated under tier-specific connection rules and
//! discarded wholesale until one passes the connectivity check of
//! [`network::Network::is_connected`]. Routing is computed as an
//! instantaneous computation by the [`routing::RoutingEngine`] trait: every
//! node gets a full shortest-path routing table, and routes between any two
//! nodes are reconstructed from those tables. No message passing is
//! simulated.
//!
//! ## Example usage
//!
//! ```
//! use tiersim::prelude::*;
//! use rand::prelude::*;
//!
//! fn main() -> Result<(), NetworkError> {
//!     // generate a connected, 100-node tiered topology, reproducibly
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let mut net = Network::build_tiered_seeded(&mut rng, &TopologyConfig::default())?;
//!
//!     // compute the routing table of every node
//!     net.compute_routing_tables();
//!
//!     // reconstruct the cheapest route between two nodes
//!     let (source, dest) = (NodeId::from(3), NodeId::from(42));
//!     let path = net.reconstruct_path(source, dest)?;
//!     assert_eq!(path.first(), Some(&source));
//!     assert_eq!(path.last(), Some(&dest));
//!     println!("{}", path.fmt(&net));
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod formatter;
pub mod network;
pub mod prelude;
pub mod routing;
pub mod types;

#[cfg(test)]
mod test;
