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

//! Module to format types that only contain node ids with the information of
//! the network itself, so they are rendered with node names.

use itertools::Itertools;

use crate::{
    network::Network,
    types::{NodeId, RoutingTable},
};

/// Trait to format a type with the knowledge of the network.
pub trait NetworkFormatter {
    /// Return a human-readable representation, using node names of `net`.
    fn fmt(&self, net: &Network) -> String;
}

impl NetworkFormatter for NodeId {
    fn fmt(&self, net: &Network) -> String {
        net.get_name(*self)
            .map(String::from)
            .unwrap_or_else(|_| format!("?{}", self.index()))
    }
}

impl NetworkFormatter for [NodeId] {
    fn fmt(&self, net: &Network) -> String {
        self.iter().map(|r| r.fmt(net)).join(" => ")
    }
}

impl NetworkFormatter for Vec<NodeId> {
    fn fmt(&self, net: &Network) -> String {
        self.as_slice().fmt(net)
    }
}

impl NetworkFormatter for RoutingTable {
    fn fmt(&self, net: &Network) -> String {
        self.iter()
            .sorted_by_key(|(dest, _)| **dest)
            .map(|(dest, (cost, hop))| {
                format!("{}: via {} (cost {})", dest.fmt(net), hop.fmt(net), cost)
            })
            .join("\n")
    }
}
