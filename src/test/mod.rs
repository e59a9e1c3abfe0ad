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

use crate::prelude::*;

mod test_network;

/// Four-node network where the direct link from R0 to R2 is more expensive
/// than the detour over R1.
///
/// ```text
/// R0 --5-- R1 --5-- R2 --1-- R3
///  \______20_______/
/// ```
fn shortcut_net() -> (Network, Vec<NodeId>) {
    let mut net = Network::new();
    let n: Vec<NodeId> = (0..4).map(|_| net.add_node(Tier::Tier1)).collect();
    net.add_link(n[0], n[1], 5);
    net.add_link(n[1], n[2], 5);
    net.add_link(n[0], n[2], 20);
    net.add_link(n[2], n[3], 1);
    (net, n)
}
