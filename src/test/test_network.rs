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
use pretty_assertions::assert_eq;
use rand::prelude::*;

#[test]
fn link_symmetry() {
    let mut net = Network::new();
    let a = net.add_node(Tier::Tier1);
    let b = net.add_node(Tier::Tier1);
    net.add_link(a, b, 7);

    assert_eq!(net.neighbors(a), vec![(b, 7)]);
    assert_eq!(net.neighbors(b), vec![(a, 7)]);
    assert_eq!(net.link_cost(a, b), Some(7));
    assert_eq!(net.link_cost(b, a), Some(7));

    // re-adding an existing link keeps the original cost
    net.add_link(b, a, 9);
    assert_eq!(net.link_cost(a, b), Some(7));

    // self links are ignored
    net.add_link(a, a, 3);
    assert_eq!(net.neighbors(a), vec![(b, 7)]);
}

#[test]
fn connectivity_check() {
    let mut net = Network::new();
    assert!(net.is_connected());

    let n: Vec<NodeId> = (0..4).map(|_| net.add_node(Tier::Tier3)).collect();
    assert!(!net.is_connected());

    net.add_link(n[0], n[1], 1);
    net.add_link(n[1], n[2], 1);
    // n3 is still isolated
    assert!(!net.is_connected());

    net.add_link(n[2], n[3], 1);
    assert!(net.is_connected());
}

#[test]
fn tier_boundaries() {
    let c = TopologyConfig::default();
    assert_eq!(c.tier_of(0), Tier::Tier1);
    assert_eq!(c.tier_of(9), Tier::Tier1);
    assert_eq!(c.tier_of(10), Tier::Tier2);
    assert_eq!(c.tier_of(29), Tier::Tier2);
    assert_eq!(c.tier_of(30), Tier::Tier3);
    assert_eq!(c.tier_of(99), Tier::Tier3);
}

#[test]
fn node_accessors() {
    let mut net = Network::new();
    let a = net.add_node(Tier::Tier2);
    assert_eq!(net.num_nodes(), 1);
    assert_eq!(net.get_name(a).unwrap(), "R0");
    assert_eq!(net.get_tier(a).unwrap(), Tier::Tier2);
    assert_eq!(net.get_node(a).unwrap().id(), a);

    let missing = NodeId::from(7);
    assert_eq!(
        net.get_node(missing).unwrap_err(),
        NetworkError::NodeNotFound(missing)
    );
}

#[test]
fn format_paths_and_tables() {
    let (mut net, n) = super::shortcut_net();
    assert_eq!(vec![n[0], n[1], n[3]].fmt(&net), "R0 => R1 => R3");
    assert_eq!(NodeId::from(9).fmt(&net), "?9");

    net.compute_routing_tables();
    let table = net.get_node(n[3]).unwrap().routing_table().unwrap();
    assert_eq!(
        table.fmt(&net),
        "R0: via R1 (cost 11)\nR1: via R2 (cost 6)\nR2: via R3 (cost 1)\nR3: via R3 (cost 0)"
    );
}

#[test]
fn save_restore() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut net = Network::build_tiered_seeded(&mut rng, &TopologyConfig::default()).unwrap();
    net.compute_routing_tables();

    let json = serde_json::to_string(&net).unwrap();
    let restored: Network = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.num_nodes(), net.num_nodes());
    for r in net.node_ids() {
        assert_eq!(restored.neighbors(r), net.neighbors(r));
        assert_eq!(restored.get_tier(r).unwrap(), net.get_tier(r).unwrap());
        assert_eq!(
            restored.get_node(r).unwrap().routing_table(),
            net.get_node(r).unwrap().routing_table()
        );
    }
}
