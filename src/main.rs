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

use clap::Parser;
use rand::prelude::*;

use tiersim::prelude::*;

/// Generate a random tiered topology, compute all routing tables, and print
/// the cheapest route between two nodes.
#[derive(Debug, Parser)]
struct Cli {
    /// Id of the source node.
    source: u32,
    /// Id of the destination node.
    dest: u32,
    /// Seed of the topology generation. A fixed seed reproduces the topology.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Maximum number of candidate topologies to try before giving up.
    #[clap(long, short)]
    attempts: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_timed();

    let args = Cli::parse();
    let config = TopologyConfig {
        max_attempts: args.attempts,
        ..Default::default()
    };

    let mut net = match args.seed {
        Some(seed) => Network::build_tiered_seeded(&mut StdRng::seed_from_u64(seed), &config)?,
        None => Network::build_tiered(&config)?,
    };
    net.compute_routing_tables();

    let (source, dest) = (NodeId::from(args.source), NodeId::from(args.dest));
    let path = net.reconstruct_path(source, dest)?;
    let (cost, _) = net
        .get_node(source)?
        .route_to(dest)
        .ok_or(NetworkError::MissingTableEntry(source, dest))?;

    println!(
        "Path from {} ({}) to {} ({}): {} (cost {})",
        source.fmt(&net),
        net.get_tier(source)?,
        dest.fmt(&net),
        net.get_tier(dest)?,
        path.fmt(&net),
        cost,
    );

    Ok(())
}
