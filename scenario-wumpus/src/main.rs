/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::io::Write;
use std::{env, fs};

use wumpus_search_core::{
    astar, breadth_first, heuristics, iterative_deepening, uniform_cost, Problem, SearchResult,
    SearchStats, WorldSnapshot,
};

const CLASSIC_WORLD: &str = r#"
    {
        "id": "classic wumpus world",
        "size": [7, 7],
        "hunters": [[0, 0]],
        "pits": [[4, 0], [3, 1], [2, 2], [6, 2], [4, 4], [3, 5], [4, 6], [5, 6]],
        "wumpuses": [[1, 2]],
        "exits": [[0, 0]],
        "golds": [[6, 3]],
        "blocks": []
    }
"#;

fn report(name: &str, problem: &Problem, result: &SearchResult, stats: &SearchStats) {
    if result.is_empty() {
        log::info!("{name}: no path ({} nodes expanded)", stats.expanded);
        return;
    }
    let (cost, reward) = problem.replay(&result.actions);
    let plan = result
        .actions
        .iter()
        .map(|action| action.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    log::info!(
        "{name}: {} actions, cost {cost}, reward {reward}, total {}, {} nodes expanded",
        result.actions.len(),
        result.total_reward,
        stats.expanded
    );
    log::info!("{name}: plan: {plan}");
}

fn main() {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = env::args().skip(1);
    let algorithm = args.next().unwrap_or_else(|| "all".to_owned());
    let world = match args.next() {
        Some(path) => fs::read_to_string(&path).expect("cannot read the world file"),
        None => CLASSIC_WORLD.to_owned(),
    };
    let snapshot: WorldSnapshot = serde_json::from_str(&world).expect("malformed world file");
    log::info!(
        "world '{}', {} x {} grid",
        snapshot.id,
        snapshot.size.0,
        snapshot.size.1
    );

    let problem = Problem::from_snapshot(&snapshot, heuristics::smart_manhattan);
    match algorithm.as_str() {
        "astar" => {
            let (result, stats) = astar(&problem);
            report("astar", &problem, &result, &stats);
        }
        "ucs" => {
            let (result, stats) = uniform_cost(&problem);
            report("ucs", &problem, &result, &stats);
        }
        "bfs" => {
            let (result, stats) = breadth_first(&problem);
            report("bfs", &problem, &result, &stats);
        }
        // exponential in solution depth, only sensible on small worlds
        "ids" => {
            let (result, stats) = iterative_deepening(&problem);
            report("ids", &problem, &result, &stats);
        }
        "all" => {
            let (result, stats) = astar(&problem);
            report("astar", &problem, &result, &stats);
            let (result, stats) = uniform_cost(&problem);
            report("ucs", &problem, &result, &stats);
            let (result, stats) = breadth_first(&problem);
            report("bfs", &problem, &result, &stats);
        }
        other => {
            eprintln!("unknown algorithm '{other}', expected astar, ucs, bfs, ids or all");
            std::process::exit(1);
        }
    }
}
