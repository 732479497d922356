/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use crate::Coord2D;

/// Obstacle-aware Manhattan distance.
///
/// Returns the plain Manhattan distance when a right-angle path of exactly
/// that length exists through non-blocked cells, and a small fixed overhead
/// otherwise:
///
/// - `+0`: a monotone path exists and is a forced single corridor (or the
///   endpoints are axis-aligned with a free lane),
/// - `+1`: a monotone path with a single bend exists (all the way along one
///   axis, then the other),
/// - `+2`: a monotone path exists that keeps one full straight segment and
///   needs one perpendicular jog,
/// - `+3`: a monotone path exists but needs more direction changes,
/// - `+4`: no monotone path exists at all and the agent has to back out of
///   the bounding rectangle.
///
/// This is an approximation that picks among a fixed set of overhead values
/// instead of running full pathfinding; it trades precision for the speed a
/// heuristic needs.
pub fn smart_manhattan_distance(start: Coord2D, destination: Coord2D, blocks: &[Coord2D]) -> u32 {
    if start == destination {
        return 0;
    }

    let base = start.manhattan_dist(destination);

    // Restrict the analysis to the bounding rectangle of the two endpoints.
    let lo = start.min_per_comp(destination);
    let hi = start.max_per_comp(destination);
    let width = (hi.x - lo.x + 1) as usize;
    let height = (hi.y - lo.y + 1) as usize;

    // Canonical orientation: translate the rectangle to the origin, and for
    // the "\" diagonal flip x so that the sweep always runs from (0, 0) to
    // (width-1, height-1). This collapses the four quadrant orientations
    // into a single configuration.
    let dx = destination.x - start.x;
    let dy = destination.y - start.y;
    let backslash = dx != 0 && dy != 0 && (dx > 0) != (dy > 0);
    let normalize = |c: Coord2D| -> (usize, usize) {
        let x = (c.x - lo.x) as usize;
        let y = (c.y - lo.y) as usize;
        if backslash {
            (width - 1 - x, y)
        } else {
            (x, y)
        }
    };

    // Binary occupancy grid over the rectangle.
    let mut grid = vec![vec![false; width]; height];
    for block in blocks {
        if block.x < lo.x || block.x > hi.x || block.y < lo.y || block.y > hi.y {
            continue;
        }
        let (x, y) = normalize(*block);
        grid[y][x] = true;
    }

    // Row-by-row monotone reachability: row 0 starts with the maximal open
    // run from column 0; every later row seeds from the columns reachable in
    // the row below and extends each run rightwards through open cells.
    let mut reach: Vec<Vec<usize>> = Vec::with_capacity(height);
    let mut first_row = Vec::new();
    for (x, &blocked) in grid[0].iter().enumerate() {
        if blocked {
            break;
        }
        first_row.push(x);
    }
    reach.push(first_row);

    for y in 1..height {
        let mut row_reach = vec![false; width];
        for &seed in &reach[y - 1] {
            if grid[y][seed] {
                continue;
            }
            let mut x = seed;
            while x < width && !grid[y][x] && !row_reach[x] {
                row_reach[x] = true;
                x += 1;
            }
        }
        let columns: Vec<usize> = row_reach
            .iter()
            .enumerate()
            .filter_map(|(x, &reachable)| reachable.then_some(x))
            .collect();
        if columns.is_empty() {
            // No axis-monotone path: the agent must leave the rectangle and
            // come back, which costs two extra steps and two extra turns.
            return base + 4;
        }
        reach.push(columns);
    }

    let last_row = &reach[height - 1];
    if !last_row.contains(&(width - 1)) {
        return base + 4;
    }

    // A monotone path exists; classify the shape of the reachable column
    // sets to assign the turn overhead.
    if reach.len() == 1 || reach.iter().all(|columns| columns.len() == 1) {
        // single row, or a forced corridor with no freedom at all
        return base;
    }
    if reach[0].len() == width && reach.iter().all(|columns| columns.contains(&(width - 1))) {
        // all the way along x first, then straight along y
        return base + 1;
    }
    if last_row.len() == width && reach.iter().all(|columns| columns.contains(&0)) {
        // straight along y first, then all the way along x
        return base + 1;
    }
    if reach.iter().any(|columns| columns.len() == width)
        || (0..width).any(|x| reach.iter().all(|columns| columns.contains(&x)))
    {
        // two straight segments joined by one perpendicular jog
        return base + 2;
    }
    base + 3
}
