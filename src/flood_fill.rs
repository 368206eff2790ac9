//! 4-connected flood fill over unpainted cells.
//!
//! Breadth-first: a cell is marked with the fill color the moment it is
//! queued, so no cell enters the queue twice, and it is handed to the
//! painter when it leaves the queue. Painted cells are walls. Filling only
//! starts from an unpainted seed; a seed on an outline is a no-op.

use std::collections::VecDeque;

use crate::basics::Point;
use crate::error::{RasterError, Result};
use crate::grid::Grid;
use crate::painter::Painter;

fn check_seed<C>(grid: &Grid<C>, seed: Point) -> Result<()> {
    if grid.in_bounds(seed.x, seed.y) {
        Ok(())
    } else {
        Err(RasterError::OutOfBounds {
            x: seed.x,
            y: seed.y,
            width: grid.width(),
            height: grid.height(),
        })
    }
}

/// Fill the region of unpainted cells 4-connected to `seed` with `color`.
///
/// Returns the number of cells painted (0 when the seed is already
/// painted). A region that is not enclosed spreads to the grid border.
pub fn flood_fill<C, P>(grid: &mut Grid<C>, painter: &mut P, seed: Point, color: C) -> Result<usize>
where
    C: Clone,
    P: Painter<C> + ?Sized,
{
    check_seed(grid, seed)?;
    if !grid.is_unpainted(seed.x, seed.y) {
        log::trace!("flood fill seed ({}, {}) is painted, nothing to do", seed.x, seed.y);
        return Ok(0);
    }

    let mut queue = VecDeque::new();
    grid.set(seed.x, seed.y, color.clone())?;
    queue.push_back(seed);

    let mut count = 0;
    while let Some(node) = queue.pop_front() {
        painter.paint(grid, node.x, node.y)?;
        count += 1;

        for n in node.neighbors4() {
            if grid.is_unpainted(n.x, n.y) {
                grid.set(n.x, n.y, color.clone())?;
                queue.push_back(n);
            }
        }
    }
    Ok(count)
}

/// The cells `flood_fill` would paint from `seed`, in paint order, without
/// modifying the grid.
pub fn fill_region<C>(grid: &Grid<C>, seed: Point) -> Result<Vec<Point>> {
    check_seed(grid, seed)?;
    if !grid.is_unpainted(seed.x, seed.y) {
        return Ok(Vec::new());
    }

    let w = grid.width() as usize;
    let mut seen = vec![false; w * grid.height() as usize];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    seen[seed.y as usize * w + seed.x as usize] = true;
    queue.push_back(seed);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for n in node.neighbors4() {
            if grid.is_unpainted(n.x, n.y) {
                let i = n.y as usize * w + n.x as usize;
                if !seen[i] {
                    seen[i] = true;
                    queue.push_back(n);
                }
            }
        }
    }
    Ok(order)
}

// ============================================================================
// Tests
// ============================================================================
