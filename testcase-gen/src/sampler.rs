//! Random gates with boundary pins.
//!
//! Per gate the draw order is: height, width, the seed pin (edge then
//! coordinate), the edge cap, then the four edges in [`Edge::ALL`] order.
//! Keeping that order fixed is what makes a seeded run reproducible.

use std::collections::BTreeSet;

use rand::Rng;

use crate::config::GeneratorConfig;
use crate::model::{Gate, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// `x = 0`
    Left,
    /// `y = 0`
    Bottom,
    /// `x = width`
    Right,
    /// `y = height`
    Top,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Bottom, Edge::Right, Edge::Top];

    /// Number of distinct integer positions on this edge, corners included.
    pub fn positions(self, width: u32, height: u32) -> usize {
        match self {
            Edge::Left | Edge::Right => height as usize + 1,
            Edge::Bottom | Edge::Top => width as usize + 1,
        }
    }

    pub fn contains(self, p: Point, width: u32, height: u32) -> bool {
        match self {
            Edge::Left => p.x == 0 && p.y <= height,
            Edge::Bottom => p.y == 0 && p.x <= width,
            Edge::Right => p.x == width && p.y <= height,
            Edge::Top => p.y == height && p.x <= width,
        }
    }

    pub fn random_point<R: Rng + ?Sized>(self, rng: &mut R, width: u32, height: u32) -> Point {
        match self {
            Edge::Left => Point::new(0, rng.gen_range(0..=height)),
            Edge::Bottom => Point::new(rng.gen_range(0..=width), 0),
            Edge::Right => Point::new(width, rng.gen_range(0..=height)),
            Edge::Top => Point::new(rng.gen_range(0..=width), height),
        }
    }
}

/// Draws `1..=max_gates` gates, numbered from 1.
pub fn sample_gates<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Vec<Gate> {
    let num_gates = rng.gen_range(1..=config.max_gates) as usize;
    (1..=num_gates)
        .map(|id| sample_gate(rng, id, config))
        .collect()
}

pub fn sample_gate<R: Rng + ?Sized>(rng: &mut R, id: usize, config: &GeneratorConfig) -> Gate {
    let height = rng.gen_range(1..=config.max_gate_height);
    let width = rng.gen_range(1..=config.max_gate_width);

    let mut pins = BTreeSet::new();
    let seed_edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    pins.insert(seed_edge.random_point(rng, width, height));

    // One cap per gate, bounded by the smaller side regardless of which edge
    // is being filled.
    let cap = width
        .min(height)
        .min(rng.gen_range(1..=config.max_pins_per_edge));

    for edge in Edge::ALL {
        let budget = rng.gen_range(0..cap) as usize;
        fill_edge(rng, &mut pins, edge, width, height, budget);
    }

    Gate {
        id,
        width,
        height,
        pins: pins.into_iter().collect(),
    }
}

/// Adds up to `budget` new pins on `edge`, redrawing duplicates.
///
/// The budget is clamped to the positions still free on the edge: the seed
/// pin and corners placed by earlier edges can leave fewer than requested,
/// even with the default bounds. Returns the number of pins added.
pub fn fill_edge<R: Rng + ?Sized>(
    rng: &mut R,
    pins: &mut BTreeSet<Point>,
    edge: Edge,
    width: u32,
    height: u32,
    budget: usize,
) -> usize {
    let occupied = pins
        .iter()
        .filter(|&&p| edge.contains(p, width, height))
        .count();
    let budget = budget.min(edge.positions(width, height) - occupied);

    let mut added = 0;
    while added < budget {
        if pins.insert(edge.random_point(rng, width, height)) {
            added += 1;
        }
    }
    added
}
