use serde::{Deserialize, Serialize};

/// Pin coordinate relative to the gate's lower-left corner.
///
/// Ordering is lexicographic on `(x, y)`, which is also the order pins are
/// numbered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A rectangular block with its boundary pins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    pub id: usize, // 1-based
    pub width: u32,
    pub height: u32,
    pub pins: Vec<Point>, // ascending (x, y), pin k is pins[k - 1]
}

impl Gate {
    /// Pin by its 1-based sequence number.
    pub fn pin(&self, seq: usize) -> Option<Point> {
        seq.checked_sub(1).and_then(|i| self.pins.get(i)).copied()
    }

    pub fn on_boundary(&self, p: Point) -> bool {
        let inside = p.x <= self.width && p.y <= self.height;
        let on_edge = p.x == 0 || p.y == 0 || p.x == self.width || p.y == self.height;
        inside && on_edge
    }
}

/// One end of a wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PinRef {
    pub gate: usize, // 1-based gate id
    pub pin: usize,  // 1-based sequence number within the gate
}

/// Unordered pin-to-pin connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    pub from: PinRef,
    pub to: PinRef,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub gates: Vec<Gate>,
    pub wires: Vec<Wire>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub gates: usize,
    pub pins: usize,
    pub wires: usize,
}

impl Instance {
    pub fn total_pins(&self) -> usize {
        self.gates.iter().map(|g| g.pins.len()).sum()
    }

    pub fn pin_counts(&self) -> Vec<usize> {
        self.gates.iter().map(|g| g.pins.len()).collect()
    }

    pub fn gate(&self, id: usize) -> Option<&Gate> {
        id.checked_sub(1).and_then(|i| self.gates.get(i))
    }

    pub fn summary(&self) -> Summary {
        Summary {
            gates: self.gates.len(),
            pins: self.total_pins(),
            wires: self.wires.len(),
        }
    }
}
