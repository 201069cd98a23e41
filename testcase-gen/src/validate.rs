use std::collections::HashSet;

use crate::matcher::{self, Rejection};
use crate::model::{Instance, PinRef};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Violation {
    #[error("gate at position {index} has id g{id}")]
    GateIdMismatch { index: usize, id: usize },
    #[error("gate g{gate} has a zero dimension")]
    Degenerate { gate: usize },
    #[error("gate g{gate} has no pins")]
    EmptyGate { gate: usize },
    #[error("gate g{gate} lists pin ({x}, {y}) more than once")]
    DuplicatePin { gate: usize, x: u32, y: u32 },
    #[error("gate g{gate} pins are not in ascending (x, y) order")]
    PinsUnordered { gate: usize },
    #[error("gate g{gate} pin ({x}, {y}) is not on the boundary")]
    PinOffBoundary { gate: usize, x: u32, y: u32 },
    #[error(transparent)]
    Infeasible(#[from] Rejection),
    #[error("{wires} wires for {pins} pins")]
    WireCount { wires: usize, pins: usize },
    #[error("wire {wire} refers to missing pin {pin}")]
    DanglingPin { wire: usize, pin: PinRef },
    #[error("pin {pin} used by more than one wire")]
    PinReused { pin: PinRef },
    #[error("pin {pin} is not wired")]
    PinUnused { pin: PinRef },
}

/// Checks every structural property an accepted instance must have.
///
/// Returns the first violation found, gates before wires.
pub fn validate(instance: &Instance) -> Result<(), Violation> {
    for (index, gate) in instance.gates.iter().enumerate() {
        if gate.id != index + 1 {
            return Err(Violation::GateIdMismatch {
                index: index + 1,
                id: gate.id,
            });
        }
        if gate.width == 0 || gate.height == 0 {
            return Err(Violation::Degenerate { gate: gate.id });
        }
        if gate.pins.is_empty() {
            return Err(Violation::EmptyGate { gate: gate.id });
        }
        let mut seen = HashSet::new();
        for &p in &gate.pins {
            if !seen.insert(p) {
                return Err(Violation::DuplicatePin {
                    gate: gate.id,
                    x: p.x,
                    y: p.y,
                });
            }
            if !gate.on_boundary(p) {
                return Err(Violation::PinOffBoundary {
                    gate: gate.id,
                    x: p.x,
                    y: p.y,
                });
            }
        }
        if gate.pins.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Violation::PinsUnordered { gate: gate.id });
        }
    }

    let total = matcher::check_feasibility(&instance.pin_counts())?;
    if instance.wires.len() * 2 != total {
        return Err(Violation::WireCount {
            wires: instance.wires.len(),
            pins: total,
        });
    }

    let mut used = HashSet::with_capacity(total);
    for (i, wire) in instance.wires.iter().enumerate() {
        for pin in [wire.from, wire.to] {
            let exists = instance
                .gate(pin.gate)
                .and_then(|g| g.pin(pin.pin))
                .is_some();
            if !exists {
                return Err(Violation::DanglingPin { wire: i + 1, pin });
            }
            if !used.insert(pin) {
                return Err(Violation::PinReused { pin });
            }
        }
    }
    // wire count matches and no pin repeats, so this only fires on bugs above
    for gate in &instance.gates {
        for seq in 1..=gate.pins.len() {
            let pin = PinRef { gate: gate.id, pin: seq };
            if !used.contains(&pin) {
                return Err(Violation::PinUnused { pin });
            }
        }
    }
    Ok(())
}

impl Instance {
    pub fn validate(&self) -> Result<(), Violation> {
        validate(self)
    }
}
