//! Reader for the text layout produced by [`crate::emit`].
//!
//! Only the grammar is checked here. Structural properties (boundary pins,
//! perfect matching, ...) are left to [`crate::validate`].

use std::str::FromStr;

use crate::model::{Gate, Instance, PinRef, Point, Wire};

/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: unexpected line {content:?}")]
    UnexpectedLine { line: usize, content: String },
    #[error("line {line}: bad number {token:?}")]
    BadNumber { line: usize, token: String },
    #[error("line {line}: bad gate reference {token:?}")]
    BadGateRef { line: usize, token: String },
    #[error("line {line}: bad pin reference {token:?}")]
    BadPinRef { line: usize, token: String },
    #[error("line {line}: expected gate g{expected}, found g{found}")]
    GateOutOfOrder {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: gate g{gate} has no pins line")]
    MissingPins { line: usize, gate: usize },
    #[error("line {line}: pins line for g{found} follows header of g{expected}")]
    PinsMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: odd number of pin coordinates")]
    OddCoordinates { line: usize },
    #[error("line {line}: gate declared after wires")]
    GateAfterWires { line: usize },
}

fn parse_number<T: FromStr>(line: usize, token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::BadNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_gate_ref(line: usize, token: &str) -> Result<usize, ParseError> {
    token
        .strip_prefix('g')
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| ParseError::BadGateRef {
            line,
            token: token.to_string(),
        })
}

fn parse_pin_ref(line: usize, token: &str) -> Result<PinRef, ParseError> {
    let bad = || ParseError::BadPinRef {
        line,
        token: token.to_string(),
    };
    let (gate, pin) = token
        .strip_prefix('g')
        .and_then(|rest| rest.split_once(".p"))
        .ok_or_else(bad)?;
    Ok(PinRef {
        gate: gate.parse().map_err(|_| bad())?,
        pin: pin.parse().map_err(|_| bad())?,
    })
}

pub fn parse_instance(text: &str) -> Result<Instance, ParseError> {
    let mut instance = Instance::default();
    // gate header waiting for its pins line
    let mut pending: Option<Gate> = None;
    let mut last_line = 0;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        last_line = line;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let Some(&head) = tokens.first() else {
            continue;
        };
        let unexpected = || ParseError::UnexpectedLine {
            line,
            content: raw.to_string(),
        };

        match head {
            "pins" => {
                let mut gate = pending.take().ok_or_else(unexpected)?;
                let id = parse_gate_ref(line, tokens.get(1).copied().unwrap_or(""))?;
                if id != gate.id {
                    return Err(ParseError::PinsMismatch {
                        line,
                        expected: gate.id,
                        found: id,
                    });
                }
                let coords = tokens[2..]
                    .iter()
                    .map(|t| parse_number::<u32>(line, t))
                    .collect::<Result<Vec<_>, _>>()?;
                if coords.len() % 2 != 0 {
                    return Err(ParseError::OddCoordinates { line });
                }
                gate.pins = coords
                    .chunks_exact(2)
                    .map(|c| Point::new(c[0], c[1]))
                    .collect();
                instance.gates.push(gate);
            }
            "wire" => {
                if let Some(gate) = &pending {
                    return Err(ParseError::MissingPins {
                        line,
                        gate: gate.id,
                    });
                }
                if tokens.len() != 3 {
                    return Err(unexpected());
                }
                instance.wires.push(Wire {
                    from: parse_pin_ref(line, tokens[1])?,
                    to: parse_pin_ref(line, tokens[2])?,
                });
            }
            _ if head.starts_with('g') => {
                if let Some(gate) = &pending {
                    return Err(ParseError::MissingPins {
                        line,
                        gate: gate.id,
                    });
                }
                if !instance.wires.is_empty() {
                    return Err(ParseError::GateAfterWires { line });
                }
                if tokens.len() != 3 {
                    return Err(unexpected());
                }
                let id = parse_gate_ref(line, head)?;
                let expected = instance.gates.len() + 1;
                if id != expected {
                    return Err(ParseError::GateOutOfOrder {
                        line,
                        expected,
                        found: id,
                    });
                }
                pending = Some(Gate {
                    id,
                    width: parse_number(line, tokens[1])?,
                    height: parse_number(line, tokens[2])?,
                    pins: Vec::new(),
                });
            }
            _ => return Err(unexpected()),
        }
    }

    if let Some(gate) = pending {
        return Err(ParseError::MissingPins {
            line: last_line,
            gate: gate.id,
        });
    }
    Ok(instance)
}

impl FromStr for Instance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instance(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "g1 2 1\n\
                        pins g1 0 0 2 1 \n\
                        g2 1 1\n\
                        pins g2 1 0 1 1\n\
                        wire g2.p1 g1.p1\n\
                        wire g2.p2 g1.p2\n";

    #[test]
    fn parses_gates_and_wires() {
        let instance: Instance = TEXT.parse().unwrap();
        assert_eq!(instance.gates.len(), 2);
        assert_eq!(instance.gates[0].width, 2);
        assert_eq!(instance.gates[0].height, 1);
        assert_eq!(
            instance.gates[0].pins,
            vec![Point::new(0, 0), Point::new(2, 1)]
        );
        assert_eq!(instance.wires.len(), 2);
        assert_eq!(instance.wires[1].from, PinRef { gate: 2, pin: 2 });
        assert_eq!(instance.wires[1].to, PinRef { gate: 1, pin: 2 });
    }

    #[test]
    fn round_trips_emitted_text() {
        let instance: Instance = TEXT.parse().unwrap();
        let again: Instance = instance.to_string().parse().unwrap();
        assert_eq!(instance, again);
    }

    #[test]
    fn gate_without_pins() {
        let err = parse_instance("g1 2 2\ng2 1 1\n").unwrap_err();
        assert_eq!(err, ParseError::MissingPins { line: 2, gate: 1 });
        let err = parse_instance("g1 2 2\n").unwrap_err();
        assert_eq!(err, ParseError::MissingPins { line: 1, gate: 1 });
    }

    #[test]
    fn bad_tokens_report_line() {
        assert_eq!(
            parse_instance("g1 2 x\n").unwrap_err(),
            ParseError::BadNumber {
                line: 1,
                token: "x".into()
            }
        );
        assert_eq!(
            parse_instance("g1 1 1\npins g1 0 0\nwire g1.p1 g1p2\n").unwrap_err(),
            ParseError::BadPinRef {
                line: 3,
                token: "g1p2".into()
            }
        );
        assert_eq!(
            parse_instance("g1 1 1\npins g1 0 0 1\n").unwrap_err(),
            ParseError::OddCoordinates { line: 2 }
        );
    }

    #[test]
    fn ordering_errors() {
        assert_eq!(
            parse_instance("g2 1 1\n").unwrap_err(),
            ParseError::GateOutOfOrder {
                line: 1,
                expected: 1,
                found: 2
            }
        );
        assert_eq!(
            parse_instance("g1 1 1\npins g2 0 0\n").unwrap_err(),
            ParseError::PinsMismatch {
                line: 2,
                expected: 1,
                found: 2
            }
        );
        assert_eq!(
            parse_instance("g1 1 1\npins g1 0 0 1 1\nwire g1.p1 g1.p2\ng2 1 1\n").unwrap_err(),
            ParseError::GateAfterWires { line: 4 }
        );
        assert!(matches!(
            parse_instance("pins g1 0 0\n").unwrap_err(),
            ParseError::UnexpectedLine { line: 1, .. }
        ));
    }
}
