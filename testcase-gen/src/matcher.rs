//! Feasibility check and greedy pin pairing.
//!
//! Pairing always joins the gate with the most remaining pins to the gate with
//! the fewest. With an even total and no gate above `total / 2` that property
//! survives every step, so the loop never strands pins on a single gate.

use std::collections::BTreeSet;

use crate::model::{PinRef, Wire};

/// Why a sampled instance was thrown away. Both cases just trigger a resample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("odd total pin count {total}")]
    Parity { total: usize },
    #[error("gate g{gate} holds {pins} of {total} pins")]
    DominantGate {
        gate: usize,
        pins: usize,
        total: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("gate g{gate} left with {remaining} unpaired pins")]
    Stranded { gate: usize, remaining: usize },
}

/// Returns the total pin count if `counts` can be perfectly matched.
///
/// `counts[i]` is the pin count of gate `i + 1`.
pub fn check_feasibility(counts: &[usize]) -> Result<usize, Rejection> {
    let total: usize = counts.iter().sum();
    if total % 2 != 0 {
        return Err(Rejection::Parity { total });
    }
    if let Some((idx, &pins)) = counts.iter().enumerate().max_by_key(|&(_, c)| *c) {
        if pins > total / 2 {
            return Err(Rejection::DominantGate {
                gate: idx + 1,
                pins,
                total,
            });
        }
    }
    Ok(total)
}

/// Pairs every pin into a wire, numbering pins per gate in the order they
/// are consumed.
///
/// Ties on the remaining count go to the higher gate id when picking the
/// largest and to the lower gate id when picking the smallest.
pub fn pair_pins(counts: &[usize]) -> Result<Vec<Wire>, MatchError> {
    // (remaining, gate index)
    let mut remaining: BTreeSet<(usize, usize)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .map(|(i, &c)| (c, i))
        .collect();
    let mut next_pin = vec![0usize; counts.len()];
    let mut wires = Vec::with_capacity(counts.iter().sum::<usize>() / 2);

    while let Some((count_a, a)) = remaining.pop_last() {
        let Some((count_b, b)) = remaining.pop_first() else {
            return Err(MatchError::Stranded {
                gate: a + 1,
                remaining: count_a,
            });
        };

        next_pin[a] += 1;
        next_pin[b] += 1;
        wires.push(Wire {
            from: PinRef {
                gate: a + 1,
                pin: next_pin[a],
            },
            to: PinRef {
                gate: b + 1,
                pin: next_pin[b],
            },
        });

        if count_a > 1 {
            remaining.insert((count_a - 1, a));
        }
        if count_b > 1 {
            remaining.insert((count_b - 1, b));
        }
    }

    Ok(wires)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn usage(wires: &[Wire]) -> HashMap<PinRef, usize> {
        let mut used = HashMap::new();
        for w in wires {
            *used.entry(w.from).or_insert(0) += 1;
            *used.entry(w.to).or_insert(0) += 1;
        }
        used
    }

    fn assert_perfect(counts: &[usize], wires: &[Wire]) {
        let total: usize = counts.iter().sum();
        assert_eq!(wires.len(), total / 2);
        let used = usage(wires);
        assert_eq!(used.len(), total);
        assert!(used.values().all(|&n| n == 1));
        for (gate, &count) in counts.iter().enumerate() {
            for pin in 1..=count {
                assert!(used.contains_key(&PinRef { gate: gate + 1, pin }));
            }
        }
    }

    #[test]
    fn three_three_two() {
        let counts = [3, 3, 2];
        assert_eq!(check_feasibility(&counts), Ok(8));
        let wires = pair_pins(&counts).unwrap();
        assert_eq!(wires.len(), 4);
        assert_perfect(&counts, &wires);
        // balance holds, so no pin ever has to be wired to its own gate
        assert!(wires.iter().all(|w| w.from.gate != w.to.gate));
    }

    #[test]
    fn three_three_two_sequence() {
        let wires = pair_pins(&[3, 3, 2]).unwrap();
        let pairs: Vec<_> = wires
            .iter()
            .map(|w| ((w.from.gate, w.from.pin), (w.to.gate, w.to.pin)))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ((2, 1), (3, 1)),
                ((1, 1), (3, 2)),
                ((2, 2), (1, 2)),
                ((2, 3), (1, 3)),
            ]
        );
    }

    #[test]
    fn dominant_gate_rejected() {
        assert_eq!(
            check_feasibility(&[5, 1, 1, 1]),
            Err(Rejection::DominantGate {
                gate: 1,
                pins: 5,
                total: 8
            })
        );
    }

    #[test]
    fn dominant_gate_strands_matcher() {
        assert_eq!(
            pair_pins(&[5, 1, 1, 1]),
            Err(MatchError::Stranded {
                gate: 1,
                remaining: 2
            })
        );
    }

    #[test]
    fn odd_total_rejected() {
        assert_eq!(
            check_feasibility(&[2, 1, 2]),
            Err(Rejection::Parity { total: 5 })
        );
        assert!(pair_pins(&[2, 1]).is_err());
    }

    #[test]
    fn exactly_half_is_accepted() {
        let counts = [4, 1, 1, 2];
        assert_eq!(check_feasibility(&counts), Ok(8));
        let wires = pair_pins(&counts).unwrap();
        assert_perfect(&counts, &wires);
        assert!(wires.iter().all(|w| w.from.gate != w.to.gate));
    }

    #[test]
    fn balanced_vectors_always_match() {
        let cases: &[&[usize]] = &[
            &[1, 1],
            &[2, 2],
            &[1, 2, 1],
            &[3, 1, 1, 1],
            &[5, 5, 2, 4, 2],
            &[7, 1, 1, 1, 1, 1, 1, 1],
            &[2, 2, 2, 2, 2, 2],
        ];
        for &counts in cases {
            assert!(check_feasibility(counts).is_ok(), "{:?}", counts);
            let wires = pair_pins(counts).unwrap();
            assert_perfect(counts, &wires);
        }
    }

    #[test]
    fn empty_counts() {
        assert_eq!(check_feasibility(&[]), Ok(0));
        assert!(pair_pins(&[]).unwrap().is_empty());
    }
}
