use rand::Rng;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::matcher::{self, MatchError, Rejection};
use crate::model::Instance;
use crate::sampler;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Accepted(Instance),
    Rejected(Rejection),
}

/// Accepted instance plus the number of sampling rounds it took.
#[derive(Clone, Debug)]
pub struct Generated {
    pub instance: Instance,
    pub attempts: u64,
}

/// One sample-check-match round.
///
/// `Err` means the matcher stranded pins on counts that passed the
/// feasibility check, which the balance invariant rules out.
pub fn attempt<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<Outcome, MatchError> {
    let gates = sampler::sample_gates(rng, config);
    let counts: Vec<usize> = gates.iter().map(|g| g.pins.len()).collect();

    if let Err(rejection) = matcher::check_feasibility(&counts) {
        return Ok(Outcome::Rejected(rejection));
    }
    let wires = matcher::pair_pins(&counts)?;
    Ok(Outcome::Accepted(Instance { gates, wires }))
}

/// Resamples until an instance passes the feasibility check.
///
/// Never returns when `config.max_gates < 2`; see
/// [`GeneratorConfig::validate`].
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<Generated, MatchError> {
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        match attempt(rng, config)? {
            Outcome::Accepted(instance) => {
                let summary = instance.summary();
                info!(
                    attempts,
                    gates = summary.gates,
                    pins = summary.pins,
                    wires = summary.wires,
                    "instance accepted"
                );
                return Ok(Generated { instance, attempts });
            }
            Outcome::Rejected(reason) => {
                debug!(attempt = attempts, %reason, "instance rejected");
            }
        }
    }
}
