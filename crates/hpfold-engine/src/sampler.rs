//! Parallel batch generation of independent conformations.
//!
//! Placement runs share no mutable state, which makes batch sampling
//! embarrassingly parallel: each worker owns its RNG, generates whole
//! conformations, and sends finished results over a channel. Results
//! are joined only after a run completes and are returned ordered by
//! sample index, so a batch is a pure function of the base seed.

use std::thread;

use hpfold_core::Chain;
use hpfold_lattice::Conformation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, SamplerConfig};
use crate::contact::{analyze, ContactSummary};
use crate::engine::PlacementEngine;
use crate::error::EngineError;

/// One successfully generated sample.
#[derive(Clone, Debug)]
pub struct SampleRecord {
    /// Index of this sample within the batch.
    pub index: u64,
    /// The generated conformation (possibly incomplete for the
    /// non-backtracking engines).
    pub conformation: Conformation,
    /// Contact analysis of the conformation.
    pub contacts: ContactSummary,
}

/// The per-sample outcome of a batch run.
///
/// Exhaustion and a busted backtrack ceiling are per-sample data, not
/// batch failures; only a lattice invariant violation aborts the whole
/// batch.
#[derive(Clone, Debug)]
pub enum SampleOutcome {
    /// The engine produced a conformation.
    Sampled(SampleRecord),
    /// The backtracking search exhausted without finding a walk.
    Exhausted {
        /// Index of this sample within the batch.
        index: u64,
        /// Backtracks performed before giving up.
        backtracks: u64,
    },
    /// The run finished but spent more backtracks than the configured
    /// ceiling allows.
    CeilingExceeded {
        /// Index of this sample within the batch.
        index: u64,
        /// Backtracks the run actually performed.
        backtracks: u64,
    },
}

impl SampleOutcome {
    /// Index of this sample within the batch.
    pub fn index(&self) -> u64 {
        match self {
            Self::Sampled(record) => record.index,
            Self::Exhausted { index, .. } | Self::CeilingExceeded { index, .. } => *index,
        }
    }

    /// The sample record, if the run produced one.
    pub fn record(&self) -> Option<&SampleRecord> {
        match self {
            Self::Sampled(record) => Some(record),
            _ => None,
        }
    }
}

/// Fans independent generation calls out across worker threads.
///
/// Workers pull sample indices from a shared channel, so uneven run
/// times (a backtracking run can be arbitrarily slower than its
/// neighbours) never idle a thread while work remains.
#[derive(Debug)]
pub struct Sampler<E> {
    engine: E,
    config: SamplerConfig,
}

impl<E: PlacementEngine + Sync> Sampler<E> {
    /// Create a sampler, validating the configuration.
    pub fn new(engine: E, config: SamplerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { engine, config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Generate the whole batch for `chain`.
    ///
    /// Returns one outcome per requested sample, ordered by sample
    /// index. The only fatal error is a violated lattice invariant,
    /// which indicates an engine bug and aborts the batch.
    pub fn run(&self, chain: &Chain) -> Result<Vec<SampleOutcome>, EngineError> {
        let samples = self.config.samples;
        let workers = self.config.resolved_worker_count();

        let (task_tx, task_rx) = crossbeam_channel::unbounded::<u64>();
        let (result_tx, result_rx) =
            crossbeam_channel::unbounded::<Result<SampleOutcome, EngineError>>();

        for index in 0..samples {
            // Unbounded channel: send cannot block or fail here.
            let _ = task_tx.send(index);
        }
        drop(task_tx);

        let mut outcomes = Vec::with_capacity(samples as usize);
        let mut fatal: Option<EngineError> = None;

        thread::scope(|scope| {
            for _ in 0..workers {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    while let Ok(index) = task_rx.recv() {
                        let outcome = self.run_one(chain, index);
                        if result_tx.send(outcome).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(result_tx);

            for result in result_rx.iter() {
                match result {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(error) => {
                        // Remember the first fatal error; let the
                        // remaining workers drain their queues.
                        fatal.get_or_insert(error);
                    }
                }
            }
        });

        if let Some(error) = fatal {
            return Err(error);
        }
        outcomes.sort_by_key(SampleOutcome::index);
        Ok(outcomes)
    }

    fn run_one(&self, chain: &Chain, index: u64) -> Result<SampleOutcome, EngineError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed ^ index);
        match self.engine.generate(chain, &mut rng) {
            Ok(conformation) => {
                if let Some(ceiling) = self.config.backtrack_ceiling {
                    if conformation.backtracks() > ceiling {
                        return Ok(SampleOutcome::CeilingExceeded {
                            index,
                            backtracks: conformation.backtracks(),
                        });
                    }
                }
                let contacts = analyze(&conformation);
                Ok(SampleOutcome::Sampled(SampleRecord {
                    index,
                    conformation,
                    contacts,
                }))
            }
            Err(EngineError::SearchExhausted { backtracks, .. }) => {
                Ok(SampleOutcome::Exhausted { index, backtracks })
            }
            Err(error) => Err(error),
        }
    }
}
