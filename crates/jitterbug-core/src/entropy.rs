//! Injectable randomness.
//!
//! Every nondeterministic decision in the workload model (delays, failure
//! coins, the calculation result) is derived from a single stream of uniform
//! unit draws. Handing the stream in through a trait lets tests script the
//! exact sequence a request will see.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;

/// Uniform random source. Single method so test doubles stay trivial.
pub trait Entropy: Send + Sync {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

/// Production entropy backed by the thread-local generator (unseeded).
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Replays a scripted sequence of unit values, then yields `0.0` forever.
///
/// Intended for tests: the queue is consumed in the documented draw order of
/// [`crate::workload::plan_work`].
#[derive(Debug, Default)]
pub struct ScriptedEntropy {
    values: Mutex<VecDeque<f64>>,
}

impl ScriptedEntropy {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl Entropy for ScriptedEntropy {
    fn next_unit(&self) -> f64 {
        // Exhausted script and poisoned lock both fall back to 0.0.
        match self.values.lock() {
            Ok(mut queue) => queue.pop_front().unwrap_or(0.0),
            Err(_) => 0.0,
        }
    }
}
