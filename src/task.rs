//! Fan-out/join over scoped threads
//!
//! The multi-selector orchestrator needs exactly one primitive: spawn N units
//! of work, wait for all of them, and surface the first failure. A panic
//! inside a unit is recovered and reported as [`Error::Task`] instead of
//! crashing the process.

use crate::error::{Error, Result};
use std::any::Any;
use std::thread;

/// Run every job on its own scoped thread and join them all.
///
/// Outputs come back in spawn order, never completion order. If any job
/// panics the whole call returns the first failure and the remaining outputs
/// are discarded; sibling jobs still run to completion first (the join is a
/// wait-for-all barrier).
pub fn join_all<T, F>(jobs: Vec<F>) -> Result<Vec<T>>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    thread::scope(|scope| {
        let handles: Vec<_> = jobs.into_iter().map(|job| scope.spawn(job)).collect();

        let mut outputs = Vec::with_capacity(handles.len());
        let mut first_err = None;
        for handle in handles {
            match handle.join() {
                Ok(output) => outputs.push(output),
                Err(payload) => {
                    if first_err.is_none() {
                        first_err = Some(Error::Task(panic_message(payload.as_ref())));
                    }
                }
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(outputs),
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}
