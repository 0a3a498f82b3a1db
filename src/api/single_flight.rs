use crate::errors::ServerError;
use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

/// Coalesces concurrent calls for the same key onto one upstream
/// request. The first caller runs the work; callers arriving while it
/// is in flight block and receive a clone of the same result, error
/// included. Nothing is cached: once a flight lands its key is free
/// and the next call fetches fresh.
pub struct SingleFlight<T> {
    flights: Mutex<HashMap<String, Arc<Flight<T>>>>,
}

struct Flight<T> {
    outcome: Mutex<Option<Result<T, ServerError>>>,
    landed: Condvar,
}

impl<T: Clone> SingleFlight<T> {
    pub fn new() -> Self {
        Self {
            flights: Mutex::new(HashMap::new()),
        }
    }

    pub fn run<F>(&self, key: &str, work: F) -> Result<T, ServerError>
    where
        F: FnOnce() -> Result<T, ServerError>,
    {
        let (flight, is_leader) = {
            let mut flights = lock(&self.flights);
            match flights.get(key) {
                Some(flight) => (Arc::clone(flight), false),
                None => {
                    let flight = Arc::new(Flight {
                        outcome: Mutex::new(None),
                        landed: Condvar::new(),
                    });
                    flights.insert(key.to_string(), Arc::clone(&flight));
                    (flight, true)
                }
            }
        };

        if is_leader {
            let result = work();
            *lock(&flight.outcome) = Some(result.clone());
            flight.landed.notify_all();
            lock(&self.flights).remove(key);
            result
        } else {
            let mut outcome = lock(&flight.outcome);
            while outcome.is_none() {
                outcome = flight
                    .landed
                    .wait(outcome)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            match outcome.as_ref() {
                Some(result) => result.clone(),
                None => Err(ServerError::InternalError),
            }
        }
    }
}

impl<T: Clone> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
