//! Cooperative cancellation for generation batches.
//!
//! The engine checks the token between targets only; a cancelled batch
//! returns without committing partial output for the interrupted target.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

///
/// CancelSource
/// The write side: hosts keep the source and hand tokens to the engine.
///

#[derive(Clone, Debug, Default)]
pub struct CancelSource {
    flag: Arc<AtomicBool>,
}

impl CancelSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            flag: self.flag.clone(),
        }
    }
}

///
/// CancelToken
/// The read side. A default token is never cancelled.
///

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
