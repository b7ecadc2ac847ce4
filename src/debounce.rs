//! Debounce Tokens
//!
//! Generation-token debouncing for search-as-you-type inputs: each keystroke
//! issues a new token, invalidating every earlier one. A pending query only
//! fires if its token is still live after the quiet period, so abandoned
//! timers never reach the network.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;

/// Quiet period before a search query fires
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u32>>,
}

#[derive(Clone)]
pub struct DebounceToken {
    generation: u32,
    source: Rc<Cell<u32>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token, cancelling all previously issued ones.
    pub fn issue(&self) -> DebounceToken {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        DebounceToken {
            generation: next,
            source: Rc::clone(&self.generation),
        }
    }
}

impl DebounceToken {
    /// Still the most recent token?
    pub fn is_live(&self) -> bool {
        self.source.get() == self.generation
    }

    /// Wait out the quiet period; true if no newer token was issued
    /// meanwhile and the query should fire.
    pub async fn settle(&self, ms: u32) -> bool {
        TimeoutFuture::new(ms).await;
        self.is_live()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_live() {
        let debouncer = Debouncer::new();
        assert!(debouncer.issue().is_live());
    }

    #[test]
    fn newer_token_invalidates_older_ones() {
        let debouncer = Debouncer::new();
        let first = debouncer.issue();
        let second = debouncer.issue();
        assert!(!first.is_live());
        assert!(second.is_live());
    }

    #[test]
    fn every_keystroke_cancels_the_pending_one() {
        // "a", "ab", "abc" typed quickly: only the last survives
        let debouncer = Debouncer::new();
        let tokens: Vec<_> = (0..3).map(|_| debouncer.issue()).collect();
        assert!(!tokens[0].is_live());
        assert!(!tokens[1].is_live());
        assert!(tokens[2].is_live());
    }
}
