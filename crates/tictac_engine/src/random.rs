//! Random source for the opponent's fallback move.

use rand::Rng;
use rand::rngs::StdRng;

/// Picks an index uniformly from `0..len`.
///
/// The engine only consults this when neither a winning nor a blocking move
/// exists, so deterministic tests can substitute a scripted source.
pub trait RandomChoice {
    /// Returns an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl RandomChoice for StdRng {
    fn choose_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl<T: RandomChoice + ?Sized> RandomChoice for &mut T {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}
