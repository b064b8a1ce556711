//! Generation-counted cache cell shared by all stores.

use std::fmt::Display;

/// Lifecycle of one cached value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceState<T> {
    /// Nothing fetched yet.
    Idle,
    /// First fetch in flight; no previous value to show.
    Loading,
    Loaded(T),
    /// Last fetch failed; carries the user-facing message.
    Failed(String),
}

/// A cached value plus the generation counter that orders fetches.
///
/// `begin` hands out a ticket for a new fetch and invalidates all earlier
/// tickets; `resolve` applies a result only when its ticket is still the
/// newest. A refresh over `Loaded` data keeps showing the old value until
/// the new result lands.
#[derive(Debug)]
pub struct Slice<T> {
    state: SliceState<T>,
    generation: u64,
}

impl<T> Slice<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SliceState::Idle,
            generation: 0,
        }
    }

    /// Starts a fetch and returns its generation ticket. Any result from a
    /// previously issued ticket is now stale.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        if matches!(self.state, SliceState::Idle | SliceState::Failed(_)) {
            self.state = SliceState::Loading;
        }
        self.generation
    }

    /// Applies a fetch result if `generation` is still current. Returns
    /// whether the result was applied; stale results are dropped untouched.
    pub fn resolve<E: Display>(&mut self, generation: u64, result: Result<T, E>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return false;
        }
        self.state = match result {
            Ok(value) => SliceState::Loaded(value),
            Err(e) => SliceState::Failed(e.to_string()),
        };
        true
    }

    #[must_use]
    pub fn state(&self) -> &SliceState<T> {
        &self.state
    }

    /// The cached value, if any.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        match &self.state {
            SliceState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Edits the cached value in place, e.g. to splice in the result of a
    /// create/update/delete without a refetch. No-op unless loaded.
    pub fn mutate(&mut self, f: impl FnOnce(&mut T)) {
        if let SliceState::Loaded(value) = &mut self.state {
            f(value);
        }
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_no_value() {
        let slice: Slice<Vec<u32>> = Slice::new();
        assert_eq!(*slice.state(), SliceState::Idle);
        assert!(slice.get().is_none());
    }

    #[test]
    fn begin_moves_idle_to_loading() {
        let mut slice: Slice<u32> = Slice::new();
        slice.begin();
        assert_eq!(*slice.state(), SliceState::Loading);
    }

    #[test]
    fn resolve_applies_current_generation() {
        let mut slice: Slice<u32> = Slice::new();
        let generation = slice.begin();
        assert!(slice.resolve::<&str>(generation, Ok(7)));
        assert_eq!(slice.get(), Some(&7));
    }

    #[test]
    fn later_fetch_wins_over_earlier_slow_response() {
        let mut slice: Slice<&str> = Slice::new();
        let first = slice.begin();
        let second = slice.begin();

        // The second (newer) request resolves first.
        assert!(slice.resolve::<&str>(second, Ok("fresh")));
        // The first request's late response must be dropped.
        assert!(!slice.resolve::<&str>(first, Ok("stale")));
        assert_eq!(slice.get(), Some(&"fresh"));
    }

    #[test]
    fn stale_error_does_not_overwrite_fresh_data() {
        let mut slice: Slice<&str> = Slice::new();
        let first = slice.begin();
        let second = slice.begin();

        assert!(slice.resolve::<&str>(second, Ok("fresh")));
        assert!(!slice.resolve(first, Err("timeout")));
        assert_eq!(slice.get(), Some(&"fresh"));
    }

    #[test]
    fn failed_fetch_records_message() {
        let mut slice: Slice<u32> = Slice::new();
        let generation = slice.begin();
        assert!(slice.resolve(generation, Err("backend down")));
        assert_eq!(
            *slice.state(),
            SliceState::Failed("backend down".to_string())
        );
    }

    #[test]
    fn refresh_keeps_loaded_value_until_resolution() {
        let mut slice: Slice<u32> = Slice::new();
        let generation = slice.begin();
        slice.resolve::<&str>(generation, Ok(1));

        slice.begin();
        // Old data stays visible while the refresh is in flight.
        assert_eq!(slice.get(), Some(&1));
    }

    #[test]
    fn mutate_edits_loaded_value_in_place() {
        let mut slice: Slice<Vec<u32>> = Slice::new();
        let generation = slice.begin();
        slice.resolve::<&str>(generation, Ok(vec![1, 2]));
        slice.mutate(|items| items.push(3));
        assert_eq!(slice.get(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn mutate_is_a_noop_when_not_loaded() {
        let mut slice: Slice<Vec<u32>> = Slice::new();
        slice.mutate(|items| items.push(3));
        assert!(slice.get().is_none());
    }
}
