use std::{
	sync::{Arc, Mutex},
	time::{Duration, Instant},
};

use hireboard_domain::lead::Lead;

/// Maximum age of a cached snapshot before the next read re-fetches.
pub const CACHE_TTL: Duration = Duration::from_secs(30);

/// Injected time source so cache expiry is testable without the wall clock.
pub trait Clock
where
	Self: Send + Sync,
{
	fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

struct Snapshot {
	leads: Vec<Lead>,
	fetched_at: Instant,
}

/// Last fetched lead list, held per process instance. There is no
/// cross-process coherence; a write through one instance leaves the others
/// stale for at most the TTL.
pub struct LeadCache {
	clock: Arc<dyn Clock>,
	slot: Mutex<Option<Snapshot>>,
}

impl LeadCache {
	pub fn new(clock: Arc<dyn Clock>) -> Self {
		Self { clock, slot: Mutex::new(None) }
	}

	/// The cached list, if it is younger than the TTL. Callers that get
	/// `None` fetch upstream and `store` the result; the lock is not held in
	/// between, so concurrent expiry reads may both fetch an idempotent read
	/// and the later store wins.
	pub fn fresh(&self) -> Option<Vec<Lead>> {
		let slot = self.slot.lock().unwrap_or_else(|err| err.into_inner());
		let snapshot = slot.as_ref()?;

		if self.clock.now().duration_since(snapshot.fetched_at) < CACHE_TTL {
			Some(snapshot.leads.clone())
		} else {
			None
		}
	}

	pub fn store(&self, leads: Vec<Lead>) {
		let snapshot = Snapshot { leads, fetched_at: self.clock.now() };

		*self.slot.lock().unwrap_or_else(|err| err.into_inner()) = Some(snapshot);
	}

	/// Unconditionally clears the snapshot so the next read re-fetches; runs
	/// after every successful write.
	pub fn invalidate(&self) {
		*self.slot.lock().unwrap_or_else(|err| err.into_inner()) = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FrozenClock {
		start: Instant,
		elapsed: Mutex<Duration>,
	}

	impl FrozenClock {
		fn new() -> Self {
			Self { start: Instant::now(), elapsed: Mutex::new(Duration::ZERO) }
		}

		fn advance(&self, delta: Duration) {
			*self.elapsed.lock().unwrap_or_else(|err| err.into_inner()) += delta;
		}
	}

	impl Clock for FrozenClock {
		fn now(&self) -> Instant {
			self.start + *self.elapsed.lock().unwrap_or_else(|err| err.into_inner())
		}
	}

	fn leads() -> Vec<Lead> {
		vec![Lead::from_row(0, &["1-Mar-2026 9:00 am".to_string()])]
	}

	#[test]
	fn snapshot_is_fresh_until_the_ttl() {
		let clock = Arc::new(FrozenClock::new());
		let cache = LeadCache::new(clock.clone());

		assert!(cache.fresh().is_none());

		cache.store(leads());
		clock.advance(CACHE_TTL - Duration::from_secs(1));

		assert!(cache.fresh().is_some());

		clock.advance(Duration::from_secs(1));

		assert!(cache.fresh().is_none());
	}

	#[test]
	fn invalidate_clears_regardless_of_age() {
		let clock = Arc::new(FrozenClock::new());
		let cache = LeadCache::new(clock);

		cache.store(leads());
		cache.invalidate();

		assert!(cache.fresh().is_none());
	}
}
