//! Load Coordination
//!
//! Decides when ItemList must fetch and which responses may still
//! touch its state. No Leptos types in here.

use crate::api::ItemQuery;

/// Turns successive `(reload, query)` observations into fetch decisions.
///
/// A fetch is due when `reload` is true and either the previous
/// observation was not `true` (the first observation counts) or the
/// query differs from the one last fetched.
#[derive(Debug, Clone, Default)]
pub struct ReloadGate {
    last_reload: Option<bool>,
    fetched: Option<ItemQuery>,
}

impl ReloadGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, reload: bool, query: &ItemQuery) -> bool {
        let was_reloading = self.last_reload == Some(true);
        self.last_reload = Some(reload);
        if !reload {
            return false;
        }
        if was_reloading && self.fetched.as_ref() == Some(query) {
            return false;
        }
        self.fetched = Some(query.clone());
        true
    }
}

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// What to do with a finished fetch.
#[derive(Debug, PartialEq)]
pub enum Settled<T, E> {
    Apply(T),
    Fail(E),
    /// Superseded, already settled, or the owner is gone.
    Stale,
}

/// Generation counter guarding ItemList's render state.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    generation: u64,
    in_flight: Option<u64>,
    cancelled: bool,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; any earlier ticket becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.cancelled && self.in_flight == Some(ticket.0)
    }

    pub fn is_loading(&self) -> bool {
        !self.cancelled && self.in_flight.is_some()
    }

    /// Resolve `ticket` at most once.
    pub fn settle<T, E>(&mut self, ticket: Ticket, result: Result<T, E>) -> Settled<T, E> {
        if !self.is_current(ticket) {
            return Settled::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(value) => Settled::Apply(value),
            Err(err) => Settled::Fail(err),
        }
    }

    /// Invalidate every outstanding ticket, permanently.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> ItemQuery {
        ItemQuery::All
    }

    #[test]
    fn test_first_true_fetches() {
        let mut gate = ReloadGate::new();
        assert!(gate.observe(true, &all()));
        assert!(!gate.observe(true, &all()));
    }

    #[test]
    fn test_mount_with_reload_false_does_not_fetch() {
        let mut gate = ReloadGate::new();
        assert!(!gate.observe(false, &all()));
        assert!(!gate.observe(false, &all()));
    }

    #[test]
    fn test_false_to_true_fetches_once() {
        let mut gate = ReloadGate::new();
        gate.observe(true, &all());
        gate.observe(false, &all());

        let fetches = (0..3).filter(|_| gate.observe(true, &all())).count();
        assert_eq!(fetches, 1);
    }

    #[test]
    fn test_keyword_change_while_reloading_fetches() {
        let mut gate = ReloadGate::new();
        gate.observe(true, &all());
        assert!(gate.observe(true, &ItemQuery::Keyword("bike".into())));
        assert!(!gate.observe(true, &ItemQuery::Keyword("bike".into())));
    }

    #[test]
    fn test_keyword_change_while_idle_waits_for_reload() {
        let mut gate = ReloadGate::new();
        gate.observe(true, &all());
        gate.observe(false, &all());
        assert!(!gate.observe(false, &ItemQuery::Keyword("bike".into())));
        assert!(gate.observe(true, &ItemQuery::Keyword("bike".into())));
    }

    #[test]
    fn test_settle_applies_success_once() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin();
        assert!(tracker.is_loading());

        assert_eq!(tracker.settle::<_, ()>(ticket, Ok(3)), Settled::Apply(3));
        assert!(!tracker.is_loading());
        assert_eq!(tracker.settle::<_, ()>(ticket, Ok(3)), Settled::Stale);
    }

    #[test]
    fn test_settle_reports_failure() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin();
        assert_eq!(tracker.settle::<(), _>(ticket, Err("offline")), Settled::Fail("offline"));
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut tracker = LoadTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_eq!(second.generation(), first.generation() + 1);

        assert_eq!(tracker.settle::<_, ()>(first, Ok("old")), Settled::Stale);
        assert_eq!(tracker.settle::<_, ()>(second, Ok("new")), Settled::Apply("new"));
    }

    #[test]
    fn test_cancel_drops_in_flight_and_later_fetches() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin();
        tracker.cancel();
        assert!(!tracker.is_loading());
        assert_eq!(tracker.settle::<_, ()>(ticket, Ok(1)), Settled::Stale);

        let late = tracker.begin();
        assert_eq!(tracker.settle::<(), _>(late, Err(())), Settled::Stale);
    }
}
