//! Caller-side generation lifecycle: `idle -> generating -> summary`,
//! re-entrant, with last-write-wins supersession for async callers.
//!
//! The session itself is pure and synchronous. Callers that wrap
//! generation in a delay hold the ticket from `begin`/`regenerate` and
//! hand it back to `complete`; a ticket issued before a newer request
//! loses and the session is left untouched.

/// Monotonic request id. Never reused within a session.
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
	Idle,
	Generating,
	Summary,
}

#[derive(Debug)]
pub struct StandupSession {
	phase: SessionPhase,
	variation: usize,
	summary: Option<String>,
	next_ticket: Ticket,
	pending: Option<Ticket>,
}

impl Default for StandupSession {
	fn default() -> Self {
		Self::new()
	}
}

impl StandupSession {
	pub const fn new() -> Self {
		Self::with_variation(0)
	}

	pub const fn with_variation(variation: usize) -> Self {
		Self {
			phase: SessionPhase::Idle,
			variation,
			summary: None,
			next_ticket: 0,
			pending: None,
		}
	}

	pub const fn phase(&self) -> SessionPhase {
		self.phase
	}

	pub const fn variation(&self) -> usize {
		self.variation
	}

	pub fn summary(&self) -> Option<&str> {
		self.summary.as_deref()
	}

	/// Starts a generation request at the current variation. Clears any
	/// previous summary and supersedes any pending request.
	pub fn begin(&mut self) -> (Ticket, usize) {
		self.phase = SessionPhase::Generating;
		self.summary = None;

		let ticket = self.next_ticket;
		self.next_ticket += 1;
		self.pending = Some(ticket);

		(ticket, self.variation)
	}

	/// Advances the variation, then starts a generation request. The
	/// variation only ever increments; wraparound is the template
	/// selector's concern.
	pub fn regenerate(&mut self) -> (Ticket, usize) {
		self.variation += 1;
		self.begin()
	}

	/// Applies a finished generation. Returns false when the ticket has
	/// been superseded by a newer request, in which case the result is
	/// discarded and the session is unchanged.
	pub fn complete(&mut self, ticket: Ticket, summary: String) -> bool {
		if self.pending != Some(ticket) {
			return false;
		}
		self.pending = None;
		self.summary = Some(summary);
		self.phase = SessionPhase::Summary;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lifecycle_idle_generating_summary() {
		let mut session = StandupSession::new();
		assert_eq!(session.phase(), SessionPhase::Idle);
		assert_eq!(session.variation(), 0);

		let (ticket, variation) = session.begin();
		assert_eq!(session.phase(), SessionPhase::Generating);
		assert_eq!(variation, 0);
		assert!(session.summary().is_none());

		assert!(session.complete(ticket, "summary".to_string()));
		assert_eq!(session.phase(), SessionPhase::Summary);
		assert_eq!(session.summary(), Some("summary"));
	}

	#[test]
	fn test_regenerate_increments_variation_once_per_call() {
		let mut session = StandupSession::new();
		let (_, v0) = session.begin();
		let (_, v1) = session.regenerate();
		let (_, v2) = session.regenerate();
		assert_eq!((v0, v1, v2), (0, 1, 2));
	}

	#[test]
	fn test_stale_ticket_is_discarded() {
		let mut session = StandupSession::new();
		let (stale, _) = session.begin();
		let (fresh, _) = session.regenerate();

		assert!(!session.complete(stale, "old".to_string()));
		assert_eq!(session.phase(), SessionPhase::Generating, "stale completion must not change phase");
		assert!(session.summary().is_none());

		assert!(session.complete(fresh, "new".to_string()));
		assert_eq!(session.summary(), Some("new"));
	}

	#[test]
	fn test_completion_consumes_the_ticket() {
		let mut session = StandupSession::new();
		let (ticket, _) = session.begin();
		assert!(session.complete(ticket, "first".to_string()));
		assert!(!session.complete(ticket, "second".to_string()), "a ticket settles at most once");
		assert_eq!(session.summary(), Some("first"));
	}

	#[test]
	fn test_regenerate_is_reentrant_after_summary() {
		let mut session = StandupSession::new();
		let (t, _) = session.begin();
		session.complete(t, "first".to_string());

		let (t, v) = session.regenerate();
		assert_eq!(session.phase(), SessionPhase::Generating);
		assert!(session.summary().is_none(), "begin clears the previous summary");
		assert_eq!(v, 1);
		assert!(session.complete(t, "second".to_string()));
	}
}
