use crate::domain::a001_job_status::{canonicalize, CanonicalStatusKey};

/// Optimistic status-transition state machine for one job.
///
/// The view model drives it around the persistence call:
///
/// ```text
/// begin() -> Some(PendingUpdate)   optimistic switch applied, request goes out
///   on success  -> commit()        optimistic state becomes committed
///   on failure  -> roll_back()     id and title restored byte-for-byte
/// begin() -> None                  no-op: nothing may be sent
/// ```
///
/// `begin` returns `None` (and the caller must not issue a request) when an
/// update is already in flight, when the target equals the current status,
/// or when the current canonical key is terminal. At most one update is
/// outstanding at a time; concurrent attempts are ignored, not queued.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusFlow {
    current_id: String,
    current_title: String,
    in_flight: bool,
    snapshot: Option<Snapshot>,
}

#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    id: String,
    title: String,
}

/// Proof that an optimistic switch was applied and a persistence call is due.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpdate {
    pub target_id: String,
}

impl StatusFlow {
    pub fn new(current_id: String, current_title: String) -> Self {
        Self {
            current_id,
            current_title,
            in_flight: false,
            snapshot: None,
        }
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    pub fn current_key(&self) -> CanonicalStatusKey {
        canonicalize(&self.current_title)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Try to start a transition to `target_id`. Applies the optimistic
    /// switch and returns the pending handle, or `None` when the attempt
    /// must be ignored (in flight, same status, or terminal state).
    pub fn begin(&mut self, target_id: &str, target_title: &str) -> Option<PendingUpdate> {
        if self.in_flight {
            return None;
        }
        if target_id == self.current_id {
            return None;
        }
        if self.current_key().is_terminal() {
            return None;
        }

        self.snapshot = Some(Snapshot {
            id: self.current_id.clone(),
            title: self.current_title.clone(),
        });
        self.current_id = target_id.to_string();
        self.current_title = target_title.to_string();
        self.in_flight = true;

        Some(PendingUpdate {
            target_id: target_id.to_string(),
        })
    }

    /// The persistence call succeeded: keep the optimistic state.
    pub fn commit(&mut self) {
        self.in_flight = false;
        self.snapshot = None;
    }

    /// The persistence call failed: restore the pre-update state exactly.
    pub fn roll_back(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.current_id = snapshot.id;
            self.current_title = snapshot.title;
        }
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> StatusFlow {
        StatusFlow::new("id-assigned".to_string(), "Assigned".to_string())
    }

    #[test]
    fn test_begin_applies_optimistic_switch() {
        let mut f = flow();
        let pending = f.begin("id-enroute", "En Route");
        assert_eq!(
            pending,
            Some(PendingUpdate {
                target_id: "id-enroute".to_string()
            })
        );
        assert_eq!(f.current_id(), "id-enroute");
        assert_eq!(f.current_title(), "En Route");
        assert!(f.is_in_flight());
    }

    #[test]
    fn test_commit_keeps_optimistic_state() {
        let mut f = flow();
        f.begin("id-enroute", "En Route").unwrap();
        f.commit();
        assert_eq!(f.current_id(), "id-enroute");
        assert!(!f.is_in_flight());
        // Follow-up transitions are possible again
        assert!(f.begin("id-onsite", "On Site").is_some());
    }

    #[test]
    fn test_rollback_restores_snapshot_exactly() {
        let mut f = StatusFlow::new("id-1".to_string(), "Assigned Technician ".to_string());
        f.begin("id-2", "En Route").unwrap();
        f.roll_back();
        // Byte-for-byte, including the trailing space in the cached title
        assert_eq!(f.current_id(), "id-1");
        assert_eq!(f.current_title(), "Assigned Technician ");
        assert!(!f.is_in_flight());
    }

    #[test]
    fn test_second_begin_while_in_flight_is_ignored() {
        let mut f = flow();
        assert!(f.begin("id-enroute", "En Route").is_some());
        assert!(f.begin("id-onsite", "On Site").is_none());
        // The ignored attempt must not disturb the pending state
        assert_eq!(f.current_id(), "id-enroute");
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut f = flow();
        assert!(f.begin("id-assigned", "Assigned").is_none());
        assert!(!f.is_in_flight());
    }

    #[test]
    fn test_terminal_states_are_immutable() {
        for title in ["Completed", "Rejected", "unresolved"] {
            let mut f = StatusFlow::new("id-done".to_string(), title.to_string());
            assert!(f.begin("id-enroute", "En Route").is_none(), "{title}");
            assert_eq!(f.current_id(), "id-done");
            assert_eq!(f.current_title(), title);
            assert!(!f.is_in_flight());
        }
    }

    #[test]
    fn test_rollback_then_retry() {
        let mut f = flow();
        f.begin("id-enroute", "En Route").unwrap();
        f.roll_back();
        // A failed transition requires the user to re-trigger it manually
        assert!(f.begin("id-enroute", "En Route").is_some());
    }
}
