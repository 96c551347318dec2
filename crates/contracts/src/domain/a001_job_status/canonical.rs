use serde::{Deserialize, Serialize};

/// Canonical lifecycle key of a job status.
///
/// Status titles come from a backend-configured catalog and are free text,
/// so the fixed lifecycle phases are recovered from the title by heuristic
/// classification. Unrecognized titles are carried as `Other` with the
/// normalized (lowercased, single-spaced) form; empty titles map to `Empty`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalStatusKey {
    NotStarted,
    Approved,
    Assigned,
    Enroute,
    Onsite,
    Onhold,
    Resume,
    Completed,
    Rejected,
    Unresolved,
    WaitingForApproval,
    Other(String),
    Empty,
}

impl CanonicalStatusKey {
    /// Wire form of the key (snake_case for the fixed keys)
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalStatusKey::NotStarted => "not_started",
            CanonicalStatusKey::Approved => "approved",
            CanonicalStatusKey::Assigned => "assigned",
            CanonicalStatusKey::Enroute => "enroute",
            CanonicalStatusKey::Onsite => "onsite",
            CanonicalStatusKey::Onhold => "onhold",
            CanonicalStatusKey::Resume => "resume",
            CanonicalStatusKey::Completed => "completed",
            CanonicalStatusKey::Rejected => "rejected",
            CanonicalStatusKey::Unresolved => "unresolved",
            CanonicalStatusKey::WaitingForApproval => "waiting_for_approval",
            CanonicalStatusKey::Other(s) => s,
            CanonicalStatusKey::Empty => "",
        }
    }

    /// Human-readable label for the fixed keys
    pub fn label(&self) -> String {
        match self {
            CanonicalStatusKey::NotStarted => "Not Started".to_string(),
            CanonicalStatusKey::Approved => "Approved".to_string(),
            CanonicalStatusKey::Assigned => "Assigned".to_string(),
            CanonicalStatusKey::Enroute => "En Route".to_string(),
            CanonicalStatusKey::Onsite => "On Site".to_string(),
            CanonicalStatusKey::Onhold => "On Hold".to_string(),
            CanonicalStatusKey::Resume => "Resume".to_string(),
            CanonicalStatusKey::Completed => "Completed".to_string(),
            CanonicalStatusKey::Rejected => "Rejected".to_string(),
            CanonicalStatusKey::Unresolved => "Unresolved".to_string(),
            CanonicalStatusKey::WaitingForApproval => "Waiting For Approval".to_string(),
            CanonicalStatusKey::Other(s) => s.clone(),
            CanonicalStatusKey::Empty => String::new(),
        }
    }

    /// Terminal phases are immutable: no further transition is offered or
    /// executed once a job reaches one of them.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CanonicalStatusKey::Completed
                | CanonicalStatusKey::Rejected
                | CanonicalStatusKey::Unresolved
        )
    }

    /// Hold-family phases offer "Resume" instead of "On Hold" as the next
    /// pause-related action.
    pub fn is_hold_family(&self) -> bool {
        matches!(self, CanonicalStatusKey::Onhold)
    }
}

impl std::fmt::Display for CanonicalStatusKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalize a title to its spaced form: lowercase, `_`/`-` runs become one
/// space, whitespace collapsed and trimmed.
fn normalize_spaced(title: &str) -> String {
    let lowered: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ----------------------------------------------------------------------------
// Classification rules
//
// Evaluated top to bottom over the packed (whitespace-stripped) normalized
// title; first match wins. The order is load-bearing, and so is the resume
// guard inside `is_onhold`: "Unhold" and "Release Hold" contain "hold" but
// must classify as resume, so hold tokens only count when no resume-class
// token is present. Precedence is pinned by the tests below.
// ----------------------------------------------------------------------------

fn is_not_started(s: &str) -> bool {
    s.contains("notstarted") || s == "new" || s.contains("pending")
}

fn is_approved(s: &str) -> bool {
    s.contains("approve")
}

fn is_assigned(s: &str) -> bool {
    s.contains("assignedtech") || s == "assigned"
}

fn is_enroute(s: &str) -> bool {
    s.contains("enrout")
}

fn is_onsite(s: &str) -> bool {
    s.contains("onsit")
}

fn is_resume(s: &str) -> bool {
    s.contains("resum")
        || s.contains("continue")
        || s.contains("reopen")
        || s.contains("unhold")
        || (s.contains("release") && s.contains("hold"))
        || (s.contains("remove") && s.contains("hold"))
}

fn is_onhold(s: &str) -> bool {
    (s.contains("hold") || s.contains("pause")) && !is_resume(s)
}

fn is_completed(s: &str) -> bool {
    s.contains("completed") || s == "done"
}

fn is_waiting_for_approval(s: &str) -> bool {
    s.contains("waitingforapproval") || (s.contains("waiting") && s.contains("approval"))
}

fn is_rejected(s: &str) -> bool {
    s.contains("reject")
}

fn is_unresolved(s: &str) -> bool {
    s.contains("unresolved")
}

const RULES: &[(fn(&str) -> bool, CanonicalStatusKey)] = &[
    (is_not_started, CanonicalStatusKey::NotStarted),
    (is_approved, CanonicalStatusKey::Approved),
    (is_assigned, CanonicalStatusKey::Assigned),
    (is_enroute, CanonicalStatusKey::Enroute),
    (is_onsite, CanonicalStatusKey::Onsite),
    (is_onhold, CanonicalStatusKey::Onhold),
    (is_resume, CanonicalStatusKey::Resume),
    (is_completed, CanonicalStatusKey::Completed),
    (is_waiting_for_approval, CanonicalStatusKey::WaitingForApproval),
    (is_rejected, CanonicalStatusKey::Rejected),
    (is_unresolved, CanonicalStatusKey::Unresolved),
];

/// Map a free-text status title onto its canonical lifecycle key.
///
/// Total: never panics, accepts any string. "On Hold", "on_hold" and
/// "ON-HOLD " all normalize identically before matching.
pub fn canonicalize(title: &str) -> CanonicalStatusKey {
    let spaced = normalize_spaced(title);
    if spaced.is_empty() {
        return CanonicalStatusKey::Empty;
    }
    let packed: String = spaced.split_whitespace().collect();
    for (matches, key) in RULES {
        if matches(&packed) {
            return key.clone();
        }
    }
    CanonicalStatusKey::Other(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CanonicalStatusKey::*;

    #[test]
    fn test_normalization_variants() {
        assert_eq!(canonicalize("On Hold"), Onhold);
        assert_eq!(canonicalize("on_hold"), Onhold);
        assert_eq!(canonicalize("ON-HOLD "), Onhold);
        assert_eq!(canonicalize("  on   hold  "), Onhold);
    }

    #[test]
    fn test_idempotence_over_rendered_labels() {
        let keys = [
            NotStarted,
            Approved,
            Assigned,
            Enroute,
            Onsite,
            Onhold,
            Resume,
            Completed,
            Rejected,
            Unresolved,
            WaitingForApproval,
        ];
        for key in keys {
            assert_eq!(canonicalize(&key.label()), key, "label {:?}", key.label());
            assert_eq!(canonicalize(key.as_str()), key, "wire {:?}", key.as_str());
        }
    }

    #[test]
    fn test_not_started_synonyms() {
        assert_eq!(canonicalize("Not Started"), NotStarted);
        assert_eq!(canonicalize("new"), NotStarted);
        assert_eq!(canonicalize("Pending"), NotStarted);
        // "pending" wins over "approval" because the rule order does
        assert_eq!(canonicalize("Pending Approval"), NotStarted);
    }

    #[test]
    fn test_hold_synonyms() {
        assert_eq!(canonicalize("Paused"), Onhold);
        assert_eq!(canonicalize("Pause"), Onhold);
        assert_eq!(canonicalize("Hold"), Onhold);
    }

    #[test]
    fn test_resume_synonyms() {
        assert_eq!(canonicalize("Resume"), Resume);
        assert_eq!(canonicalize("Reopen"), Resume);
        assert_eq!(canonicalize("Unhold"), Resume);
        assert_eq!(canonicalize("Release Hold"), Resume);
        assert_eq!(canonicalize("Remove Hold"), Resume);
        assert_eq!(canonicalize("Continue"), Resume);
    }

    #[test]
    fn test_resume_beats_hold_tokens() {
        // These contain "hold" but must not classify as onhold
        assert_eq!(canonicalize("Resume from Hold"), Resume);
        assert_eq!(canonicalize("Release Hold"), Resume);
        assert_eq!(canonicalize("Unhold"), Resume);
    }

    #[test]
    fn test_assignment_keys() {
        assert_eq!(canonicalize("Assigned"), Assigned);
        assert_eq!(canonicalize("Assigned Technician"), Assigned);
        assert_eq!(canonicalize("Assigned Tech"), Assigned);
    }

    #[test]
    fn test_travel_keys() {
        assert_eq!(canonicalize("En Route"), Enroute);
        assert_eq!(canonicalize("Enroute"), Enroute);
        assert_eq!(canonicalize("On Site"), Onsite);
        assert_eq!(canonicalize("On-Site"), Onsite);
    }

    #[test]
    fn test_terminal_keys() {
        assert_eq!(canonicalize("Completed"), Completed);
        assert_eq!(canonicalize("done"), Completed);
        assert_eq!(canonicalize("Rejected"), Rejected);
        assert_eq!(canonicalize("Reject"), Rejected);
        assert_eq!(canonicalize("unresolved"), Unresolved);
        assert!(Completed.is_terminal());
        assert!(Rejected.is_terminal());
        assert!(Unresolved.is_terminal());
        assert!(!Onhold.is_terminal());
    }

    #[test]
    fn test_waiting_for_approval() {
        assert_eq!(canonicalize("Waiting For Approval"), WaitingForApproval);
        assert_eq!(canonicalize("waiting_for_approval"), WaitingForApproval);
        // "Approved" must not swallow it: "approval" does not contain "approve"
        assert_eq!(canonicalize("Approved"), Approved);
        assert_eq!(canonicalize("Approve"), Approved);
    }

    #[test]
    fn test_empty_and_unrecognized() {
        assert_eq!(canonicalize(""), Empty);
        assert_eq!(canonicalize("   "), Empty);
        assert_eq!(canonicalize("__--__"), Empty);
        assert_eq!(
            canonicalize("Waiting For Parts"),
            Other("waiting for parts".to_string())
        );
        assert_eq!(Other("waiting for parts".to_string()).as_str(), "waiting for parts");
        assert_eq!(Empty.as_str(), "");
    }
}
