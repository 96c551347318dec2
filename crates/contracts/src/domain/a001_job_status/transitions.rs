use super::aggregate::JobStatus;
use super::canonical::{canonicalize, CanonicalStatusKey};
use std::collections::HashSet;

/// One presentable next action for the status selector.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionOption {
    pub id: String,
    pub label: String,
    pub color: String,
    /// Marks lifecycle phases the job has already passed, for the progress
    /// strip rendering. Side phases (hold, resume, waiting, failures) are
    /// never marked.
    pub is_completed_for_display: bool,
    /// False for display-only entries (the waiting collapse). A
    /// non-actionable entry must never be submitted as a transition; its id
    /// may be synthetic and match no catalog record.
    pub is_actionable: bool,
}

/// Compute the ordered set of statuses to offer as next transitions.
///
/// Pure over already-fetched data: `catalog` is the full configured status
/// list, `available_from_server` the optional backend-computed allow-list.
/// When the server list is present and non-empty it is authoritative and
/// the client-side table is skipped.
///
/// The function never returns an empty set for a non-empty catalog: every
/// branch that fails to resolve falls back to the full catalog rather than
/// leaving the UI without actionable transitions.
pub fn build_transition_set(
    current: &CanonicalStatusKey,
    catalog: &[JobStatus],
    available_from_server: Option<&[JobStatus]>,
) -> Vec<TransitionOption> {
    if let Some(allowed) = available_from_server {
        if !allowed.is_empty() {
            let ids: HashSet<String> = allowed.iter().map(|s| s.to_string_id()).collect();
            let filtered: Vec<TransitionOption> = catalog
                .iter()
                .filter(|s| ids.contains(&s.to_string_id()))
                .map(|s| to_option(current, s))
                .collect();
            if !filtered.is_empty() {
                return filtered;
            }
        }
    }

    let computed = match current {
        CanonicalStatusKey::NotStarted => not_started_actions(catalog),
        CanonicalStatusKey::Approved
        | CanonicalStatusKey::Assigned
        | CanonicalStatusKey::Enroute
        | CanonicalStatusKey::Onsite
        | CanonicalStatusKey::Onhold
        | CanonicalStatusKey::Resume => execution_phase_actions(current, catalog),
        CanonicalStatusKey::WaitingForApproval => waiting_display(catalog),
        // Unrecognized and terminal keys: show everything. Terminal gating
        // lives in the status flow, not here.
        _ => full_catalog(current, catalog),
    };

    if computed.is_empty() {
        full_catalog(current, catalog)
    } else {
        computed
    }
}

/// From "not started" the console offers exactly an approve/reject pair,
/// relabeled regardless of the configured titles. The approve action maps
/// to the catalog's approved entry, or its assigned entry when no approval
/// step is configured.
fn not_started_actions(catalog: &[JobStatus]) -> Vec<TransitionOption> {
    let approve = find_by_key(catalog, &CanonicalStatusKey::Approved)
        .or_else(|| find_by_key(catalog, &CanonicalStatusKey::Assigned));
    let reject = find_by_key(catalog, &CanonicalStatusKey::Rejected);

    let mut out = Vec::new();
    if let Some(s) = approve {
        out.push(TransitionOption {
            id: s.to_string_id(),
            label: "Approve".to_string(),
            color: s.color_code.clone(),
            is_completed_for_display: false,
            is_actionable: true,
        });
    }
    if let Some(s) = reject {
        out.push(TransitionOption {
            id: s.to_string_id(),
            label: "Reject".to_string(),
            color: s.color_code.clone(),
            is_completed_for_display: false,
            is_actionable: true,
        });
    }
    out
}

/// Assignment/execution phase: base set plus exactly one of resume/onhold,
/// deduplicated by status id in first-seen order.
fn execution_phase_actions(
    current: &CanonicalStatusKey,
    catalog: &[JobStatus],
) -> Vec<TransitionOption> {
    let pause_action = if current.is_hold_family() {
        CanonicalStatusKey::Resume
    } else {
        CanonicalStatusKey::Onhold
    };
    let wanted = [
        CanonicalStatusKey::Enroute,
        CanonicalStatusKey::Onsite,
        pause_action,
        CanonicalStatusKey::Completed,
        CanonicalStatusKey::Unresolved,
    ];

    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for key in &wanted {
        let entry =
            find_by_key(catalog, key).or_else(|| find_by_loose_title(catalog, key));
        if let Some(s) = entry {
            let id = s.to_string_id();
            if seen.insert(id) {
                out.push(to_option(current, s));
            }
        }
    }
    out
}

/// "Waiting for approval" is a transient, non-actionable display state:
/// collapse to one synthetic entry. When the catalog has no literal entry
/// for it, borrow the completed status color. The entry is display-only so
/// its (possibly synthetic) id never reaches the update endpoint.
fn waiting_display(catalog: &[JobStatus]) -> Vec<TransitionOption> {
    let waiting = find_by_key(catalog, &CanonicalStatusKey::WaitingForApproval);
    let color = waiting
        .map(|s| s.color_code.clone())
        .or_else(|| {
            find_by_key(catalog, &CanonicalStatusKey::Completed).map(|s| s.color_code.clone())
        })
        .unwrap_or_default();
    let id = waiting
        .map(|s| s.to_string_id())
        .unwrap_or_else(|| CanonicalStatusKey::WaitingForApproval.as_str().to_string());

    vec![TransitionOption {
        id,
        label: CanonicalStatusKey::WaitingForApproval.label(),
        color,
        is_completed_for_display: false,
        is_actionable: false,
    }]
}

fn full_catalog(current: &CanonicalStatusKey, catalog: &[JobStatus]) -> Vec<TransitionOption> {
    catalog.iter().map(|s| to_option(current, s)).collect()
}

fn to_option(current: &CanonicalStatusKey, status: &JobStatus) -> TransitionOption {
    let option_key = canonicalize(&status.title);
    TransitionOption {
        id: status.to_string_id(),
        label: status.title.clone(),
        color: status.color_code.clone(),
        is_completed_for_display: is_passed_phase(current, &option_key),
        is_actionable: true,
    }
}

fn find_by_key<'a>(catalog: &'a [JobStatus], key: &CanonicalStatusKey) -> Option<&'a JobStatus> {
    catalog.iter().find(|s| canonicalize(&s.title) == *key)
}

/// Defensive second pass for catalog entries whose canonicalization does not
/// land on the exact key (e.g. "Route To Client" for enroute): loose token
/// match over the packed lowercase title.
fn find_by_loose_title<'a>(
    catalog: &'a [JobStatus],
    key: &CanonicalStatusKey,
) -> Option<&'a JobStatus> {
    let tokens = loose_tokens(key);
    if tokens.is_empty() {
        return None;
    }
    catalog.iter().find(|s| {
        let packed: String = s
            .title
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        tokens.iter().any(|t| packed.contains(t))
    })
}

fn loose_tokens(key: &CanonicalStatusKey) -> &'static [&'static str] {
    match key {
        CanonicalStatusKey::Enroute => &["rout"],
        CanonicalStatusKey::Onsite => &["site"],
        CanonicalStatusKey::Onhold => &["hold", "pause"],
        CanonicalStatusKey::Resume => &["resum", "reopen", "continue"],
        CanonicalStatusKey::Completed => &["complet", "done"],
        CanonicalStatusKey::Unresolved => &["unresolv"],
        _ => &[],
    }
}

/// Linear progress rank; only the happy-path phases participate.
fn phase_rank(key: &CanonicalStatusKey) -> Option<u8> {
    match key {
        CanonicalStatusKey::NotStarted => Some(0),
        CanonicalStatusKey::Approved => Some(1),
        CanonicalStatusKey::Assigned => Some(2),
        CanonicalStatusKey::Enroute => Some(3),
        CanonicalStatusKey::Onsite => Some(4),
        CanonicalStatusKey::Completed => Some(5),
        _ => None,
    }
}

fn is_passed_phase(current: &CanonicalStatusKey, option_key: &CanonicalStatusKey) -> bool {
    match (phase_rank(current), phase_rank(option_key)) {
        (Some(c), Some(o)) => o < c,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(title: &str) -> JobStatus {
        JobStatus::new_for_insert(title.to_string(), "#cccccc".to_string())
    }

    fn full_catalog_fixture() -> Vec<JobStatus> {
        vec![
            st("Not Started"),
            st("Approved"),
            st("Assigned Technician"),
            st("En Route"),
            st("On Site"),
            st("On Hold"),
            st("Resume"),
            st("Completed"),
            st("Rejected"),
            st("Unresolved"),
        ]
    }

    fn labels(options: &[TransitionOption]) -> Vec<String> {
        options.iter().map(|o| o.label.clone()).collect()
    }

    #[test]
    fn test_not_started_offers_approve_reject_pair() {
        let catalog = vec![st("Assigned"), st("Rejected")];
        let out = build_transition_set(&CanonicalStatusKey::NotStarted, &catalog, None);
        assert_eq!(labels(&out), vec!["Approve", "Reject"]);
        // "Approve" maps to the assigned entry when no approved entry exists
        assert_eq!(out[0].id, catalog[0].to_string_id());
        assert_eq!(out[1].id, catalog[1].to_string_id());
    }

    #[test]
    fn test_not_started_prefers_approved_entry() {
        let catalog = vec![st("Assigned"), st("Approved"), st("Rejected")];
        let out = build_transition_set(&CanonicalStatusKey::NotStarted, &catalog, None);
        assert_eq!(out[0].id, catalog[1].to_string_id());
    }

    #[test]
    fn test_not_started_falls_back_to_full_catalog() {
        let catalog = vec![st("On Hold"), st("Completed")];
        let out = build_transition_set(&CanonicalStatusKey::NotStarted, &catalog, None);
        assert_eq!(out.len(), catalog.len());
    }

    #[test]
    fn test_execution_phase_base_set_with_hold() {
        let catalog = full_catalog_fixture();
        let out = build_transition_set(&CanonicalStatusKey::Assigned, &catalog, None);
        assert_eq!(
            labels(&out),
            vec!["En Route", "On Site", "On Hold", "Completed", "Unresolved"]
        );
    }

    #[test]
    fn test_onhold_offers_resume_instead_of_hold() {
        let catalog = full_catalog_fixture();
        let out = build_transition_set(&CanonicalStatusKey::Onhold, &catalog, None);
        assert_eq!(
            labels(&out),
            vec!["En Route", "On Site", "Resume", "Completed", "Unresolved"]
        );
    }

    #[test]
    fn test_loose_title_fallback() {
        // No entry canonicalizes to enroute, but one matches loosely
        let catalog = vec![st("Route To Client"), st("On Site"), st("Completed")];
        let out = build_transition_set(&CanonicalStatusKey::Approved, &catalog, None);
        assert!(out.iter().any(|o| o.label == "Route To Client"));
    }

    #[test]
    fn test_dedup_by_id_keeps_first_seen() {
        // A single entry that resolves for two wanted keys must appear once.
        let catalog = vec![st("En Route"), st("Site Work Completed")];
        let out = build_transition_set(&CanonicalStatusKey::Approved, &catalog, None);
        let mut ids: Vec<&str> = out.iter().map(|o| o.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), out.len());
    }

    #[test]
    fn test_waiting_for_approval_collapses() {
        let catalog = full_catalog_fixture();
        let out =
            build_transition_set(&CanonicalStatusKey::WaitingForApproval, &catalog, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "Waiting For Approval");
    }

    #[test]
    fn test_waiting_entry_is_display_only() {
        // With or without a literal catalog entry, the waiting collapse must
        // never be offered as a submittable transition.
        let mut catalog = full_catalog_fixture();
        catalog.push(st("Waiting For Approval"));
        let out =
            build_transition_set(&CanonicalStatusKey::WaitingForApproval, &catalog, None);
        assert!(out.iter().all(|o| !o.is_actionable));

        let catalog = vec![st("Not Started"), st("Completed")];
        let out =
            build_transition_set(&CanonicalStatusKey::WaitingForApproval, &catalog, None);
        assert_eq!(out[0].id, "waiting_for_approval");
        assert!(!out[0].is_actionable);

        // Every other branch stays actionable
        let out = build_transition_set(&CanonicalStatusKey::Assigned, &full_catalog_fixture(), None);
        assert!(out.iter().all(|o| o.is_actionable));
    }

    #[test]
    fn test_waiting_borrows_completed_color_when_absent() {
        let completed = JobStatus::new_for_insert("Completed".into(), "#00aa00".into());
        let catalog = vec![st("Not Started"), completed];
        let out =
            build_transition_set(&CanonicalStatusKey::WaitingForApproval, &catalog, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].color, "#00aa00");
        assert_eq!(out[0].id, "waiting_for_approval");
    }

    #[test]
    fn test_server_allow_list_overrides() {
        let catalog = full_catalog_fixture();
        let allowed = vec![catalog[7].clone(), catalog[9].clone()];
        let out =
            build_transition_set(&CanonicalStatusKey::NotStarted, &catalog, Some(&allowed));
        // Catalog order is preserved, labels are the raw titles
        assert_eq!(labels(&out), vec!["Completed", "Unresolved"]);
    }

    #[test]
    fn test_empty_server_list_is_ignored() {
        let catalog = vec![st("Assigned"), st("Rejected")];
        let out = build_transition_set(&CanonicalStatusKey::NotStarted, &catalog, Some(&[]));
        assert_eq!(labels(&out), vec!["Approve", "Reject"]);
    }

    #[test]
    fn test_unrecognized_key_returns_full_catalog() {
        let catalog = full_catalog_fixture();
        let key = CanonicalStatusKey::Other("waiting for parts".to_string());
        let out = build_transition_set(&key, &catalog, None);
        assert_eq!(out.len(), catalog.len());
    }

    #[test]
    fn test_never_empty_for_non_empty_catalog() {
        let catalog = vec![st("Something Odd")];
        let keys = [
            CanonicalStatusKey::NotStarted,
            CanonicalStatusKey::Approved,
            CanonicalStatusKey::Assigned,
            CanonicalStatusKey::Enroute,
            CanonicalStatusKey::Onsite,
            CanonicalStatusKey::Onhold,
            CanonicalStatusKey::Resume,
            CanonicalStatusKey::WaitingForApproval,
            CanonicalStatusKey::Other("x".to_string()),
            CanonicalStatusKey::Empty,
        ];
        for key in keys {
            let out = build_transition_set(&key, &catalog, None);
            assert!(!out.is_empty(), "empty set for {:?}", key);
        }
    }

    #[test]
    fn test_passed_phases_are_marked_completed() {
        let catalog = full_catalog_fixture();
        let out = build_transition_set(&CanonicalStatusKey::Onsite, &catalog, None);
        let enroute = out.iter().find(|o| o.label == "En Route").unwrap();
        assert!(enroute.is_completed_for_display);
        let completed = out.iter().find(|o| o.label == "Completed").unwrap();
        assert!(!completed.is_completed_for_display);
        let hold = out.iter().find(|o| o.label == "On Hold").unwrap();
        assert!(!hold.is_completed_for_display);
    }
}
