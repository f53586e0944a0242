use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file submitted by a member against a task, or as general evidence
/// when `task_id` is absent. Owned by the remote service; the client keeps
/// a read-mostly copy per workspace view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSubmission {
    pub id: i32,
    pub mission_id: i32,
    pub brawler_id: i32,
    pub brawler_name: String,
    pub file_url: String,
    pub file_name: String,
    pub file_type: String,
    pub submitted_at: DateTime<Utc>,
    pub task_id: Option<i32>,
    pub brawler_avatar_url: Option<String>,
    pub description: Option<String>,
}

/// The three independent constraints over a submission list. Present
/// constraints are ANDed; an absent constraint matches everything in its
/// dimension. An empty `search_text` means unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvidenceFilter {
    pub member_id: Option<i32>,
    pub task_id: Option<i32>,
    pub search_text: String,
}

impl EvidenceFilter {
    pub fn is_active(&self) -> bool {
        self.member_id.is_some() || self.task_id.is_some() || !self.search_text.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, submission: &EvidenceSubmission) -> bool {
        if let Some(member_id) = self.member_id {
            if submission.brawler_id != member_id {
                return false;
            }
        }

        // A submission without a task never matches a set task filter.
        if let Some(task_id) = self.task_id {
            if submission.task_id != Some(task_id) {
                return false;
            }
        }

        if !self.search_text.is_empty() {
            let needle = self.search_text.to_lowercase();
            if !submission.file_name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }

    /// The visible subset of `base` under the current constraints: a stable
    /// filter preserving original order, with no deduplication. With every
    /// constraint clear this returns `base` unchanged.
    pub fn visible(&self, base: &[EvidenceSubmission]) -> Vec<EvidenceSubmission> {
        base.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

/// Optimistic local delete: drops the submission from the cached copy.
pub fn remove_submission(submissions: &mut Vec<EvidenceSubmission>, id: i32) {
    submissions.retain(|s| s.id != id);
}

/// Patches a confirmed description edit into the cached copy in place.
pub fn patch_description(submissions: &mut [EvidenceSubmission], id: i32, description: &str) {
    if let Some(submission) = submissions.iter_mut().find(|s| s.id == id) {
        submission.description = Some(description.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn submission(id: i32, brawler_id: i32, task_id: Option<i32>, file_name: &str) -> EvidenceSubmission {
        EvidenceSubmission {
            id,
            mission_id: 1,
            brawler_id,
            brawler_name: format!("brawler-{brawler_id}"),
            file_url: format!("https://files.example/{file_name}"),
            file_name: file_name.into(),
            file_type: "application/octet-stream".into(),
            submitted_at: Utc.timestamp_opt(1_767_000_000, 0).single().expect("timestamp"),
            task_id,
            brawler_avatar_url: None,
            description: None,
        }
    }

    fn base() -> Vec<EvidenceSubmission> {
        vec![
            submission(1, 7, Some(3), "report.pdf"),
            submission(2, 9, None, "Photo.JPG"),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let base = base();
        let visible = EvidenceFilter::default().visible(&base);
        assert_eq!(visible.len(), base.len());
        let ids: Vec<i32> = visible.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn member_filter_keeps_matching_brawler() {
        let filter = EvidenceFilter {
            member_id: Some(7),
            ..Default::default()
        };
        let visible = filter.visible(&base());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn member_filter_is_idempotent() {
        let filter = EvidenceFilter {
            member_id: Some(7),
            ..Default::default()
        };
        let once = filter.visible(&base());
        let twice = filter.visible(&once);
        let once_ids: Vec<i32> = once.iter().map(|s| s.id).collect();
        let twice_ids: Vec<i32> = twice.iter().map(|s| s.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn search_matches_case_insensitively() {
        let filter = EvidenceFilter {
            search_text: "photo".into(),
            ..Default::default()
        };
        let visible = filter.visible(&base());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn task_filter_skips_untasked_submissions() {
        let filter = EvidenceFilter {
            task_id: Some(3),
            ..Default::default()
        };
        let visible = filter.visible(&base());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn constraints_are_anded() {
        let filter = EvidenceFilter {
            member_id: Some(9),
            task_id: Some(3),
            ..Default::default()
        };
        assert!(filter.visible(&base()).is_empty());
    }

    #[test]
    fn clearing_restores_the_full_base() {
        let base = base();
        let mut filter = EvidenceFilter {
            member_id: Some(9),
            task_id: Some(3),
            search_text: "pdf".into(),
        };
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.visible(&base).len(), base.len());
    }

    #[test]
    fn search_text_is_not_trimmed() {
        let filter = EvidenceFilter {
            search_text: " pdf".into(),
            ..Default::default()
        };
        assert!(filter.visible(&base()).is_empty());
    }

    #[test]
    fn remove_submission_drops_by_id() {
        let mut subs = base();
        remove_submission(&mut subs, 1);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].id, 2);

        remove_submission(&mut subs, 99);
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn patch_description_edits_in_place() {
        let mut subs = base();
        patch_description(&mut subs, 2, "crime scene photo");
        assert_eq!(subs[1].description.as_deref(), Some("crime scene photo"));
        assert_eq!(subs[0].description, None);
    }
}
