use crate::api::{Inquiry, InquiryDecision, InquiryStatus, User};

pub fn subtitle(user: Option<&User>) -> &'static str {
    match user {
        Some(user) if user.is_admin() => "Manage properties and inquiries",
        Some(user) if user.can_manage_listings() => "Manage your property listings",
        _ => "Track your property inquiries",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InquiryCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl InquiryCounts {
    pub fn tally(inquiries: &[Inquiry]) -> Self {
        inquiries.iter().fold(Self::default(), |mut counts, inquiry| {
            counts.total += 1;
            match inquiry.status {
                InquiryStatus::Pending => counts.pending += 1,
                InquiryStatus::Approved => counts.approved += 1,
                InquiryStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
    }
}

/// Applies a confirmed decision to the cached list. Returns `false` when the
/// inquiry is unknown or no longer pending.
pub fn apply_decision(inquiries: &mut [Inquiry], id: &str, decision: InquiryDecision) -> bool {
    match inquiries
        .iter_mut()
        .find(|inquiry| inquiry.id == id && inquiry.status == InquiryStatus::Pending)
    {
        Some(inquiry) => {
            inquiry.status = decision.resulting_status();
            true
        }
        None => false,
    }
}

pub fn status_badge(status: InquiryStatus) -> &'static str {
    match status {
        InquiryStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        InquiryStatus::Approved => "bg-status-success-bg text-status-success-text",
        InquiryStatus::Rejected => "bg-status-error-bg text-status-error-text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin, buyer, owner};

    fn inquiry(id: &str, status: InquiryStatus) -> Inquiry {
        Inquiry {
            id: id.into(),
            message: "Still available?".into(),
            status,
            property: None,
            user: None,
            created_at: None,
        }
    }

    #[test]
    fn subtitle_follows_role() {
        assert_eq!(subtitle(Some(&admin())), "Manage properties and inquiries");
        assert_eq!(subtitle(Some(&owner())), "Manage your property listings");
        assert_eq!(subtitle(Some(&buyer())), "Track your property inquiries");
        assert_eq!(subtitle(None), "Track your property inquiries");
    }

    #[test]
    fn counts_each_status() {
        let list = vec![
            inquiry("1", InquiryStatus::Pending),
            inquiry("2", InquiryStatus::Pending),
            inquiry("3", InquiryStatus::Approved),
            inquiry("4", InquiryStatus::Rejected),
        ];
        assert_eq!(
            InquiryCounts::tally(&list),
            InquiryCounts {
                total: 4,
                pending: 2,
                approved: 1,
                rejected: 1,
            }
        );
        assert_eq!(InquiryCounts::tally(&[]), InquiryCounts::default());
    }

    #[test]
    fn decisions_only_move_pending_inquiries() {
        let mut list = vec![
            inquiry("1", InquiryStatus::Pending),
            inquiry("2", InquiryStatus::Approved),
        ];

        assert!(apply_decision(&mut list, "1", InquiryDecision::Reject));
        assert_eq!(list[0].status, InquiryStatus::Rejected);

        assert!(!apply_decision(&mut list, "2", InquiryDecision::Reject));
        assert_eq!(list[1].status, InquiryStatus::Approved);

        assert!(!apply_decision(&mut list, "9", InquiryDecision::Approve));
    }
}
