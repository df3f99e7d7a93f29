use super::{
    repository::DashboardRepository,
    utils::{apply_decision, InquiryCounts},
};
use crate::api::{ApiError, Inquiry, InquiryDecision, Property, User};
use crate::state::auth::use_session;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub user: Memo<Option<User>>,
    pub can_manage: Memo<bool>,
    pub listings: Resource<bool, Result<Vec<Property>, ApiError>>,
    pub inquiries: Resource<(), Result<Vec<Inquiry>, ApiError>>,
    pub counts: Memo<InquiryCounts>,
    pub decide_action: Action<(String, InquiryDecision), Result<(), ApiError>>,
    pub decide_error: RwSignal<Option<ApiError>>,
}

impl DashboardViewModel {
    pub fn decide(&self, id: String, decision: InquiryDecision) {
        if self.decide_action.pending().get_untracked() {
            return;
        }
        self.decide_error.set(None);
        self.decide_action.dispatch((id, decision));
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let session = use_session();
    let auth = session.state();
    let repo = DashboardRepository::new_with_client(Rc::new(session.api().clone()));

    let user = create_memo(move |_| auth.with(|state| state.user.clone()));
    let can_manage = create_memo(move |_| {
        user.with(|user| user.as_ref().is_some_and(User::can_manage_listings))
    });

    let repo_listings = repo.clone();
    let listings = create_resource(
        move || can_manage.get(),
        move |can_manage| {
            let repo = repo_listings.clone();
            async move {
                if can_manage {
                    repo.my_listings().await
                } else {
                    Ok(Vec::new())
                }
            }
        },
    );

    let repo_inquiries = repo.clone();
    let inquiries = create_resource(
        || (),
        move |_| {
            let repo = repo_inquiries.clone();
            async move { repo.inquiries().await }
        },
    );

    let counts = create_memo(move |_| {
        inquiries.with(|loaded| match loaded {
            Some(Ok(list)) => InquiryCounts::tally(list),
            _ => InquiryCounts::default(),
        })
    });

    let decide_error = create_rw_signal(None::<ApiError>);
    let decide_action = create_action(move |(id, decision): &(String, InquiryDecision)| {
        let repo = repo.clone();
        let id = id.clone();
        let decision = *decision;
        async move { repo.decide(&id, decision).await }
    });

    create_effect(move |_| {
        let Some(result) = decide_action.value().get() else {
            return;
        };
        match result {
            Ok(()) => {
                if let Some((id, decision)) = decide_action.input().get_untracked() {
                    inquiries.update(|loaded| {
                        if let Some(Ok(list)) = loaded {
                            apply_decision(list, &id, decision);
                        }
                    });
                }
            }
            Err(err) => decide_error.set(Some(err)),
        }
    });

    DashboardViewModel {
        user,
        can_manage,
        listings,
        inquiries,
        counts,
        decide_action,
        decide_error,
    }
}
