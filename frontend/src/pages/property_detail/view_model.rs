use super::{
    repository::PropertyDetailRepository,
    utils::{build_inquiry, INQUIRY_LOGIN_MESSAGE},
};
use crate::api::{ApiError, CreateInquiry, Inquiry, Property};
use crate::state::auth::use_session;
use crate::utils::navigation::go_to;
use leptos::*;
use std::rc::Rc;

const AFTER_DELETE_ROUTE: &str = "/dashboard";

#[derive(Clone, Copy)]
pub struct PropertyDetailViewModel {
    pub id: StoredValue<String>,
    pub property: Resource<String, Result<Property, ApiError>>,
    pub similar: Resource<Option<Property>, Vec<Property>>,
    pub signed_in: Memo<bool>,
    pub can_manage: Memo<bool>,
    pub message: RwSignal<String>,
    pub inquiry_error: RwSignal<Option<ApiError>>,
    pub inquiry_sent: RwSignal<bool>,
    pub inquiry_action: Action<CreateInquiry, Result<Inquiry, ApiError>>,
    pub confirm_delete: RwSignal<bool>,
    pub delete_error: RwSignal<Option<ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl PropertyDetailViewModel {
    pub fn submit_inquiry(&self) {
        if !self.signed_in.get_untracked() {
            self.inquiry_error
                .set(Some(ApiError::authentication(INQUIRY_LOGIN_MESSAGE)));
            return;
        }
        let id = self.id.get_value();
        match build_inquiry(&id, &self.message.get_untracked()) {
            Ok(payload) => {
                self.inquiry_error.set(None);
                self.inquiry_action.dispatch(payload);
            }
            Err(err) => self.inquiry_error.set(Some(err)),
        }
    }

    pub fn delete(&self) {
        self.confirm_delete.set(false);
        self.delete_action.dispatch(self.id.get_value());
    }
}

pub fn use_property_detail_view_model(id: String) -> PropertyDetailViewModel {
    let session = use_session();
    let auth = session.state();
    let repo = PropertyDetailRepository::new_with_client(Rc::new(session.api().clone()));
    let id = store_value(id);

    let repo_fetch = repo.clone();
    let property = create_resource(
        move || id.get_value(),
        move |id| {
            let repo = repo_fetch.clone();
            async move { repo.fetch(&id).await }
        },
    );

    let repo_similar = repo.clone();
    let similar = create_resource(
        move || property.get().and_then(Result::ok),
        move |loaded| {
            let repo = repo_similar.clone();
            async move {
                let Some(loaded) = loaded else {
                    return Vec::new();
                };
                repo.similar(&loaded).await.unwrap_or_else(|err| {
                    log::warn!("similar listings unavailable: {err}");
                    Vec::new()
                })
            }
        },
    );

    let signed_in = create_memo(move |_| auth.with(|state| state.is_authenticated));
    let can_manage = create_memo(move |_| {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .is_some_and(|user| user.can_manage_listings())
        })
    });

    let message = create_rw_signal(String::new());
    let inquiry_error = create_rw_signal(None::<ApiError>);
    let inquiry_sent = create_rw_signal(false);
    let repo_inquiry = repo.clone();
    let inquiry_action = create_action(move |payload: &CreateInquiry| {
        let repo = repo_inquiry.clone();
        let payload = payload.clone();
        async move { repo.send_inquiry(&payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = inquiry_action.value().get() {
            match result {
                Ok(inquiry) => {
                    log::info!("inquiry {} sent", inquiry.id);
                    message.set(String::new());
                    inquiry_sent.set(true);
                }
                Err(err) => inquiry_error.set(Some(err)),
            }
        }
    });

    let confirm_delete = create_rw_signal(false);
    let delete_error = create_rw_signal(None::<ApiError>);
    let delete_action = create_action(move |id: &String| {
        let repo = repo.clone();
        let id = id.clone();
        async move { repo.delete(&id).await }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => go_to(AFTER_DELETE_ROUTE),
                Err(err) => delete_error.set(Some(err)),
            }
        }
    });

    PropertyDetailViewModel {
        id,
        property,
        similar,
        signed_in,
        can_manage,
        message,
        inquiry_error,
        inquiry_sent,
        inquiry_action,
        confirm_delete,
        delete_error,
        delete_action,
    }
}
