use super::{
    repository::AdminRepository,
    utils::{mark_verified, remove_listing, split_by_verification},
};
use crate::api::{ApiError, Property};
use crate::state::auth::use_session;
use leptos::*;
use std::rc::Rc;

type Columns = (Vec<Property>, Vec<Property>);

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub properties: Resource<(), Result<Vec<Property>, ApiError>>,
    /// Pending and verified listings once loaded.
    pub columns: Memo<Option<Result<Columns, ApiError>>>,
    pub verify_action: Action<String, Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub action_error: RwSignal<Option<ApiError>>,
}

impl AdminViewModel {
    pub fn verify(&self, id: String) {
        self.action_error.set(None);
        self.verify_action.dispatch(id);
    }

    pub fn ask_delete(&self, id: String) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.action_error.set(None);
            self.delete_action.dispatch(id);
        }
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    let session = use_session();
    let repo = AdminRepository::new_with_client(Rc::new(session.api().clone()));

    let repo_list = repo.clone();
    let properties = create_resource(
        || (),
        move |_| {
            let repo = repo_list.clone();
            async move { repo.all_properties().await }
        },
    );

    let columns = create_memo(move |_| {
        properties.with(|loaded| {
            loaded.as_ref().map(|result| match result {
                Ok(list) => Ok(split_by_verification(list)),
                Err(err) => Err(err.clone()),
            })
        })
    });

    let action_error = create_rw_signal(None::<ApiError>);
    let pending_delete = create_rw_signal(None::<String>);

    let repo_verify = repo.clone();
    let verify_action = create_action(move |id: &String| {
        let repo = repo_verify.clone();
        let id = id.clone();
        async move { repo.verify(&id).await }
    });

    let delete_action = create_action(move |id: &String| {
        let repo = repo.clone();
        let id = id.clone();
        async move { repo.delete(&id).await }
    });

    create_effect(move |_| match verify_action.value().get() {
        Some(Ok(())) => {
            if let Some(id) = verify_action.input().get_untracked() {
                log::info!("listing {id} verified");
                properties.update(|loaded| {
                    if let Some(Ok(list)) = loaded {
                        mark_verified(list, &id);
                    }
                });
            }
        }
        Some(Err(err)) => action_error.set(Some(err)),
        None => {}
    });

    create_effect(move |_| match delete_action.value().get() {
        Some(Ok(())) => {
            if let Some(id) = delete_action.input().get_untracked() {
                log::info!("listing {id} deleted");
                properties.update(|loaded| {
                    if let Some(Ok(list)) = loaded {
                        remove_listing(list, &id);
                    }
                });
            }
        }
        Some(Err(err)) => action_error.set(Some(err)),
        None => {}
    });

    AdminViewModel {
        properties,
        columns,
        verify_action,
        delete_action,
        pending_delete,
        action_error,
    }
}
