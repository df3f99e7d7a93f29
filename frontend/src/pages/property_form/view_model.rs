use super::{
    repository::PropertyFormRepository,
    utils::{listing_href, DraftFormState, FormMode},
};
use crate::api::{ApiError, Property, PropertyDraft};
use crate::state::auth::use_session;
use crate::utils::navigation::go_to;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct PropertyFormViewModel {
    pub mode: StoredValue<FormMode>,
    pub form: DraftFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub can_manage: Memo<bool>,
    /// The listing being edited; `None` when creating.
    pub existing: Resource<Option<String>, Option<Result<Property, ApiError>>>,
    pub save_action: Action<PropertyDraft, Result<Property, ApiError>>,
}

impl PropertyFormViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let draft = self.form.snapshot();
        let mode = self.mode.with_value(FormMode::draft_mode);
        match draft.validate(mode) {
            Ok(()) => {
                self.error.set(None);
                self.save_action.dispatch(draft);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_property_form_view_model(mode: FormMode) -> PropertyFormViewModel {
    let session = use_session();
    let auth = session.state();
    let repo = PropertyFormRepository::new_with_client(Rc::new(session.api().clone()));
    let mode = store_value(mode);
    let form = DraftFormState::default();
    let error = create_rw_signal(None::<ApiError>);

    let can_manage = create_memo(move |_| {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .is_some_and(|user| user.can_manage_listings())
        })
    });

    let repo_fetch = repo.clone();
    let existing = create_resource(
        move || match mode.get_value() {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        },
        move |id| {
            let repo = repo_fetch.clone();
            async move {
                match id {
                    Some(id) => Some(repo.fetch(&id).await),
                    None => None,
                }
            }
        },
    );

    create_effect(move |_| {
        if let Some(Some(Ok(property))) = existing.get() {
            form.fill(&property);
        }
    });

    let save_action = create_action(move |draft: &PropertyDraft| {
        let repo = repo.clone();
        let draft = draft.clone();
        async move {
            match mode.get_value() {
                FormMode::Create => repo.create(&draft).await,
                FormMode::Edit(id) => repo.update(&id, &draft).await,
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(saved) => {
                    log::info!("listing {} saved", saved.id);
                    go_to(&listing_href(&saved.id));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    PropertyFormViewModel {
        mode,
        form,
        error,
        can_manage,
        existing,
        save_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::{
        helpers::{owner, property, provide_session},
        ssr::with_offline_runtime,
    };

    #[test]
    fn new_listings_need_an_image_before_posting() {
        with_offline_runtime(|| {
            provide_session(AuthState::signed_in(owner()));
            let vm = use_property_form_view_model(FormMode::Create);
            vm.form.fill(&property("1"));

            vm.submit();

            assert_eq!(
                vm.error.get_untracked().map(|e| e.error),
                Some("Please upload at least one property image.".to_string())
            );
            assert!(vm.save_action.input().get_untracked().is_none());
        });
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        with_offline_runtime(|| {
            provide_session(AuthState::signed_in(owner()));
            let vm = use_property_form_view_model(FormMode::Edit("5".into()));
            vm.form.title.set("Sea Breeze".into());

            vm.submit();

            assert_eq!(
                vm.error.get_untracked().map(|e| e.error),
                Some("Description is required.".to_string())
            );
        });
    }

    #[test]
    fn editing_accepts_a_draft_without_new_images() {
        with_offline_runtime(|| {
            provide_session(AuthState::signed_in(owner()));
            let vm = use_property_form_view_model(FormMode::Edit("5".into()));
            vm.form.fill(&property("5"));

            vm.submit();

            assert!(vm.error.get_untracked().is_none());
        });
    }
}
