use super::{repository::PropertiesRepository, utils::FilterFormState};
use crate::api::{ApiError, ListingType, Property, PropertyFilters, SortOrder};
use crate::state::auth::use_session;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct PropertiesViewModel {
    pub tab: RwSignal<ListingType>,
    pub form: FilterFormState,
    pub applied: RwSignal<PropertyFilters>,
    pub sort: RwSignal<SortOrder>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub results: Resource<PropertyFilters, Result<Vec<Property>, ApiError>>,
    /// `results` in the chosen sort order.
    pub sorted: Memo<Option<Result<Vec<Property>, ApiError>>>,
}

impl PropertiesViewModel {
    pub fn select_tab(&self, kind: ListingType) {
        self.tab.set(kind);
        self.apply_filters();
    }

    /// Publishes the typed filters; the listing reloads when they change.
    pub fn apply_filters(&self) {
        match self.form.to_filters(self.tab.get_untracked()) {
            Ok(filters) => {
                self.form_error.set(None);
                if self.applied.with_untracked(|current| current != &filters) {
                    self.applied.set(filters);
                }
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }

    pub fn clear_filters(&self) {
        self.form.reset();
        self.apply_filters();
    }
}

pub fn use_properties_view_model(initial_tab: ListingType, initial_search: String) -> PropertiesViewModel {
    let repo = PropertiesRepository::new_with_client(Rc::new(use_session().api().clone()));
    let tab = create_rw_signal(initial_tab);
    let form = FilterFormState::new(initial_search);
    let form_error = create_rw_signal(None::<ApiError>);
    let initial = form.to_filters(initial_tab).unwrap_or_else(|_| PropertyFilters {
        property_type: Some(initial_tab),
        ..PropertyFilters::default()
    });
    let applied = create_rw_signal(initial);
    let sort = create_rw_signal(SortOrder::default());

    let results = create_resource(
        move || applied.get(),
        move |filters| {
            let repo = repo.clone();
            async move {
                let found = repo.search(&filters).await;
                if let Err(err) = &found {
                    log::warn!("listing search failed: {err}");
                }
                found
            }
        },
    );

    let sorted = create_memo(move |_| {
        let order = sort.get();
        results.get().map(|result| {
            result.map(|mut listings| {
                order.apply(&mut listings);
                listings
            })
        })
    });

    PropertiesViewModel {
        tab,
        form,
        applied,
        sort,
        form_error,
        results,
        sorted,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::{
        helpers::{property, provide_session},
        ssr::with_offline_runtime,
    };

    #[test]
    fn initial_query_seeds_the_applied_filters() {
        with_offline_runtime(|| {
            provide_session(AuthState::anonymous());
            let vm = use_properties_view_model(ListingType::Rent, "Baner".into());
            let applied = vm.applied.get_untracked();
            assert_eq!(applied.property_type, Some(ListingType::Rent));
            assert_eq!(applied.query.as_deref(), Some("Baner"));
        });
    }

    #[test]
    fn switching_tabs_keeps_typed_filters() {
        with_offline_runtime(|| {
            provide_session(AuthState::anonymous());
            let vm = use_properties_view_model(ListingType::Sale, String::new());
            vm.form.city.set("Pune".into());

            vm.select_tab(ListingType::Lease);

            let applied = vm.applied.get_untracked();
            assert_eq!(applied.property_type, Some(ListingType::Lease));
            assert_eq!(applied.city.as_deref(), Some("Pune"));
        });
    }

    #[test]
    fn invalid_filters_keep_the_previous_search() {
        with_offline_runtime(|| {
            provide_session(AuthState::anonymous());
            let vm = use_properties_view_model(ListingType::Sale, String::new());
            let before = vm.applied.get_untracked();
            vm.form.max_price.set("cheap".into());

            vm.apply_filters();

            assert!(vm.form_error.get_untracked().is_some());
            assert_eq!(vm.applied.get_untracked(), before);
        });
    }

    #[test]
    fn sort_order_applies_to_loaded_results() {
        with_offline_runtime(|| {
            provide_session(AuthState::anonymous());
            let vm = use_properties_view_model(ListingType::Sale, String::new());
            let mut cheap = property("cheap");
            cheap.price = 1_000_000.0;
            vm.results.set(Ok(vec![property("dear"), cheap]));

            vm.sort.set(SortOrder::PriceLow);
            let ids: Vec<String> = vm
                .sorted
                .get_untracked()
                .and_then(Result::ok)
                .unwrap_or_default()
                .into_iter()
                .map(|listing| listing.id)
                .collect();
            assert_eq!(ids, vec!["cheap", "dear"]);
        });
    }
}
