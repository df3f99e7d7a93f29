use super::{repository::HomeRepository, utils::FEATURED_LIMIT};
use crate::api::{ApiError, ListingType, Property};
use crate::state::auth::use_session;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct HomeViewModel {
    pub search: RwSignal<String>,
    pub kind: RwSignal<Option<ListingType>>,
    pub featured: Resource<(), Result<Vec<Property>, ApiError>>,
}

pub fn use_home_view_model() -> HomeViewModel {
    let repo = HomeRepository::new_with_client(Rc::new(use_session().api().clone()));
    let featured = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move {
                let mut listings = repo.featured().await?;
                listings.truncate(FEATURED_LIMIT);
                Ok(listings)
            }
        },
    );

    HomeViewModel {
        search: create_rw_signal(String::new()),
        kind: create_rw_signal(None),
        featured,
    }
}
