use std::rc::Rc;

use crate::{
    api::{ApiError, FavoriteProperty, Property},
    state::auth::{use_session, Session},
    utils::{storage::KeyValueStore, token_store::FAVORITES_KEY},
};
use leptos::*;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login to add favorites";

/// Saved listings for this browser profile, kept under the `favorites` key.
#[derive(Clone)]
pub struct Favorites {
    session: Session,
    storage: Rc<dyn KeyValueStore>,
    entries: RwSignal<Vec<FavoriteProperty>>,
}

impl Favorites {
    pub fn new(session: Session) -> Self {
        let storage = session.api().tokens().storage();
        let entries = create_rw_signal(load(storage.as_ref()));
        Self {
            session,
            storage,
            entries,
        }
    }

    pub fn entries(&self) -> RwSignal<Vec<FavoriteProperty>> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.with_untracked(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tracked, so views re-render when the list changes.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.with(|list| list.iter().any(|entry| entry.id == id))
    }

    /// `Ok(false)` when the listing is already saved.
    pub fn add(&self, property: &Property) -> Result<bool, ApiError> {
        self.add_entry(FavoriteProperty::from(property))
    }

    pub fn add_entry(&self, entry: FavoriteProperty) -> Result<bool, ApiError> {
        if !self.session.is_authenticated() {
            return Err(ApiError::authentication(LOGIN_REQUIRED_MESSAGE));
        }
        let mut next = self.entries.get_untracked();
        if next.iter().any(|saved| saved.id == entry.id) {
            return Ok(false);
        }
        log::debug!("saving listing {}", entry.id);
        next.push(entry);
        self.commit(next)?;
        Ok(true)
    }

    /// `Ok(false)` when the listing was not saved; nothing is written then.
    pub fn remove(&self, id: &str) -> Result<bool, ApiError> {
        let mut next = self.entries.get_untracked();
        let before = next.len();
        next.retain(|entry| entry.id != id);
        if next.len() == before {
            return Ok(false);
        }
        self.commit(next)?;
        Ok(true)
    }

    /// Returns whether the listing is saved afterwards.
    pub fn toggle(&self, entry: FavoriteProperty) -> Result<bool, ApiError> {
        let saved = self
            .entries
            .with_untracked(|list| list.iter().any(|saved| saved.id == entry.id));
        if saved {
            self.remove(&entry.id).map(|_| false)
        } else {
            self.add_entry(entry).map(|_| true)
        }
    }

    fn commit(&self, next: Vec<FavoriteProperty>) -> Result<(), ApiError> {
        let raw = serde_json::to_string(&next)
            .map_err(|e| ApiError::storage(format!("Failed to serialize favorites: {e}")))?;
        self.storage.set(FAVORITES_KEY, &raw)?;
        self.entries.set(next);
        Ok(())
    }
}

fn load(storage: &dyn KeyValueStore) -> Vec<FavoriteProperty> {
    let Some(raw) = storage.get(FAVORITES_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("ignoring unreadable favorites: {err}");
            Vec::new()
        }
    }
}

#[component]
pub fn FavoritesProvider(children: Children) -> impl IntoView {
    provide_context(Favorites::new(use_session()));
    view! { <>{children()}</> }
}

pub fn use_favorites() -> Favorites {
    use_context::<Favorites>().unwrap_or_else(|| Favorites::new(use_session()))
}
