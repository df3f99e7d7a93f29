#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ListingType, Property, User};
    use serde_json::json;

    pub fn user_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "phone": "9999999999",
            "email": "asha@example.com",
            "full_name": "Asha Rao",
            "role": "buyer",
            "is_phone_verified": true
        })
    }

    pub fn buyer() -> User {
        User {
            id: "u1".into(),
            phone: "9999999999".into(),
            email: "asha@example.com".into(),
            full_name: "Asha Rao".into(),
            role: "buyer".into(),
            is_phone_verified: true,
        }
    }

    pub fn owner() -> User {
        User {
            id: "u2".into(),
            full_name: "Vikram Shah".into(),
            role: "property_owner".into(),
            ..buyer()
        }
    }

    pub fn admin() -> User {
        User {
            id: "u-admin".into(),
            full_name: "Site Admin".into(),
            role: "admin".into(),
            ..buyer()
        }
    }

    pub fn property(id: &str) -> Property {
        Property {
            id: id.into(),
            title: format!("Lake View {id}"),
            description: "Two bedroom flat near the lake".into(),
            price: 4_500_000.0,
            address: "12 Lake Road".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            zip_code: "411001".into(),
            latitude: None,
            longitude: None,
            bedrooms: 2,
            bathrooms: 2,
            area_sqft: 950,
            property_type: ListingType::Sale,
            is_verified: false,
            features: Vec::new(),
            images: Vec::new(),
            image: None,
            agent: None,
            created_at: None,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub use self::host::*;

    #[cfg(not(target_arch = "wasm32"))]
    mod host {
        use std::rc::Rc;

        use httpmock::MockServer;
        use leptos::SignalSet;

        use super::user_json;
        use crate::{
            api::ApiClient,
            state::auth::{AuthState, Session},
            utils::{
                navigation::RecordingNavigator,
                storage::{KeyValueStore, MemoryStorage},
                token_store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY},
            },
        };

        pub type TestClient = (ApiClient, Rc<MemoryStorage>, Rc<RecordingNavigator>);

        pub fn test_client(server: &MockServer) -> TestClient {
            let storage = MemoryStorage::shared();
            let navigator = RecordingNavigator::shared();
            let api = ApiClient::new_with_base_url(server.url(""))
                .with_storage(storage.clone())
                .with_navigator(navigator.clone());
            (api, storage, navigator)
        }

        pub fn seeded_client(server: &MockServer, access: &str, refresh: &str) -> TestClient {
            let (api, storage, navigator) = test_client(server);
            storage.set(ACCESS_TOKEN_KEY, access).unwrap();
            storage.set(REFRESH_TOKEN_KEY, refresh).unwrap();
            storage.set(USER_KEY, &user_json("u1").to_string()).unwrap();
            (api, storage, navigator)
        }

        /// Offline session with the given state, provided as context.
        pub fn provide_session(state: AuthState) -> Session {
            let api = ApiClient::new()
                .with_storage(MemoryStorage::shared())
                .with_navigator(RecordingNavigator::shared());
            provide_session_with(api, state)
        }

        pub fn provide_session_with(api: ApiClient, state: AuthState) -> Session {
            let session = Session::new(api);
            session.state().set(state);
            leptos::provide_context(session.clone());
            session
        }
    }
}
