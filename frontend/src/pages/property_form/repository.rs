use crate::api::{ApiClient, ApiError, Property, PropertyDraft};
use std::rc::Rc;

#[derive(Clone)]
pub struct PropertyFormRepository {
    client: Rc<ApiClient>,
}

impl PropertyFormRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, id: &str) -> Result<Property, ApiError> {
        self.client.get_property(id).await
    }

    pub async fn create(&self, draft: &PropertyDraft) -> Result<Property, ApiError> {
        self.client.create_property(draft).await
    }

    pub async fn update(&self, id: &str, draft: &PropertyDraft) -> Result<Property, ApiError> {
        self.client.update_property(id, draft).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::property_form::utils::DraftFormState;
    use crate::test_support::{
        helpers::{property, seeded_client},
        ssr::with_runtime,
    };
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn editing_saves_without_new_images() {
        let server = MockServer::start_async().await;
        let updated = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/properties/5/")
                .header("Authorization", "Bearer A1")
                .body_contains("Lake View 5");
            then.status(200).json_body(json!({
                "id": 5,
                "title": "Lake View 5",
                "price": "4500000.00",
                "property_type": "sale"
            }));
        });
        let (api, _, _) = seeded_client(&server, "A1", "R1");
        let repository = PropertyFormRepository::new_with_client(Rc::new(api));
        let draft = with_runtime(|| {
            let form = DraftFormState::default();
            form.fill(&property("5"));
            form.snapshot()
        });

        let saved = repository.update("5", &draft).await.unwrap();

        assert_eq!(saved.id, "5");
        updated.assert();
    }
}
