use crate::api::{ApiClient, ApiError, Property, PropertyFilters};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn all_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.client.list_properties(&PropertyFilters::default()).await
    }

    pub async fn verify(&self, id: &str) -> Result<(), ApiError> {
        self.client.verify_property(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_property(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::seeded_client;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn verify_posts_to_the_listing() {
        let server = MockServer::start_async().await;
        let verify = server.mock(|when, then| {
            when.method(POST)
                .path("/api/properties/8/verify/")
                .header("Authorization", "Bearer A1");
            then.status(200);
        });
        let (api, _, _) = seeded_client(&server, "A1", "R1");
        let repository = AdminRepository::new_with_client(Rc::new(api));

        repository.verify("8").await.unwrap();
        verify.assert();
    }

    #[tokio::test]
    async fn delete_reports_server_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/properties/8/");
            then.status(403).json_body(serde_json::json!({ "detail": "Not allowed" }));
        });
        let (api, _, _) = seeded_client(&server, "A1", "R1");
        let repository = AdminRepository::new_with_client(Rc::new(api));

        let err = repository.delete("8").await.unwrap_err();
        assert_eq!(err.status, Some(403));
    }
}
