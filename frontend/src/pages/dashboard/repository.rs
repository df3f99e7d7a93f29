use crate::api::{ApiClient, ApiError, Inquiry, InquiryDecision, Property};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn my_listings(&self) -> Result<Vec<Property>, ApiError> {
        self.client.my_listings().await
    }

    pub async fn inquiries(&self) -> Result<Vec<Inquiry>, ApiError> {
        self.client.list_inquiries().await
    }

    pub async fn decide(&self, id: &str, decision: InquiryDecision) -> Result<(), ApiError> {
        self.client.decide_inquiry(id, decision).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::InquiryStatus;
    use crate::test_support::helpers::seeded_client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn approving_posts_to_the_inquiry() {
        let server = MockServer::start_async().await;
        let approve = server.mock(|when, then| {
            when.method(POST)
                .path("/api/inquiries/12/approve/")
                .header("Authorization", "Bearer A1");
            then.status(200);
        });
        let (api, _, _) = seeded_client(&server, "A1", "R1");
        let repository = DashboardRepository::new_with_client(Rc::new(api));

        repository.decide("12", InquiryDecision::Approve).await.unwrap();
        approve.assert();
    }

    #[tokio::test]
    async fn inquiries_load_from_a_paginated_answer() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/inquiries/");
            then.status(200).json_body(json!({
                "count": 1,
                "results": [{ "id": 3, "message": "Still available?", "status": "rejected" }]
            }));
        });
        let (api, _, _) = seeded_client(&server, "A1", "R1");
        let repository = DashboardRepository::new_with_client(Rc::new(api));

        let inquiries = repository.inquiries().await.unwrap();
        assert_eq!(inquiries.len(), 1);
        assert_eq!(inquiries[0].id, "3");
        assert_eq!(inquiries[0].status, InquiryStatus::Rejected);
    }
}
