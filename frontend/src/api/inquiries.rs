use super::{
    client::{parse_json, segment, ApiClient},
    error::ApiError,
    types::{CreateInquiry, Inquiry, InquiryDecision, Listing},
};

const INQUIRIES_PATH: &str = "/api/inquiries/";

fn inquiry_path(id: &str) -> String {
    format!("{INQUIRIES_PATH}{}/", segment(id))
}

impl ApiClient {
    /// The backend filters by role: owners see inquiries on their listings,
    /// buyers see their own.
    pub async fn list_inquiries(&self) -> Result<Vec<Inquiry>, ApiError> {
        let listing: Listing<Inquiry> = self.get_json(INQUIRIES_PATH).await?;
        Ok(listing.into_items())
    }

    pub async fn get_inquiry(&self, id: &str) -> Result<Inquiry, ApiError> {
        self.get_json(&inquiry_path(id)).await
    }

    pub async fn create_inquiry(&self, payload: &CreateInquiry) -> Result<Inquiry, ApiError> {
        if payload.message.trim().is_empty() {
            return Err(ApiError::validation("Please enter a message"));
        }
        let response = self
            .send_with_refresh(INQUIRIES_PATH, |url| {
                Ok(self.http_client().post(url).json(payload))
            })
            .await?;
        parse_json(response).await
    }

    pub async fn update_inquiry(
        &self,
        id: &str,
        payload: &CreateInquiry,
    ) -> Result<Inquiry, ApiError> {
        let path = inquiry_path(id);
        let response = self
            .send_with_refresh(&path, |url| Ok(self.http_client().put(url).json(payload)))
            .await?;
        parse_json(response).await
    }

    pub async fn delete_inquiry(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&inquiry_path(id)).await
    }

    /// Requests `pending -> approved|rejected`; the backend decides whether
    /// the transition is allowed.
    pub async fn decide_inquiry(&self, id: &str, decision: InquiryDecision) -> Result<(), ApiError> {
        self.post_empty(&format!("{}{}/", inquiry_path(id), decision.path_segment()))
            .await
    }

    pub async fn approve_inquiry(&self, id: &str) -> Result<(), ApiError> {
        self.decide_inquiry(id, InquiryDecision::Approve).await
    }

    pub async fn reject_inquiry(&self, id: &str) -> Result<(), ApiError> {
        self.decide_inquiry(id, InquiryDecision::Reject).await
    }
}
