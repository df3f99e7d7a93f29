use crate::api::{ApiClient, ApiError, CreateInquiry, Inquiry, Property};
use std::rc::Rc;

#[derive(Clone)]
pub struct PropertyDetailRepository {
    client: Rc<ApiClient>,
}

impl PropertyDetailRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, id: &str) -> Result<Property, ApiError> {
        self.client.get_property(id).await
    }

    pub async fn similar(&self, property: &Property) -> Result<Vec<Property>, ApiError> {
        self.client.similar_properties(property).await
    }

    pub async fn send_inquiry(&self, payload: &CreateInquiry) -> Result<Inquiry, ApiError> {
        self.client.create_inquiry(payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_property(id).await
    }
}
