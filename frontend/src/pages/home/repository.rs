use crate::api::{ApiClient, ApiError, Property};
use std::rc::Rc;

#[derive(Clone)]
pub struct HomeRepository {
    client: Rc<ApiClient>,
}

impl HomeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn featured(&self) -> Result<Vec<Property>, ApiError> {
        self.client.featured_properties().await
    }
}
