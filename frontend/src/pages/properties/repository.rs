use crate::api::{ApiClient, ApiError, Property, PropertyFilters};
use std::rc::Rc;

#[derive(Clone)]
pub struct PropertiesRepository {
    client: Rc<ApiClient>,
}

impl PropertiesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn search(&self, filters: &PropertyFilters) -> Result<Vec<Property>, ApiError> {
        self.client.list_properties(filters).await
    }
}
