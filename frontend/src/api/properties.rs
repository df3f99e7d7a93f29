use reqwest::multipart::{Form, Part};

use super::{
    client::{parse_json, segment, ApiClient},
    error::ApiError,
    types::{DraftMode, Listing, Property, PropertyDraft, PropertyFilters},
};

const PROPERTIES_PATH: &str = "/api/properties/";
const SIMILAR_LIMIT: u32 = 4;

fn property_path(id: &str) -> String {
    format!("{PROPERTIES_PATH}{}/", segment(id))
}

impl PropertyDraft {
    /// Multipart body for create/update. The zip code is validated by the
    /// form but not sent.
    pub fn to_multipart(&self) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("title", self.title.trim().to_string())
            .text("description", self.description.trim().to_string())
            .text("price", self.price.trim().to_string());
        for (name, value) in [
            ("bedrooms", &self.bedrooms),
            ("bathrooms", &self.bathrooms),
            ("area_sqft", &self.area_sqft),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                form = form.text(name, value.to_string());
            }
        }
        form = form
            .text("property_type", self.property_type.as_str())
            .text("city", self.city.trim().to_string())
            .text("state", self.state.trim().to_string())
            .text("address", self.address.trim().to_string());
        for image in &self.images {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)
                .map_err(|e| ApiError::validation(format!("Unsupported image type: {e}")))?;
            form = form.part("images", part);
        }
        Ok(form)
    }
}

impl ApiClient {
    pub async fn list_properties(&self, filters: &PropertyFilters) -> Result<Vec<Property>, ApiError> {
        let query = filters.to_query();
        let response = self
            .send_with_refresh(PROPERTIES_PATH, |url| {
                Ok(self.http_client().get(url).query(&query))
            })
            .await?;
        let listing: Listing<Property> = parse_json(response).await?;
        Ok(listing.into_items())
    }

    pub async fn featured_properties(&self) -> Result<Vec<Property>, ApiError> {
        let listing: Listing<Property> = self
            .get_json(&format!("{PROPERTIES_PATH}featured/"))
            .await?;
        Ok(listing.into_items())
    }

    pub async fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        self.get_json(&property_path(id)).await
    }

    /// Up to four listings of the same type in the same city.
    pub async fn similar_properties(&self, property: &Property) -> Result<Vec<Property>, ApiError> {
        let filters = PropertyFilters {
            property_type: Some(property.property_type),
            city: Some(property.city.clone()),
            exclude_id: Some(property.id.clone()),
            limit: Some(SIMILAR_LIMIT),
            ..PropertyFilters::default()
        };
        let mut similar = self.list_properties(&filters).await?;
        similar.retain(|candidate| candidate.id != property.id);
        similar.truncate(SIMILAR_LIMIT as usize);
        Ok(similar)
    }

    pub async fn my_listings(&self) -> Result<Vec<Property>, ApiError> {
        self.get_current_user_listings().await
    }

    pub async fn create_property(&self, draft: &PropertyDraft) -> Result<Property, ApiError> {
        draft.validate(DraftMode::Create)?;
        let response = self
            .send_with_refresh(PROPERTIES_PATH, |url| {
                Ok(self.http_client().post(url).multipart(draft.to_multipart()?))
            })
            .await?;
        parse_json(response).await
    }

    pub async fn update_property(
        &self,
        id: &str,
        draft: &PropertyDraft,
    ) -> Result<Property, ApiError> {
        draft.validate(DraftMode::Update)?;
        let path = property_path(id);
        let response = self
            .send_with_refresh(&path, |url| {
                Ok(self.http_client().put(url).multipart(draft.to_multipart()?))
            })
            .await?;
        parse_json(response).await
    }

    pub async fn delete_property(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&property_path(id)).await
    }

    /// Admin only; the backend enforces the role.
    pub async fn verify_property(&self, id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("{}verify/", property_path(id))).await
    }

    /// Server-side favorite toggle. The favorites list in the UI is local.
    pub async fn add_remote_favorite(&self, id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("{}favorite/", property_path(id))).await
    }

    pub async fn remove_remote_favorite(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("{}favorite/", property_path(id))).await
    }
}
