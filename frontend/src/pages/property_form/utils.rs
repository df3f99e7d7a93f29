use crate::api::{ApiError, DraftMode, ImageUpload, ListingType, Property, PropertyDraft};
use leptos::*;

pub const MAX_IMAGE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn draft_mode(&self) -> DraftMode {
        match self {
            FormMode::Create => DraftMode::Create,
            FormMode::Edit(_) => DraftMode::Update,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "List a Property",
            FormMode::Edit(_) => "Edit Property",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Post Property",
            FormMode::Edit(_) => "Save Changes",
        }
    }
}

pub fn listing_href(id: &str) -> String {
    format!("/properties/{id}")
}

#[derive(Clone, Copy)]
pub struct DraftFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub bedrooms: RwSignal<String>,
    pub bathrooms: RwSignal<String>,
    pub area_sqft: RwSignal<String>,
    pub property_type: RwSignal<ListingType>,
    pub city: RwSignal<String>,
    pub state: RwSignal<String>,
    pub address: RwSignal<String>,
    pub zip_code: RwSignal<String>,
    pub images: RwSignal<Vec<ImageUpload>>,
}

impl Default for DraftFormState {
    fn default() -> Self {
        Self::from_draft(PropertyDraft::default())
    }
}

impl DraftFormState {
    fn from_draft(draft: PropertyDraft) -> Self {
        Self {
            title: create_rw_signal(draft.title),
            description: create_rw_signal(draft.description),
            price: create_rw_signal(draft.price),
            bedrooms: create_rw_signal(draft.bedrooms),
            bathrooms: create_rw_signal(draft.bathrooms),
            area_sqft: create_rw_signal(draft.area_sqft),
            property_type: create_rw_signal(draft.property_type),
            city: create_rw_signal(draft.city),
            state: create_rw_signal(draft.state),
            address: create_rw_signal(draft.address),
            zip_code: create_rw_signal(draft.zip_code),
            images: create_rw_signal(draft.images),
        }
    }

    /// Loads an existing listing; uploaded images are kept.
    pub fn fill(&self, property: &Property) {
        let draft = PropertyDraft::from(property);
        self.title.set(draft.title);
        self.description.set(draft.description);
        self.price.set(draft.price);
        self.bedrooms.set(draft.bedrooms);
        self.bathrooms.set(draft.bathrooms);
        self.area_sqft.set(draft.area_sqft);
        self.property_type.set(draft.property_type);
        self.city.set(draft.city);
        self.state.set(draft.state);
        self.address.set(draft.address);
        self.zip_code.set(draft.zip_code);
    }

    pub fn snapshot(&self) -> PropertyDraft {
        PropertyDraft {
            title: self.title.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
            price: self.price.get_untracked().trim().to_string(),
            bedrooms: self.bedrooms.get_untracked().trim().to_string(),
            bathrooms: self.bathrooms.get_untracked().trim().to_string(),
            area_sqft: self.area_sqft.get_untracked().trim().to_string(),
            property_type: self.property_type.get_untracked(),
            city: self.city.get_untracked().trim().to_string(),
            state: self.state.get_untracked().trim().to_string(),
            address: self.address.get_untracked().trim().to_string(),
            zip_code: self.zip_code.get_untracked().trim().to_string(),
            images: self.images.get_untracked(),
        }
    }

    pub fn add_images(&self, uploads: Vec<ImageUpload>) {
        self.images.update(|images| images.extend(uploads));
    }

    pub fn remove_image(&self, index: usize) {
        self.images.update(|images| {
            if index < images.len() {
                images.remove(index);
            }
        });
    }
}

pub fn check_image(file_name: &str, content_type: &str, size_bytes: f64) -> Result<(), ApiError> {
    if !content_type.starts_with("image/") {
        return Err(ApiError::validation(format!(
            "{file_name} is not an image file."
        )));
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ApiError::validation(format!(
            "{file_name} is larger than 10 MB."
        )));
    }
    Ok(())
}

/// Reads every selected file into memory for the multipart upload.
#[cfg(target_arch = "wasm32")]
pub async fn read_files(files: web_sys::FileList) -> Result<Vec<ImageUpload>, ApiError> {
    let mut uploads = Vec::new();
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        let file_name = file.name();
        let content_type = file.type_();
        check_image(&file_name, &content_type, file.size())?;
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|_| ApiError::validation(format!("Could not read {file_name}.")))?;
        uploads.push(ImageUpload {
            file_name,
            content_type,
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        });
    }
    Ok(uploads)
}
