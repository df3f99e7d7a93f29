use crate::api::{ApiError, ListingType, PropertyFilters};
use leptos::*;

pub fn tab_label(kind: ListingType) -> &'static str {
    match kind {
        ListingType::Sale => "For Sale",
        ListingType::Rent => "For Rent",
        ListingType::Lease => "For Lease",
    }
}

/// Filter inputs as typed. Nothing reaches the API until applied.
#[derive(Clone, Copy)]
pub struct FilterFormState {
    pub search: RwSignal<String>,
    pub city: RwSignal<String>,
    pub min_price: RwSignal<String>,
    pub max_price: RwSignal<String>,
    pub bedrooms: RwSignal<String>,
    pub bathrooms: RwSignal<String>,
}

impl FilterFormState {
    pub fn new(search: String) -> Self {
        Self {
            search: create_rw_signal(search),
            city: create_rw_signal(String::new()),
            min_price: create_rw_signal(String::new()),
            max_price: create_rw_signal(String::new()),
            bedrooms: create_rw_signal(String::new()),
            bathrooms: create_rw_signal(String::new()),
        }
    }

    pub fn reset(&self) {
        for field in [
            self.search,
            self.city,
            self.min_price,
            self.max_price,
            self.bedrooms,
            self.bathrooms,
        ] {
            field.set(String::new());
        }
    }

    pub fn to_filters(&self, tab: ListingType) -> Result<PropertyFilters, ApiError> {
        let filters = PropertyFilters {
            query: non_blank(&self.search.get_untracked()),
            city: non_blank(&self.city.get_untracked()),
            property_type: Some(tab),
            min_price: parse_number("Min price", &self.min_price.get_untracked())?,
            max_price: parse_number("Max price", &self.max_price.get_untracked())?,
            bedrooms: parse_number("Bedrooms", &self.bedrooms.get_untracked())?,
            bathrooms: parse_number("Bathrooms", &self.bathrooms.get_untracked())?,
            ..PropertyFilters::default()
        };
        if let (Some(min), Some(max)) = (filters.min_price, filters.max_price) {
            if min > max {
                return Err(ApiError::validation(
                    "Min price cannot be greater than max price",
                ));
            }
        }
        Ok(filters)
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number<T: std::str::FromStr>(label: &str, raw: &str) -> Result<Option<T>, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ApiError::validation(format!("{label} must be a whole number")))
}
