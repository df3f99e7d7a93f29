use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.phone.trim().is_empty() {
            return Err(ApiError::validation("Please enter your phone number"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("Please enter your password"));
        }
        Ok(())
    }
}

/// Both token fields accept the camelCase spelling some backends use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, alias = "accessToken", alias = "access_token")]
    pub access: Option<String>,
    #[serde(default, alias = "refreshToken", alias = "refresh_token")]
    pub refresh: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// A complete login result: the three values are stored together.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub access: String,
    pub refresh: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshResponse {
    #[serde(default, alias = "accessToken")]
    pub access: Option<String>,
    #[serde(default, alias = "refreshToken")]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub re_password: String,
    pub phone: String,
    pub full_name: String,
}

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const OTP_LEN: usize = 6;

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let required = [
            ("Email", self.email.trim()),
            ("Password", self.password.as_str()),
            ("Password confirmation", self.re_password.as_str()),
            ("Phone number", self.phone.trim()),
            ("Full name", self.full_name.trim()),
        ];
        if let Some((label, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(ApiError::validation(format!("{label} is required")));
        }
        if !self.email.contains('@') {
            return Err(ApiError::validation("Invalid email address"));
        }
        validate_password(&self.password)?;
        validate_phone(&self.phone)?;
        if self.full_name.trim().chars().count() < 2 {
            return Err(ApiError::validation("Full name is required"));
        }
        if self.password != self.re_password {
            return Err(ApiError::validation("Passwords don't match"));
        }
        Ok(())
    }
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ApiError> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(ApiError::validation(format!(
            "Phone number must be at least {MIN_PHONE_DIGITS} digits"
        )));
    }
    Ok(())
}

/// Returns the trimmed code when it is exactly six ASCII digits.
pub fn normalize_otp(raw: &str) -> Result<String, ApiError> {
    let code = raw.trim();
    if code.len() != OTP_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::validation("Please enter a valid 6-digit OTP"));
    }
    Ok(code.to_string())
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyPhoneRequest {
    pub phone: String,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePurpose {
    Registration,
    PasswordReset,
}

impl CodePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodePurpose::Registration => "registration",
            CodePurpose::PasswordReset => "password_reset",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendCodeRequest {
    pub phone: String,
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub phone: String,
    pub code: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, alias = "message")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "phone_verified")]
    pub is_phone_verified: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }

    pub fn can_manage_listings(&self) -> bool {
        self.is_admin() || self.role.eq_ignore_ascii_case("property_owner")
    }

    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.phone
        } else {
            &self.full_name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    #[serde(alias = "buy")]
    Sale,
    Rent,
    Lease,
}

impl ListingType {
    pub const ALL: [ListingType; 3] = [ListingType::Sale, ListingType::Rent, ListingType::Lease];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
            ListingType::Lease => "lease",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingType::Sale => "Buy",
            ListingType::Rent => "Rent",
            ListingType::Lease => "Lease",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sale" | "buy" => Some(ListingType::Sale),
            "rent" => Some(ListingType::Rent),
            "lease" => Some(ListingType::Lease),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyImage {
    #[serde(default, deserialize_with = "de::id")]
    pub id: String,
    pub image: String,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default, deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de::number")]
    pub price: f64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, alias = "zipCode")]
    pub zip_code: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, alias = "beds", deserialize_with = "de::count")]
    pub bedrooms: u32,
    #[serde(default, alias = "baths", deserialize_with = "de::count")]
    pub bathrooms: u32,
    #[serde(default, alias = "sqft", deserialize_with = "de::count")]
    pub area_sqft: u32,
    #[serde(default, alias = "propertyType")]
    pub property_type: ListingType,
    #[serde(default, alias = "isVerified")]
    pub is_verified: bool,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub agent: Option<Agent>,
    #[serde(default, alias = "createdAt", deserialize_with = "de::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Property {
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| self.images.first())
            .map(|img| img.image.as_str())
            .or(self.image.as_deref())
    }

    pub fn location(&self) -> String {
        [self.address.trim(), self.city.trim(), self.state.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Snapshot of a property kept in the local favorites list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteProperty {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "de::number")]
    pub price: f64,
    #[serde(default)]
    pub city: String,
    #[serde(default, alias = "propertyType")]
    pub property_type: ListingType,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "beds", deserialize_with = "de::count")]
    pub bedrooms: u32,
    #[serde(default, alias = "baths", deserialize_with = "de::count")]
    pub bathrooms: u32,
    #[serde(default, alias = "sqft", deserialize_with = "de::count")]
    pub area_sqft: u32,
}

impl From<&Property> for FavoriteProperty {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            price: property.price,
            city: property.city.clone(),
            property_type: property.property_type,
            image: property.primary_image().map(str::to_string),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            area_sqft: property.area_sqft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl InquiryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "Pending",
            InquiryStatus::Approved => "Approved",
            InquiryStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryDecision {
    Approve,
    Reject,
}

impl InquiryDecision {
    pub fn resulting_status(&self) -> InquiryStatus {
        match self {
            InquiryDecision::Approve => InquiryStatus::Approved,
            InquiryDecision::Reject => InquiryStatus::Rejected,
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            InquiryDecision::Approve => "approve",
            InquiryDecision::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryProperty {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryUser {
    #[serde(default, alias = "full_name")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: InquiryStatus,
    #[serde(default, deserialize_with = "de::inquiry_property")]
    pub property: Option<InquiryProperty>,
    #[serde(default, deserialize_with = "de::inquiry_user")]
    pub user: Option<InquiryUser>,
    #[serde(default, alias = "createdAt", deserialize_with = "de::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateInquiry {
    pub property: String,
    pub message: String,
}

/// List endpoints answer with a bare array or a paginated envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page {
        #[serde(default)]
        count: Option<u64>,
        results: Vec<T>,
    },
    Items(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Page { results, .. } => results,
            Listing::Items(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Update,
}

/// Property form state. Numbers stay as typed text until validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area_sqft: String,
    pub property_type: ListingType,
    pub city: String,
    pub state: String,
    pub address: String,
    pub zip_code: String,
    pub images: Vec<ImageUpload>,
}

impl PropertyDraft {
    pub fn validate(&self, mode: DraftMode) -> Result<(), ApiError> {
        let required = [
            ("Title", &self.title),
            ("Description", &self.description),
            ("Price", &self.price),
            ("City", &self.city),
            ("State", &self.state),
            ("Address", &self.address),
            ("Zip Code", &self.zip_code),
        ];
        if let Some((label, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ApiError::validation(format!("{label} is required.")));
        }
        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => {}
            _ => return Err(ApiError::validation("Price must be a positive number.")),
        }
        for (label, value) in [
            ("Bedrooms", &self.bedrooms),
            ("Bathrooms", &self.bathrooms),
            ("Area", &self.area_sqft),
        ] {
            let value = value.trim();
            if !value.is_empty() && value.parse::<u32>().is_err() {
                return Err(ApiError::validation(format!("{label} must be a whole number.")));
            }
        }
        if mode == DraftMode::Create && self.images.is_empty() {
            return Err(ApiError::validation(
                "Please upload at least one property image.",
            ));
        }
        Ok(())
    }
}

impl From<&Property> for PropertyDraft {
    fn from(property: &Property) -> Self {
        let count = |value: u32| {
            if value == 0 {
                String::new()
            } else {
                value.to_string()
            }
        };
        Self {
            title: property.title.clone(),
            description: property.description.clone(),
            price: property.price.to_string(),
            bedrooms: count(property.bedrooms),
            bathrooms: count(property.bathrooms),
            area_sqft: count(property.area_sqft),
            property_type: property.property_type,
            city: property.city.clone(),
            state: property.state.clone(),
            address: property.address.clone(),
            zip_code: property.zip_code.clone(),
            images: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilters {
    pub query: Option<String>,
    pub city: Option<String>,
    pub property_type: Option<ListingType>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub min_sqft: Option<u32>,
    pub max_sqft: Option<u32>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub exclude_id: Option<String>,
}

impl PropertyFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut text = |name: &'static str, value: &Option<String>| {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((name, v.to_string()));
            }
        };
        text("search", &self.query);
        text("city", &self.city);
        text("exclude_id", &self.exclude_id);
        if let Some(kind) = self.property_type {
            pairs.push(("property_type", kind.as_str().to_string()));
        }
        let numbers = [
            ("min_price", self.min_price),
            ("max_price", self.max_price),
            ("bedrooms", self.bedrooms.map(u64::from)),
            ("bathrooms", self.bathrooms.map(u64::from)),
            ("min_sqft", self.min_sqft.map(u64::from)),
            ("max_sqft", self.max_sqft.map(u64::from)),
            ("page", self.page.map(u64::from)),
            ("limit", self.limit.map(u64::from)),
        ];
        for (name, value) in numbers {
            if let Some(value) = value {
                pairs.push((name, value.to_string()));
            }
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Newest, SortOrder::PriceLow, SortOrder::PriceHigh];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::PriceLow => "Price (Low to High)",
            SortOrder::PriceHigh => "Price (High to Low)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceLow => "price_low",
            SortOrder::PriceHigh => "price_high",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "price_low" => SortOrder::PriceLow,
            "price_high" => SortOrder::PriceHigh,
            _ => SortOrder::Newest,
        }
    }

    /// Stable sort; listings without a timestamp go last for `Newest`.
    pub fn apply(&self, properties: &mut [Property]) {
        match self {
            SortOrder::Newest => properties.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::PriceLow => properties.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceHigh => properties.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
    }
}

mod de {
    use super::{InquiryProperty, InquiryUser};
    use chrono::{DateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer};
    use serde_json::Value;

    /// Primary keys arrive as integers from the backend and as strings from
    /// local storage.
    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!("invalid id: {other}"))),
        }
    }

    /// Decimal fields may be serialized as strings.
    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| D::Error::custom("number out of range")),
            Value::String(s) if s.trim().is_empty() => Ok(0.0),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid number: {s}"))),
            Value::Null => Ok(0.0),
            other => Err(D::Error::custom(format!("invalid number: {other}"))),
        }
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = number(deserializer)?;
        if value < 0.0 {
            return Err(D::Error::custom("negative count"));
        }
        Ok(value as u32)
    }

    pub fn timestamp<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|dt| dt.with_timezone(&Utc)))
    }

    pub fn inquiry_property<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<InquiryProperty>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::String(id) => Some(InquiryProperty {
                id: Some(id),
                title: String::new(),
            }),
            Value::Number(id) => Some(InquiryProperty {
                id: Some(id.to_string()),
                title: String::new(),
            }),
            Value::Object(map) => {
                let id = match map.get("id") {
                    Some(Value::String(s)) => Some(s.clone()),
                    Some(Value::Number(n)) => Some(n.to_string()),
                    _ => None,
                };
                let title = map
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Some(InquiryProperty { id, title })
            }
            other => return Err(D::Error::custom(format!("invalid property: {other}"))),
        })
    }

    pub fn inquiry_user<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<InquiryUser>, D::Error> {
        match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(Some)
                .map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}
