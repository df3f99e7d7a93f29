use crate::api::{ApiError, CreateInquiry, Property};
use crate::utils::format::format_area;

pub const INQUIRY_LOGIN_MESSAGE: &str = "Please login to send an inquiry";

pub fn inquiry_template(title: &str) -> String {
    format!("Hi, I'm interested in \"{title}\". Please share more details.")
}

pub fn build_inquiry(property_id: &str, message: &str) -> Result<CreateInquiry, ApiError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(ApiError::validation("Please enter a message"));
    }
    Ok(CreateInquiry {
        property: property_id.to_string(),
        message: message.to_string(),
    })
}

/// Label/value pairs for the key facts panel; unknown values are skipped.
pub fn key_facts(property: &Property) -> Vec<(&'static str, String)> {
    let mut facts = vec![("Type", property.property_type.label().to_string())];
    if property.bedrooms > 0 {
        facts.push(("Bedrooms", property.bedrooms.to_string()));
    }
    if property.bathrooms > 0 {
        facts.push(("Bathrooms", property.bathrooms.to_string()));
    }
    if let Some(area) = format_area(property.area_sqft) {
        facts.push(("Area", area));
    }
    facts
}

/// Every distinct image URL, primary first.
pub fn gallery(property: &Property) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    let ordered = property
        .primary_image()
        .map(str::to_string)
        .into_iter()
        .chain(property.images.iter().map(|image| image.image.clone()))
        .chain(property.image.clone());
    for url in ordered {
        if !url.is_empty() && !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PropertyImage;
    use crate::test_support::helpers::property;

    #[test]
    fn inquiry_message_is_trimmed_and_required() {
        assert_eq!(
            build_inquiry("7", "   ").unwrap_err().error,
            "Please enter a message"
        );
        let payload = build_inquiry("7", "  Is it available?  ").unwrap();
        assert_eq!(payload.property, "7");
        assert_eq!(payload.message, "Is it available?");
    }

    #[test]
    fn facts_skip_unknown_counts() {
        let mut listing = property("1");
        listing.bathrooms = 0;
        let labels: Vec<&str> = key_facts(&listing).into_iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Type", "Bedrooms", "Area"]);
    }

    #[test]
    fn gallery_puts_the_primary_image_first_without_duplicates() {
        let mut listing = property("1");
        listing.images = vec![
            PropertyImage {
                id: "a".into(),
                image: "/a.jpg".into(),
                is_primary: false,
            },
            PropertyImage {
                id: "b".into(),
                image: "/b.jpg".into(),
                is_primary: true,
            },
        ];
        listing.image = Some("/a.jpg".into());
        assert_eq!(gallery(&listing), vec!["/b.jpg", "/a.jpg"]);
    }
}
