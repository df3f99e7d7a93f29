use crate::api::Property;

/// `(pending, verified)`, each in the order the backend returned them.
pub fn split_by_verification(properties: &[Property]) -> (Vec<Property>, Vec<Property>) {
    properties
        .iter()
        .cloned()
        .partition(|property| !property.is_verified)
}

pub fn mark_verified(properties: &mut [Property], id: &str) -> bool {
    match properties.iter_mut().find(|property| property.id == id) {
        Some(property) => {
            property.is_verified = true;
            true
        }
        None => false,
    }
}

pub fn remove_listing(properties: &mut Vec<Property>, id: &str) -> bool {
    let before = properties.len();
    properties.retain(|property| property.id != id);
    properties.len() != before
}
