#![cfg(not(coverage))]

use std::rc::Rc;

use super::*;
use crate::utils::{
    navigation::{RecordingNavigator, LOGIN_ROUTE},
    storage::{KeyValueStore, MemoryStorage},
    token_store::{ACCESS_TOKEN_KEY, FAVORITES_KEY, REFRESH_TOKEN_KEY, USER_KEY},
};
use httpmock::prelude::*;
use serde_json::json;

fn without_authorization(req: &HttpMockRequest) -> bool {
    req.headers.as_ref().map_or(true, |headers| {
        headers
            .iter()
            .all(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
    })
}

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "phone": "9876543210",
        "email": "asha@example.com",
        "full_name": "Asha Rao",
        "role": "buyer",
        "is_phone_verified": true
    })
}

fn property_json(id: u64, city: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Flat {id}"),
        "description": "Two bedroom flat",
        "price": "4500000.00",
        "address": "12 MG Road",
        "city": city,
        "state": "Maharashtra",
        "bedrooms": 2,
        "bathrooms": 2,
        "area_sqft": 950,
        "property_type": "sale",
        "is_verified": false,
        "images": [],
        "created_at": "2025-01-02T10:00:00Z"
    })
}

struct Harness {
    server: MockServer,
    storage: Rc<MemoryStorage>,
    navigator: Rc<RecordingNavigator>,
    client: ApiClient,
}

async fn harness() -> Harness {
    let server = MockServer::start_async().await;
    let storage = MemoryStorage::shared();
    let navigator = RecordingNavigator::shared();
    let client = ApiClient::new_with_base_url(server.url(""))
        .with_storage(storage.clone())
        .with_navigator(navigator.clone());
    Harness {
        server,
        storage,
        navigator,
        client,
    }
}

fn seed_session(storage: &MemoryStorage, access: &str, refresh: &str) {
    storage.set(ACCESS_TOKEN_KEY, access).unwrap();
    storage.set(REFRESH_TOKEN_KEY, refresh).unwrap();
    storage
        .set(USER_KEY, &user_json("u1").to_string())
        .unwrap();
}

#[tokio::test]
async fn login_stores_tokens_and_user_without_sending_a_bearer() {
    let h = harness().await;
    h.storage.set(ACCESS_TOKEN_KEY, "stale").unwrap();

    let login = h.server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login/")
            .matches(without_authorization)
            .json_body(json!({ "phone": "9876543210", "password": "secret123" }));
        then.status(200).json_body(json!({
            "access": "A1",
            "refresh": "R1",
            "user": user_json("u1")
        }));
    });

    let session = h
        .client
        .login(LoginRequest {
            phone: "9876543210".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap();

    login.assert();
    assert_eq!(session.user.id, "u1");
    assert_eq!(h.client.tokens().access_token().as_deref(), Some("A1"));
    assert_eq!(h.client.tokens().refresh_token().as_deref(), Some("R1"));
    assert_eq!(h.client.tokens().user().map(|u| u.id), Some("u1".to_string()));
}

#[tokio::test]
async fn login_rejection_surfaces_detail_and_never_refreshes() {
    let h = harness().await;
    let login = h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/login/");
        then.status(401)
            .json_body(json!({ "detail": "No active account found with the given credentials" }));
    });
    let refresh = h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/token/refresh/");
        then.status(200).json_body(json!({ "access": "A2" }));
    });

    let err = h
        .client
        .login(LoginRequest {
            phone: "9876543210".into(),
            password: "wrong-pass".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "No active account found with the given credentials");
    assert_eq!(login.hits(), 1);
    assert_eq!(refresh.hits(), 0);
    assert!(h.navigator.visited().is_empty());
}

#[tokio::test]
async fn login_with_incomplete_response_stores_nothing() {
    let h = harness().await;
    h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/login/");
        then.status(200)
            .json_body(json!({ "access": "A1", "user": user_json("u1") }));
    });

    let err = h
        .client
        .login(LoginRequest {
            phone: "9876543210".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::InvalidResponse);
    assert_eq!(err.error, "Invalid response from server");
    assert!(h.storage.is_empty());
}

#[tokio::test]
async fn login_with_empty_fields_is_rejected_locally() {
    let h = harness().await;
    let login = h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/login/");
        then.status(200).json_body(json!({}));
    });

    let err = h
        .client
        .login(LoginRequest {
            phone: " ".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Validation);
    assert_eq!(login.hits(), 0);
}

#[tokio::test]
async fn unauthorized_request_refreshes_once_and_replays_with_new_token() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");

    let rejected = h.server.mock(|when, then| {
        when.method(GET)
            .path("/api/inquiries/")
            .header("Authorization", "Bearer A1");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });
    let accepted = h.server.mock(|when, then| {
        when.method(GET)
            .path("/api/inquiries/")
            .header("Authorization", "Bearer A2");
        then.status(200).json_body(json!([{
            "id": 5,
            "message": "Is this available?",
            "status": "pending",
            "property": { "id": 1, "title": "Flat 1" },
            "user": { "name": "Ravi", "email": "ravi@example.com", "phone": "9000000000" }
        }]));
    });
    let refresh = h.server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/token/refresh/")
            .matches(without_authorization)
            .json_body(json!({ "refresh": "R1" }));
        then.status(200).json_body(json!({ "access": "A2" }));
    });

    let inquiries = h.client.list_inquiries().await.unwrap();

    assert_eq!(inquiries.len(), 1);
    assert_eq!(inquiries[0].id, "5");
    assert_eq!(rejected.hits(), 1);
    assert_eq!(refresh.hits(), 1);
    assert_eq!(accepted.hits(), 1);
    assert_eq!(h.client.tokens().access_token().as_deref(), Some("A2"));
    assert_eq!(h.client.tokens().refresh_token().as_deref(), Some("R1"));
    assert!(h.navigator.visited().is_empty());
}

#[tokio::test]
async fn rotated_refresh_token_is_stored() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");
    h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/token/refresh/");
        then.status(200).json_body(json!({ "access": "A2", "refresh": "R2" }));
    });

    let token = h.client.refresh_access_token().await.unwrap();

    assert_eq!(token, "A2");
    assert_eq!(h.client.tokens().refresh_token().as_deref(), Some("R2"));
}

#[tokio::test]
async fn second_unauthorized_after_refresh_ends_the_session() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");
    h.storage.set(FAVORITES_KEY, "[]").unwrap();

    let listings = h.server.mock(|when, then| {
        when.method(GET).path("/api/properties/my_listings/");
        then.status(401).json_body(json!({ "detail": "Token invalid" }));
    });
    let refresh = h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/token/refresh/");
        then.status(200).json_body(json!({ "access": "A2" }));
    });

    let err = h.client.my_listings().await.unwrap_err();

    assert_eq!(err.error, SESSION_EXPIRED_MESSAGE);
    assert!(err.is_authentication());
    assert_eq!(listings.hits(), 2);
    assert_eq!(refresh.hits(), 1);
    assert_eq!(h.client.tokens().access_token(), None);
    assert_eq!(h.client.tokens().refresh_token(), None);
    assert_eq!(h.client.tokens().user(), None);
    assert_eq!(h.storage.get(FAVORITES_KEY).as_deref(), Some("[]"));
    assert_eq!(h.navigator.visited(), vec![LOGIN_ROUTE.to_string()]);
}

#[tokio::test]
async fn failed_refresh_clears_session_and_redirects_to_login() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");

    let listings = h.server.mock(|when, then| {
        when.method(GET).path("/api/properties/my_listings/");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });
    h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/token/refresh/");
        then.status(401)
            .json_body(json!({ "detail": "Token is invalid or expired" }));
    });

    let err = h.client.my_listings().await.unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(err.error, "Token is invalid or expired");
    assert_eq!(listings.hits(), 1);
    assert!(!h.client.tokens().has_session());
    assert_eq!(h.navigator.last().as_deref(), Some(LOGIN_ROUTE));
}

#[tokio::test]
async fn missing_refresh_token_ends_session_without_calling_refresh() {
    let h = harness().await;
    h.storage.set(ACCESS_TOKEN_KEY, "A1").unwrap();

    h.server.mock(|when, then| {
        when.method(GET).path("/api/inquiries/");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });
    let refresh = h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/token/refresh/");
        then.status(200).json_body(json!({ "access": "A2" }));
    });

    let err = h.client.list_inquiries().await.unwrap_err();

    assert_eq!(err.error, "No refresh token available");
    assert_eq!(refresh.hits(), 0);
    assert_eq!(h.navigator.last().as_deref(), Some(LOGIN_ROUTE));
}

#[tokio::test]
async fn refresh_response_without_access_token_is_invalid() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");
    h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/token/refresh/");
        then.status(200).json_body(json!({ "refresh": "R2" }));
    });

    let err = h.client.refresh_access_token().await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::InvalidResponse);
    assert_eq!(h.client.tokens().access_token().as_deref(), Some("A1"));
}

#[tokio::test]
async fn concurrent_unauthorized_requests_share_one_refresh() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");

    h.server.mock(|when, then| {
        when.method(GET)
            .path("/api/inquiries/")
            .header("Authorization", "Bearer A1");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });
    let accepted = h.server.mock(|when, then| {
        when.method(GET)
            .path("/api/inquiries/")
            .header("Authorization", "Bearer A2");
        then.status(200).json_body(json!([]));
    });
    h.server.mock(|when, then| {
        when.method(GET)
            .path("/api/properties/my_listings/")
            .header("Authorization", "Bearer A1");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });
    h.server.mock(|when, then| {
        when.method(GET)
            .path("/api/properties/my_listings/")
            .header("Authorization", "Bearer A2");
        then.status(200).json_body(json!({ "count": 0, "results": [] }));
    });
    let refresh = h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/token/refresh/");
        then.status(200).json_body(json!({ "access": "A2" }));
    });

    let (inquiries, listings) =
        futures::join!(h.client.list_inquiries(), h.client.my_listings());

    assert!(inquiries.unwrap().is_empty());
    assert!(listings.unwrap().is_empty());
    assert_eq!(refresh.hits(), 1);
    assert_eq!(accepted.hits(), 1);
}

#[tokio::test]
async fn session_check_does_not_refresh() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");

    h.server.mock(|when, then| {
        when.method(GET)
            .path("/api/properties/my_listings/")
            .header("Authorization", "Bearer A1");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });
    let refresh = h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/token/refresh/");
        then.status(200).json_body(json!({ "access": "A2" }));
    });

    let err = h.client.verify_session().await.unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(refresh.hits(), 0);
    assert!(h.navigator.visited().is_empty());
}

#[tokio::test]
async fn registration_with_mismatched_passwords_sends_nothing() {
    let h = harness().await;
    let register = h.server.mock(|when, then| {
        when.method(POST).path("/auth/users/");
        then.status(201).json_body(user_json("u9"));
    });

    let err = h
        .client
        .register(RegisterRequest {
            email: "asha@example.com".into(),
            password: "secret123".into(),
            re_password: "secret124".into(),
            phone: "9876543210".into(),
            full_name: "Asha Rao".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "Passwords don't match");
    assert_eq!(register.hits(), 0);
}

#[tokio::test]
async fn registration_and_phone_verification_reach_public_endpoints() {
    let h = harness().await;
    let register = h.server.mock(|when, then| {
        when.method(POST)
            .path("/auth/users/")
            .matches(without_authorization);
        then.status(201).json_body(user_json("u9"));
    });
    let send_code = h.server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/send-verification-code/")
            .json_body(json!({ "phone": "9876543210", "purpose": "registration" }));
        then.status(200).json_body(json!({ "message": "Code sent" }));
    });
    let verify = h.server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/verify-phone/")
            .json_body(json!({ "phone": "9876543210", "code": "123456" }));
        then.status(200).json_body(json!({ "detail": "Phone verified" }));
    });

    h.client
        .register(RegisterRequest {
            email: "asha@example.com".into(),
            password: "secret123".into(),
            re_password: "secret123".into(),
            phone: "9876543210".into(),
            full_name: "Asha Rao".into(),
        })
        .await
        .unwrap();
    let sent = h
        .client
        .send_verification_code("9876543210", CodePurpose::Registration)
        .await
        .unwrap();
    h.client.verify_phone("9876543210", " 123456 ").await.unwrap();

    register.assert();
    send_code.assert();
    verify.assert();
    assert_eq!(sent.detail.as_deref(), Some("Code sent"));
    assert!(!h.client.tokens().has_session());
}

#[tokio::test]
async fn registration_errors_report_field_messages() {
    let h = harness().await;
    h.server.mock(|when, then| {
        when.method(POST).path("/auth/users/");
        then.status(400)
            .json_body(json!({ "phone": ["user with this phone already exists."] }));
    });

    let err = h
        .client
        .register(RegisterRequest {
            email: "asha@example.com".into(),
            password: "secret123".into(),
            re_password: "secret123".into(),
            phone: "9876543210".into(),
            full_name: "Asha Rao".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Remote);
    assert!(err.error.contains("user with this phone already exists."));
}

#[tokio::test]
async fn password_reset_validates_code_before_sending() {
    let h = harness().await;
    let reset = h.server.mock(|when, then| {
        when.method(POST).path("/api/auth/reset-password/");
        then.status(200).json_body(json!({ "detail": "Password reset" }));
    });

    let err = h
        .client
        .reset_password("9876543210", "12ab", "newsecret1")
        .await
        .unwrap_err();
    assert_eq!(err.error, "Please enter a valid 6-digit OTP");
    assert_eq!(reset.hits(), 0);

    h.client
        .reset_password("9876543210", "654321", "newsecret1")
        .await
        .unwrap();
    assert_eq!(reset.hits(), 1);
}

#[tokio::test]
async fn property_endpoints_send_filters_and_bearer() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");

    let list = h.server.mock(|when, then| {
        when.method(GET)
            .path("/api/properties/")
            .query_param("city", "Pune")
            .query_param("property_type", "rent")
            .query_param("min_price", "10000")
            .header("Authorization", "Bearer A1");
        then.status(200).json_body(json!({
            "count": 2,
            "results": [property_json(1, "Pune"), property_json(2, "Pune")]
        }));
    });
    let detail = h.server.mock(|when, then| {
        when.method(GET).path("/api/properties/1/");
        then.status(200).json_body(property_json(1, "Pune"));
    });
    let featured = h.server.mock(|when, then| {
        when.method(GET).path("/api/properties/featured/");
        then.status(200).json_body(json!([property_json(3, "Mumbai")]));
    });
    let verify = h.server.mock(|when, then| {
        when.method(POST).path("/api/properties/1/verify/");
        then.status(200).json_body(json!({}));
    });
    let remove = h.server.mock(|when, then| {
        when.method(DELETE).path("/api/properties/2/");
        then.status(204);
    });

    let filters = PropertyFilters {
        city: Some("Pune".into()),
        property_type: Some(ListingType::Rent),
        min_price: Some(10_000),
        ..PropertyFilters::default()
    };
    let listed = h.client.list_properties(&filters).await.unwrap();
    let property = h.client.get_property("1").await.unwrap();
    let featured_list = h.client.featured_properties().await.unwrap();
    h.client.verify_property("1").await.unwrap();
    h.client.delete_property("2").await.unwrap();

    list.assert();
    detail.assert();
    featured.assert();
    verify.assert();
    remove.assert();
    assert_eq!(listed.len(), 2);
    assert_eq!(property.price, 4_500_000.0);
    assert_eq!(featured_list[0].city, "Mumbai");
}

#[tokio::test]
async fn similar_properties_exclude_the_current_listing() {
    let h = harness().await;
    h.server.mock(|when, then| {
        when.method(GET)
            .path("/api/properties/")
            .query_param("exclude_id", "1")
            .query_param("limit", "4");
        then.status(200).json_body(json!([
            property_json(1, "Pune"),
            property_json(2, "Pune"),
            property_json(3, "Pune"),
            property_json(4, "Pune"),
            property_json(5, "Pune"),
            property_json(6, "Pune")
        ]));
    });

    let current: Property = serde_json::from_value(property_json(1, "Pune")).unwrap();
    let similar = h.client.similar_properties(&current).await.unwrap();

    assert_eq!(similar.len(), 4);
    assert!(similar.iter().all(|p| p.id != "1"));
}

#[tokio::test]
async fn create_property_posts_multipart_with_images() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");

    let create = h.server.mock(|when, then| {
        when.method(POST)
            .path("/api/properties/")
            .header("Authorization", "Bearer A1")
            .body_contains("name=\"title\"")
            .body_contains("name=\"images\"; filename=\"front.jpg\"");
        then.status(201).json_body(property_json(7, "Pune"));
    });

    let draft = PropertyDraft {
        title: "Flat 7".into(),
        description: "Sunny".into(),
        price: "4500000".into(),
        bedrooms: "2".into(),
        property_type: ListingType::Sale,
        city: "Pune".into(),
        state: "Maharashtra".into(),
        address: "12 MG Road".into(),
        zip_code: "411001".into(),
        images: vec![ImageUpload {
            file_name: "front.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: b"fake-jpeg".to_vec(),
        }],
        ..PropertyDraft::default()
    };
    let created = h.client.create_property(&draft).await.unwrap();

    create.assert();
    assert_eq!(created.id, "7");
}

#[tokio::test]
async fn create_property_without_images_is_rejected_locally() {
    let h = harness().await;
    let create = h.server.mock(|when, then| {
        when.method(POST).path("/api/properties/");
        then.status(201).json_body(property_json(7, "Pune"));
    });

    let draft = PropertyDraft {
        title: "Flat 7".into(),
        description: "Sunny".into(),
        price: "4500000".into(),
        city: "Pune".into(),
        state: "Maharashtra".into(),
        address: "12 MG Road".into(),
        zip_code: "411001".into(),
        ..PropertyDraft::default()
    };
    let err = h.client.create_property(&draft).await.unwrap_err();

    assert_eq!(err.error, "Please upload at least one property image.");
    assert_eq!(create.hits(), 0);
}

#[tokio::test]
async fn inquiry_endpoints_round_trip() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");

    let create = h.server.mock(|when, then| {
        when.method(POST)
            .path("/api/inquiries/")
            .json_body(json!({ "property": "1", "message": "Can I visit Sunday?" }));
        then.status(201).json_body(json!({
            "id": 9,
            "message": "Can I visit Sunday?",
            "status": "pending",
            "property": 1
        }));
    });
    let approve = h.server.mock(|when, then| {
        when.method(POST).path("/api/inquiries/9/approve/");
        then.status(200).json_body(json!({ "status": "approved" }));
    });
    let reject = h.server.mock(|when, then| {
        when.method(POST).path("/api/inquiries/10/reject/");
        then.status(200).json_body(json!({ "status": "rejected" }));
    });

    let inquiry = h
        .client
        .create_inquiry(&CreateInquiry {
            property: "1".into(),
            message: "Can I visit Sunday?".into(),
        })
        .await
        .unwrap();
    h.client.approve_inquiry("9").await.unwrap();
    h.client.reject_inquiry("10").await.unwrap();

    create.assert();
    approve.assert();
    reject.assert();
    assert_eq!(inquiry.status, InquiryStatus::Pending);
    assert_eq!(inquiry.property.and_then(|p| p.id).as_deref(), Some("1"));
}

#[tokio::test]
async fn empty_inquiry_message_is_rejected_locally() {
    let h = harness().await;
    let create = h.server.mock(|when, then| {
        when.method(POST).path("/api/inquiries/");
        then.status(201).json_body(json!({}));
    });

    let err = h
        .client
        .create_inquiry(&CreateInquiry {
            property: "1".into(),
            message: "   ".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Validation);
    assert_eq!(create.hits(), 0);
}

#[tokio::test]
async fn server_errors_keep_status_and_message() {
    let h = harness().await;
    h.server.mock(|when, then| {
        when.method(GET).path("/api/properties/404/");
        then.status(404).json_body(json!({ "detail": "Not found." }));
    });
    h.server.mock(|when, then| {
        when.method(GET).path("/api/properties/500/");
        then.status(500).body("oops");
    });

    let missing = h.client.get_property("404").await.unwrap_err();
    let broken = h.client.get_property("500").await.unwrap_err();

    assert_eq!(missing.status, Some(404));
    assert_eq!(missing.error, "Not found.");
    assert_eq!(broken.kind, ApiErrorKind::Remote);
    assert!(h.navigator.visited().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let storage = MemoryStorage::shared();
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9")
        .with_storage(storage)
        .with_navigator(RecordingNavigator::shared());

    let err = client.featured_properties().await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.code(), "REQUEST_FAILED");
}

#[tokio::test]
async fn session_end_hooks_run_for_every_clone() {
    let h = harness().await;
    seed_session(&h.storage, "A1", "R1");
    let ended = Rc::new(std::cell::Cell::new(0));
    let counter = ended.clone();
    h.client.on_session_end(move || counter.set(counter.get() + 1));

    h.client.clone().end_session();

    assert_eq!(ended.get(), 1);
    assert!(h.client.tokens().access_token().is_none());
    assert_eq!(h.navigator.last().as_deref(), Some(LOGIN_ROUTE));
}
