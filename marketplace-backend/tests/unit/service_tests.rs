// tests/unit/service_tests.rs
use marketplace_backend::{
    api::dto::{auth_dto::LoginRequest, provider_dto::ProviderSearchQuery},
    config::{AdminConfig, AppConfig},
    error::AppError,
    service::{
        account_service::{AccountService, AdminBootstrap},
        booking_service::BookingService,
        directory_service::DirectoryService,
        storage_service::{ImageStorage, LocalImageStorage},
    },
    utils::password::PasswordManager,
};
use std::sync::Arc;

use crate::common::{
    self,
    mock_storage::MockImageStorage,
    test_data::{
        create_booking_request, create_register_form, create_signup_request, unique_email,
        PLUMBER_SERVICE_ID,
    },
};
use marketplace_backend::api::dto::provider_dto::UploadedImage;

fn password_manager() -> Arc<PasswordManager> {
    Arc::new(PasswordManager::new(AppConfig::for_testing().argon2).unwrap())
}

fn directory_service(
    db: &common::db::TestDatabase,
    storage: Arc<dyn ImageStorage>,
) -> DirectoryService {
    DirectoryService::new(
        db.connection.clone(),
        password_manager(),
        storage,
        "https://cdn.test.local".to_string(),
    )
}

#[tokio::test]
async fn test_register_then_search_through_service() {
    let db = common::db::TestDatabase::new().await;
    let storage = MockImageStorage::new();
    let service = directory_service(&db, Arc::new(storage.clone()));
    let email = unique_email("hari");

    service
        .register_provider(
            create_register_form(&email, "Chitwan", PLUMBER_SERVICE_ID),
            Some(UploadedImage {
                file_name: "face.jpg".to_string(),
                content_type: Some("image/jpeg".to_string()),
                data: vec![0xFF, 0xD8, 0xFF],
            }),
        )
        .await
        .unwrap();

    assert_eq!(storage.stored_count(), 1);

    let results = service
        .search_providers(&ProviderSearchQuery {
            service_name: Some("PLUMBER".to_string()),
            location: Some("Chitwan".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    let image_url = results[0].profile_image.clone().unwrap();
    assert!(image_url.starts_with("https://cdn.test.local/static/uploads/"));
    assert!(image_url.ends_with(".jpg"));

    let relative = image_url.trim_start_matches("https://cdn.test.local/");
    assert_eq!(storage.get(relative), Some(vec![0xFF, 0xD8, 0xFF]));
}

#[tokio::test]
async fn test_register_duplicate_is_conflict() {
    let db = common::db::TestDatabase::new().await;
    let service = directory_service(&db, Arc::new(MockImageStorage::new()));
    let email = unique_email("dup");

    service
        .register_provider(create_register_form(&email, "Rampur", PLUMBER_SERVICE_ID), None)
        .await
        .unwrap();
    let err = service
        .register_provider(create_register_form(&email, "Rampur", PLUMBER_SERVICE_ID), None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_local_storage_writes_under_upload_dir() {
    let config = AppConfig::for_testing();
    let storage = LocalImageStorage::from_config(&config.storage);

    let relative = storage.store("avatar.webp", b"webp-bytes").await.unwrap();

    assert!(relative.starts_with("static/uploads/"));
    let file_name = relative.trim_start_matches("static/uploads/");
    let written = tokio::fs::read(config.storage.upload_dir().join(file_name))
        .await
        .unwrap();
    assert_eq!(written, b"webp-bytes");

    let _ = tokio::fs::remove_dir_all(&config.storage.static_dir).await;
}

#[tokio::test]
async fn test_list_locations_and_services() {
    let db = common::db::TestDatabase::new().await;
    let service = directory_service(&db, Arc::new(MockImageStorage::new()));

    let locations = service.list_locations();
    assert_eq!(locations.len(), 10);
    assert_eq!(locations[0], "Kathmandu");
    assert!(!locations.iter().any(|l| l == "All Nepal"));

    let services = service.list_services().await.unwrap();
    assert_eq!(services.len(), 12);
}

#[tokio::test]
async fn test_booking_service_lifecycle() {
    let db = common::db::TestDatabase::new().await;
    let service = BookingService::new(db.connection.clone());

    let created = service
        .create_booking(create_booking_request(21, "Gardening"))
        .await
        .unwrap();
    assert_eq!(created.status, "Pending");

    let updated = service
        .update_booking_status(created.id, "Accepted")
        .await
        .unwrap();
    assert_eq!(updated.status, "Accepted");

    let mine = service.list_bookings_for_user(21).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, "Accepted");

    let err = service
        .update_booking_status(created.id + 1, "Accepted")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "Request not found"));

    let all = service.list_all_bookings().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, "Accepted");
}

#[tokio::test]
async fn test_account_signup_and_login() {
    let db = common::db::TestDatabase::new().await;
    let service = AccountService::new(
        db.connection.clone(),
        password_manager(),
        AdminConfig::default(),
    );
    let email = unique_email("sita");

    let signed_up = service
        .signup(create_signup_request(&email, "correct horse"))
        .await
        .unwrap();
    assert!(!signed_up.is_admin);

    let logged_in = service
        .login(LoginRequest {
            email: email.clone(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(logged_in, signed_up);

    let err = service
        .login(LoginRequest {
            email: email.clone(),
            password: "battery staple".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));

    let err = service
        .signup(create_signup_request(&email, "another"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_ensure_default_admin_uses_configured_credentials() {
    let db = common::db::TestDatabase::new().await;
    let admin = AdminConfig {
        email: "ops@example.com".to_string(),
        password: "ops-password".to_string(),
        full_name: "Super Admin".to_string(),
    };
    let service = AccountService::new(db.connection.clone(), password_manager(), admin);

    let first = service.ensure_default_admin().await.unwrap();
    let second = service.ensure_default_admin().await.unwrap();

    assert_eq!(first, AdminBootstrap::Created("ops@example.com".to_string()));
    assert_eq!(first.message(), "Admin created: ops@example.com");
    assert_eq!(second, AdminBootstrap::AlreadyExists);

    let logged_in = service
        .login(LoginRequest {
            email: "ops@example.com".to_string(),
            password: "ops-password".to_string(),
        })
        .await
        .unwrap();
    assert!(logged_in.is_admin);
}
