use mentorlink_core::user::{ProfileStore, UserProfile, UserRole};
use mentorlink_infrastructure::TomlProfileRepository;
use tempfile::TempDir;

fn test_profile() -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        name: "김민수".to_string(),
        email: "minsu.kim@example.com".to_string(),
        role: UserRole::Mentor,
        avatar: Some("/korean-male-developer.png".to_string()),
        expertise: Some("프론트엔드 개발".to_string()),
        bio: Some("8년차 시니어 개발자입니다.".to_string()),
    }
}

#[tokio::test]
async fn test_load_without_stored_profile() {
    let temp_dir = TempDir::new().unwrap();
    let store = TomlProfileRepository::with_path(temp_dir.path().join("profile.toml"));

    // No file yet, nobody is logged in
    let profile = store.load().await.expect("Should load profile");
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let store = TomlProfileRepository::with_path(temp_dir.path().join("profile.toml"));

    store.save(&test_profile()).await.expect("Should save");

    let loaded = store
        .load()
        .await
        .expect("Should load profile")
        .expect("Profile should be stored");
    assert_eq!(loaded, test_profile());
}

#[tokio::test]
async fn test_save_replaces_existing_record() {
    let temp_dir = TempDir::new().unwrap();
    let store = TomlProfileRepository::with_path(temp_dir.path().join("profile.toml"));

    store.save(&test_profile()).await.unwrap();

    let mut next = test_profile();
    next.id = "2".to_string();
    next.name = "박지영".to_string();
    next.role = UserRole::Mentee;
    store.save(&next).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.id, "2");
    assert_eq!(loaded.role, UserRole::Mentee);
}

#[tokio::test]
async fn test_clear_removes_the_record() {
    let temp_dir = TempDir::new().unwrap();
    let store = TomlProfileRepository::with_path(temp_dir.path().join("profile.toml"));

    store.save(&test_profile()).await.unwrap();
    store.clear().await.expect("Should clear");

    assert!(store.load().await.unwrap().is_none());

    // Clearing again is fine
    store.clear().await.expect("Clear should be idempotent");
}

#[tokio::test]
async fn test_profile_with_optional_fields_absent() {
    let temp_dir = TempDir::new().unwrap();
    let store = TomlProfileRepository::with_path(temp_dir.path().join("profile.toml"));

    let profile = UserProfile {
        id: "3".to_string(),
        name: "신입".to_string(),
        email: "new@example.com".to_string(),
        role: UserRole::Mentee,
        avatar: None,
        expertise: None,
        bio: None,
    };
    store.save(&profile).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded, profile);
}
