//! Integration Tests - End-to-end Store Behaviour
//!
//! Exercises the store through its public API over the in-memory and
//! file backends, and uses mockall to drive storage failure paths.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use mockall::mock;
use mockall::predicate::*;

use lostchain_store::adapters::clock::FixedClock;
use lostchain_store::adapters::storage::{InMemoryStorage, JsonFileStorage, UnavailableStorage};
use lostchain_store::domain::activity::{ActivityKind, DEFAULT_ACTIVITY_CAP};
use lostchain_store::domain::{
    FoundItemUpdate, LostItemUpdate, MatchStatus, MatchUpdate, NewFoundItem, NewLostItem,
    NewMatch, NewProfile, ProfileUpdate, ReportStatus, WalletAddress,
};
use lostchain_store::ports::storage::{KeyValueStorage, StorageError};
use lostchain_store::{DataStore, StoreError, StoreOptions};

// ---- Mock Definitions ----

mock! {
    pub Storage {}

    impl KeyValueStorage for Storage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
        fn remove(&self, key: &str) -> Result<(), StorageError>;
        fn is_available(&self) -> bool;
    }
}

// ---- Helpers ----

fn user() -> WalletAddress {
    WalletAddress::new("0xABC").unwrap()
}

fn backpack() -> NewFoundItem {
    NewFoundItem {
        category: "bags".into(),
        subcategory: "backpacks".into(),
        item_type: "Backpack".into(),
        brand: "Nike".into(),
        color: "Black".into(),
        distinct_features: "Keychain shaped like a fox".into(),
        location_found: "Main library".into(),
        date_found: "2024-03-01".into(),
        current_location: "Campus security".into(),
        finder_notes: Some("Left on the second floor".into()),
        reward: Some("0.010".into()),
    }
}

fn laptop() -> NewLostItem {
    NewLostItem {
        category: "electronics".into(),
        subcategory: "computers".into(),
        item_type: "Laptop".into(),
        brand: "Dell".into(),
        color: "Silver".into(),
        distinct_features: "Dent on the back corner".into(),
        location: "Lecture hall B".into(),
        date_lost: "2024-02-28".into(),
        reward_amount: "0.050".into(),
    }
}

fn profile(address: &str) -> NewProfile {
    NewProfile {
        wallet_address: address.into(),
        full_name: "Katherine Johnson".into(),
        email: "kj@example.edu".into(),
        phone_number: "555.867.5309".into(),
        university: None,
    }
}

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("lostchain-it-{}", uuid::Uuid::new_v4()))
}

// ---- End-to-end ----

#[test]
fn test_found_item_report_end_to_end() {
    let store = DataStore::new(InMemoryStorage::new());
    let report = store.add_found_item(backpack(), &user()).unwrap();

    assert_eq!(report.status, ReportStatus::Pending);
    assert_eq!(report.user_address.as_deref(), Some("0xABC"));

    let activity = store.activity(&user());
    assert_eq!(activity[0].message, "Reported found item: Backpack (Nike)");
    assert_eq!(activity[0].kind, ActivityKind::Report);
}

#[test]
fn test_n_adds_give_n_unique_ids() {
    let store = DataStore::new(InMemoryStorage::new());
    for _ in 0..20 {
        store.add_lost_item(laptop(), &user()).unwrap();
    }

    let mut ids: Vec<String> = store.lost_items(&user()).into_iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 20);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_activity_capped_at_fifty() {
    let store = DataStore::new(InMemoryStorage::new());
    let first = store.add_lost_item(laptop(), &user()).unwrap();
    let first_activity_len = store.activity(&user()).len();
    assert_eq!(first_activity_len, 1);

    for n in 1..=DEFAULT_ACTIVITY_CAP {
        let record = NewMatch {
            item_name: format!("Item {n}"),
            other_party: "0xdef".into(),
            ..NewMatch::default()
        };
        store.add_match(record, &user()).unwrap();
    }

    let activity = store.activity(&user());
    assert_eq!(activity.len(), DEFAULT_ACTIVITY_CAP);
    assert_eq!(activity[0].message, format!("Match found for Item {DEFAULT_ACTIVITY_CAP}"));
    assert!(activity.iter().all(|a| a.kind == ActivityKind::Match));
    // The lost report itself is still there; only its log entry aged out.
    assert_eq!(store.lost_items(&user())[0].id, first.id);
}

#[test]
fn test_stats_follow_status_changes() {
    let store = DataStore::new(InMemoryStorage::new());
    let report = store.add_found_item(backpack(), &user()).unwrap();

    let stats = store.stats(&user());
    assert_eq!(stats.items_found, 1);
    assert_eq!(stats.rewards_earned, "0.000");

    store
        .update_found_item(&report.id, FoundItemUpdate::status(ReportStatus::Confirmed), &user())
        .unwrap();
    assert_eq!(store.stats(&user()).rewards_earned, "0.010");
}

#[test]
fn test_oversized_rewards_saturate_instead_of_panicking() {
    let store = DataStore::new(InMemoryStorage::new());
    let huge = NewFoundItem {
        reward: Some("79228162514264337593543950335".into()),
        ..backpack()
    };
    for _ in 0..2 {
        let report = store.add_found_item(huge.clone(), &user()).unwrap();
        store
            .update_found_item(&report.id, FoundItemUpdate::status(ReportStatus::Confirmed), &user())
            .unwrap();
    }

    let stats = store.stats(&user());
    assert_eq!(stats.rewards_earned, "79228162514264337593543950335.000");
    assert_eq!(store.dashboard(&user()).stats, stats);
}

#[test]
fn test_invalid_timestamp_format_falls_back_to_default() {
    let store = DataStore::new(InMemoryStorage::new()).with_options(StoreOptions {
        activity_timestamp_format: "%Q".into(),
        ..StoreOptions::default()
    });

    store.add_lost_item(laptop(), &user()).unwrap();

    let activity = store.activity(&user());
    assert_eq!(activity.len(), 1);
    assert!(!activity[0].timestamp.is_empty());
    assert!(!activity[0].timestamp.contains('%'));
}

#[test]
fn test_active_matches_count_only_pending() {
    let store = DataStore::new(InMemoryStorage::new());
    let a = store
        .add_match(
            NewMatch {
                item_name: "Keys".into(),
                other_party: "0x1".into(),
                ..NewMatch::default()
            },
            &user(),
        )
        .unwrap();
    store
        .add_match(
            NewMatch {
                item_name: "Phone".into(),
                other_party: "0x2".into(),
                ..NewMatch::default()
            },
            &user(),
        )
        .unwrap();
    assert_eq!(store.stats(&user()).active_matches, 2);

    store
        .update_match(&a.id, MatchUpdate::status(MatchStatus::Confirmed), &user())
        .unwrap();
    assert_eq!(store.stats(&user()).active_matches, 1);
}

#[test]
fn test_clear_all_data_keeps_profile() {
    let store = DataStore::new(InMemoryStorage::new());
    store.create_profile(profile("0xABC")).unwrap();
    store.add_lost_item(laptop(), &user()).unwrap();
    store.add_found_item(backpack(), &user()).unwrap();
    store
        .add_match(
            NewMatch {
                item_name: "Laptop".into(),
                other_party: "0xdef".into(),
                ..NewMatch::default()
            },
            &user(),
        )
        .unwrap();

    store.clear_all_data(&user()).unwrap();

    assert!(store.lost_items(&user()).is_empty());
    assert!(store.found_items(&user()).is_empty());
    assert!(store.activity(&user()).is_empty());
    assert!(store.matches(&user()).is_empty());
    assert!(store.profile(&user()).is_some());
}

#[test]
fn test_users_are_isolated() {
    let store = DataStore::new(InMemoryStorage::new());
    let other = WalletAddress::new("0xDEF").unwrap();
    store.add_lost_item(laptop(), &user()).unwrap();

    assert!(store.lost_items(&other).is_empty());
    assert!(store.activity(&other).is_empty());

    store.clear_all_data(&other).unwrap();
    assert_eq!(store.lost_items(&user()).len(), 1);
}

#[test]
fn test_profile_roundtrip_and_empty_update() {
    let store = DataStore::new(InMemoryStorage::new());
    let created = store.create_profile(profile("0xAbCdEf")).unwrap();
    assert_eq!(created.wallet_address, "0xabcdef");

    let addr = WalletAddress::new(created.wallet_address.clone()).unwrap();
    assert_eq!(store.profile(&addr).as_ref(), Some(&created));

    let unchanged = store.update_profile(&addr, ProfileUpdate::default()).unwrap();
    assert_eq!(unchanged, Some(created));

    let missing = WalletAddress::new("0x999").unwrap();
    assert_eq!(store.update_profile(&missing, ProfileUpdate::default()).unwrap(), None);
}

#[test]
fn test_update_lost_item_with_fixed_clock() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let store = DataStore::with_clock(InMemoryStorage::new(), FixedClock(at));
    let report = store.add_lost_item(laptop(), &user()).unwrap();
    assert_eq!(report.timestamp, at);
    assert!(report.id.starts_with(&format!("lost_{}_", at.timestamp_millis())));

    let changed = store
        .update_lost_item(
            &report.id,
            LostItemUpdate {
                reward_amount: Some("0.100".into()),
                ..LostItemUpdate::default()
            },
            &user(),
        )
        .unwrap();
    assert!(changed);

    let stored = &store.lost_items(&user())[0];
    assert_eq!(stored.reward_amount, "0.100");
    assert_eq!(stored.timestamp, at);
}

// ---- Compatibility with data written by the web client ----

#[test]
fn test_reads_web_client_documents() {
    let storage = InMemoryStorage::new();
    storage
        .set(
            "lostchain_lost_items_0xabc",
            r#"[{
                "id": "lost_1709290000000_abc123xyz",
                "category": "electronics",
                "subcategory": "phones",
                "itemType": "Phone",
                "brand": "Apple",
                "color": "Black",
                "distinctFeatures": "Cracked screen corner",
                "location": "Cafeteria",
                "dateLost": "2024-03-01",
                "rewardAmount": "0.020",
                "status": "confirmed",
                "timestamp": "2024-03-01T10:46:40.000Z",
                "userAddress": "0xABC"
            }]"#,
        )
        .unwrap();
    storage
        .set(
            "lostchain_user_profiles",
            r#"{"0xabc": {
                "walletAddress": "0xabc",
                "fullName": "Ada",
                "email": "ada@example.edu",
                "phoneNumber": "5551234567",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "isProfileComplete": true
            }}"#,
        )
        .unwrap();

    let store = DataStore::new(storage);
    assert_eq!(store.lost_items(&user())[0].item_type, "Phone");
    assert_eq!(store.stats(&user()).rewards_paid, "0.020");
    assert!(store.is_profile_complete(&user()));
}

#[test]
fn test_corrupt_document_reads_as_empty() {
    let storage = InMemoryStorage::new();
    storage.set("lostchain_found_items_0xabc", "not json at all").unwrap();
    let store = DataStore::new(storage);

    assert!(store.found_items(&user()).is_empty());
    // The next add starts a fresh list.
    store.add_found_item(backpack(), &user()).unwrap();
    assert_eq!(store.found_items(&user()).len(), 1);
}

// ---- File backend ----

#[test]
fn test_file_backend_persists_across_instances() {
    let dir = temp_dir();
    {
        let store = DataStore::new(JsonFileStorage::open(&dir).unwrap());
        store.create_profile(profile("0xABC")).unwrap();
        store.add_found_item(backpack(), &user()).unwrap();
    }

    let store = DataStore::new(JsonFileStorage::open(&dir).unwrap());
    assert_eq!(store.found_items(&user()).len(), 1);
    assert_eq!(store.activity(&user()).len(), 1);
    assert!(store.profile(&user()).is_some());
    assert!(dir.join("lostchain_found_items_0xabc.json").exists());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_shared_backend_through_arc() {
    let storage = Arc::new(InMemoryStorage::new());
    let writer = DataStore::new(Arc::clone(&storage));
    let reader = DataStore::new(Arc::clone(&storage));

    writer.add_lost_item(laptop(), &user()).unwrap();
    assert_eq!(reader.lost_items(&user()).len(), 1);
}

// ---- Failure paths ----

#[test]
fn test_unavailable_storage_degrades_to_empty() {
    let store = DataStore::new(UnavailableStorage);

    assert!(store.lost_items(&user()).is_empty());
    assert!(store.profile(&user()).is_none());
    assert_eq!(store.stats(&user()).rewards_earned, "0.000");

    let err = store.add_lost_item(laptop(), &user()).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Storage {
            source: StorageError::Unavailable,
            ..
        }
    ));
    assert!(store.clear_all_data(&user()).is_err());
}

#[test]
fn test_failed_report_write_skips_activity() {
    let mut storage = MockStorage::new();
    storage.expect_get().returning(|_| Ok(None));
    storage
        .expect_set()
        .with(eq("lostchain_lost_items_0xabc"), always())
        .times(1)
        .returning(|key, _| {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::other("disk full"),
            })
        });

    let store = DataStore::new(storage);
    let err = store.add_lost_item(laptop(), &user()).unwrap_err();
    match err {
        StoreError::Storage { key, .. } => assert_eq!(key, "lostchain_lost_items_0xabc"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_read_error_falls_back_to_default() {
    let mut storage = MockStorage::new();
    storage.expect_get().returning(|key| {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::other("permission denied"),
        })
    });
    storage.expect_is_available().return_const(true);

    let store = DataStore::new(storage);
    assert!(store.is_healthy());
    assert!(store.matches(&user()).is_empty());
    assert!(!store.is_profile_complete(&user()));
}

#[test]
fn test_update_miss_never_writes() {
    let mut storage = MockStorage::new();
    storage.expect_get().returning(|_| Ok(Some("[]".to_string())));
    storage.expect_set().never();

    let store = DataStore::new(storage);
    let updated = store
        .update_match("match_0_nothing", MatchUpdate::status(MatchStatus::Confirmed), &user())
        .unwrap();
    assert!(!updated);
}
