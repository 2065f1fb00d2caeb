// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use majlis::app::config::{self, BackendConfig, Config, GeneralConfig};
use majlis::application::command::{create_post, register};
use majlis::application::port::{LocalStorage, RemoteCollection, SelectQuery, Table};
use majlis::application::session::{IdentityStore, USER_DATA_KEY};
use majlis::domain::{OnboardingForm, PostDraft, PostKind, UserId};
use majlis::error::{Error, Result};
use majlis::infrastructure::FileStorage;
use majlis::ui::theming::ThemeMode;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// Remote that accepts every write and remembers it.
#[derive(Default)]
struct RecordingRemote {
    inserts: Mutex<Vec<(Table, Value)>>,
    reject: bool,
}

impl RecordingRemote {
    fn inserts(&self) -> Vec<(Table, Value)> {
        self.inserts.lock().expect("lock").clone()
    }
}

#[async_trait]
impl RemoteCollection for RecordingRemote {
    async fn select(&self, _query: &SelectQuery) -> Result<Vec<Value>> {
        Ok(Vec::new())
    }

    async fn insert(&self, table: Table, record: Value) -> Result<()> {
        if self.reject {
            return Err(Error::Remote("insert rejected".into()));
        }
        self.inserts.lock().expect("lock").push((table, record));
        Ok(())
    }

    async fn sign_up(&self) -> Result<UserId> {
        Ok(UserId::new("4f0c-user"))
    }
}

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            language: Some("ar".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        backend: BackendConfig {
            url: Some("https://example.supabase.co".to_string()),
            anon_key: Some("anon".to_string()),
        },
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.backend.resolve(),
        Some((
            "https://example.supabase.co".to_string(),
            "anon".to_string()
        ))
    );
}

#[tokio::test]
async fn test_onboarding_persists_identity_across_restarts() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let remote = RecordingRemote::default();

    {
        let (storage, warning) = FileStorage::open(dir.path());
        assert!(warning.is_none());
        let identities = IdentityStore::new(Arc::new(storage));
        let identity = register(&remote, &identities, &OnboardingForm::new("Alice", "30"))
            .await
            .expect("registration succeeds");
        assert_eq!(identity.name, "Alice");
        assert_eq!(identity.age, 30);
    }

    // A fresh store over the same directory sees the cached identity.
    let (storage, _) = FileStorage::open(dir.path());
    let raw = storage
        .get_item(USER_DATA_KEY)
        .expect("read storage")
        .expect("userData present");
    let stored: Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(stored, json!({ "id": "4f0c-user", "name": "Alice", "age": 30 }));

    let identities = IdentityStore::new(Arc::new(storage));
    assert!(identities.has_session());
    assert_eq!(
        remote.inserts(),
        vec![(
            Table::Profiles,
            json!({ "id": "4f0c-user", "name": "Alice", "age": 30 })
        )]
    );
}

#[tokio::test]
async fn test_create_activity_after_onboarding() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (storage, _) = FileStorage::open(dir.path());
    let identities = IdentityStore::new(Arc::new(storage));
    let remote = RecordingRemote::default();

    register(&remote, &identities, &OnboardingForm::new("Alice", "30"))
        .await
        .expect("registration succeeds");
    let me = identities.require().expect("identity cached");

    create_post(
        &remote,
        &me,
        PostKind::Activity,
        &PostDraft::new("Picnic", "Sunday picnic"),
    )
    .await
    .expect("insert accepted");

    let (table, record) = remote.inserts().pop().expect("post inserted");
    assert_eq!(table, Table::Posts);
    assert_eq!(
        record,
        json!({
            "user_id": "4f0c-user",
            "type": "activity",
            "title": "Picnic",
            "description": "Sunday picnic"
        })
    );
}

#[tokio::test]
async fn test_rejected_profile_insert_leaves_no_session() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (storage, _) = FileStorage::open(dir.path());
    let identities = IdentityStore::new(Arc::new(storage));
    let remote = RecordingRemote {
        reject: true,
        ..RecordingRemote::default()
    };

    let result = register(&remote, &identities, &OnboardingForm::new("Alice", "30")).await;
    assert!(matches!(result, Err(Error::Remote(_))));
    assert!(!identities.has_session());
}
