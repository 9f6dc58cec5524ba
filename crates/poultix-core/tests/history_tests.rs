//! Reading history against the on-disk SQLite store.

use anyhow::Result;

use poultix_core::models::PhStatus;
use poultix_core::{EngineConfig, ReadingService, SqliteStore};

#[test]
fn test_history_survives_reopen() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("readings.db");

    {
        let service = ReadingService::new(SqliteStore::open(&path)?, &EngineConfig::default());
        service.submit("6.9", Some("hen-1".into()))?;
        service.submit("4.0", Some("hen-2".into()))?;
    }

    let service = ReadingService::new(SqliteStore::open(&path)?, &EngineConfig::default());
    let recent = service.recent()?;

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].chicken_id.as_deref(), Some("hen-2"));
    assert_eq!(recent[0].feedback.status, PhStatus::SevereAcidosis);
    assert_eq!(recent[1].feedback.status, PhStatus::HealthyRange);
    Ok(())
}

#[test]
fn test_history_cap_with_custom_key() -> Result<()> {
    let config = EngineConfig::from_json(r#"{"history_limit": 4, "history_key": "flock_a"}"#)?;
    let service = ReadingService::new(SqliteStore::open_in_memory()?, &config);

    for raw in ["5.0", "5.5", "6.0", "6.5", "7.0", "7.5"] {
        service.submit(raw, None)?;
    }

    let values: Vec<f64> = service.recent()?.iter().map(|e| e.value).collect();
    assert_eq!(values, vec![7.5, 7.0, 6.5, 6.0]);
    Ok(())
}

#[test]
fn test_entries_have_unique_ids_and_timestamps() -> Result<()> {
    let service = ReadingService::new(SqliteStore::open_in_memory()?, &EngineConfig::default());
    let a = service.submit("6.8", None)?;
    let b = service.submit("6.8", None)?;

    assert_ne!(a.id, b.id);
    assert!(chrono::DateTime::parse_from_rfc3339(&a.timestamp).is_ok());
    Ok(())
}
