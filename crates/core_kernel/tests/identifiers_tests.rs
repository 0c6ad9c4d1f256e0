//! Tests for strongly-typed identifiers

use core_kernel::{AccountId, JournalEntryId, OrganizationId};
use uuid::Uuid;

#[test]
fn test_display_prefixes() {
    assert!(OrganizationId::new().to_string().starts_with("ORG-"));
    assert!(AccountId::new().to_string().starts_with("ACC-"));
    assert!(JournalEntryId::new().to_string().starts_with("JE-"));
}

#[test]
fn test_parse_roundtrip_with_prefix() {
    let original = JournalEntryId::new();
    let parsed: JournalEntryId = original.to_string().parse().unwrap();
    assert_eq!(original, parsed);
}

#[test]
fn test_uuid_conversions() {
    let uuid = Uuid::new_v4();
    let id = AccountId::from(uuid);
    let back: Uuid = id.into();
    assert_eq!(uuid, back);
}

#[test]
fn test_v7_ids_are_time_ordered() {
    let a = JournalEntryId::new_v7();
    // v7 ordering is only guaranteed across millisecond boundaries
    std::thread::sleep(std::time::Duration::from_millis(2));
    let b = JournalEntryId::new_v7();
    assert!(a.as_uuid() < b.as_uuid());
}

#[test]
fn test_serde_is_transparent() {
    let id = AccountId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));
}
