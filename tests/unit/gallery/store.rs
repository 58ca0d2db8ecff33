use super::*;
use crate::{encode::png::encode_png, render::backend::Surface};

fn temp_store(tag: &str) -> (PathBuf, GalleryStore) {
    let dir = std::env::temp_dir().join(format!("deepbooth-gallery-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let store = GalleryStore::open(&dir).unwrap();
    (dir, store)
}

fn encoded(v: u8) -> EncodedComposite {
    encode_png(&Surface {
        width: 2,
        height: 2,
        data: [v, v, v, 255].repeat(4),
        premultiplied: true,
    })
    .unwrap()
}

#[test]
fn save_then_list_newest_first() {
    let (dir, store) = temp_store("list");
    store.save_at(&encoded(1), 1_000).unwrap();
    store.save_at(&encoded(2), 3_000).unwrap();
    store.save_at(&encoded(3), 2_000).unwrap();

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["3000", "2000", "1000"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn colliding_timestamps_get_suffixes() {
    let (dir, store) = temp_store("collide");
    let a = store.save_at(&encoded(1), 5).unwrap();
    let b = store.save_at(&encoded(2), 5).unwrap();
    let c = store.save_at(&encoded(3), 5).unwrap();
    assert_eq!((a.id.as_str(), b.id.as_str(), c.id.as_str()), ("5", "5-1", "5-2"));
    assert_eq!(store.list().unwrap().len(), 3);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn load_png_returns_saved_bytes() {
    let (dir, store) = temp_store("load");
    let enc = encoded(9);
    let rec = store.save_at(&enc, 42).unwrap();
    assert_eq!(store.load_png(&rec.id).unwrap(), enc.png_bytes());
    assert!(matches!(store.load_png("missing"), Err(BoothError::Storage(_))));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn delete_returns_remaining_and_rejects_unknown() {
    let (dir, store) = temp_store("delete");
    store.save_at(&encoded(1), 10).unwrap();
    store.save_at(&encoded(2), 20).unwrap();

    let remaining = store.delete("10").unwrap();
    assert_eq!(
        remaining,
        vec![SavedPhoto {
            id: "20".to_string(),
            timestamp: 20
        }]
    );
    assert!(matches!(store.delete("10"), Err(BoothError::Storage(_))));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn clear_empties_the_archive() {
    let (dir, store) = temp_store("clear");
    store.save_at(&encoded(1), 1).unwrap();
    store.save_at(&encoded(2), 2).unwrap();
    store.clear().unwrap();
    assert!(store.list().unwrap().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn path_like_ids_are_rejected() {
    let (dir, store) = temp_store("ids");
    for bad in ["", "../x", "a/b", "a.png", "id with space"] {
        assert!(
            matches!(store.load_png(bad), Err(BoothError::Validation(_))),
            "{bad:?}"
        );
        assert!(matches!(store.delete(bad), Err(BoothError::Validation(_))));
    }
    assert!(validate_id("1700000000000-2").is_ok());
    assert!(validate_id("snap_01").is_ok());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_records_are_skipped() {
    let (dir, store) = temp_store("skip");
    store.save_at(&encoded(1), 7).unwrap();
    std::fs::write(dir.join("junk.json"), b"{not json").unwrap();
    std::fs::write(dir.join("orphan.json"), br#"{"id":"orphan","timestamp":9}"#).unwrap();

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["7"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn failed_record_write_leaves_no_orphan_png() {
    let (dir, store) = temp_store("atomic");
    // A directory squatting on the temp record path makes the record write fail.
    std::fs::create_dir_all(dir.join("5.json.tmp")).unwrap();

    let err = store.save_at(&encoded(1), 5).unwrap_err();
    assert!(matches!(err, BoothError::Storage(_)), "{err:?}");
    assert!(!dir.join("5.png").exists());
    assert!(!dir.join("5.json").exists());
    assert!(store.list().unwrap().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn clear_removes_orphans_and_corrupt_records() {
    let (dir, store) = temp_store("clear-orphans");
    store.save_at(&encoded(1), 1_700_000_000_002).unwrap();
    std::fs::write(dir.join("1700000000000.png"), b"orphan").unwrap();
    std::fs::write(dir.join("1700000000001.json"), b"{broken").unwrap();
    std::fs::write(dir.join("1700000000003.png.tmp"), b"partial").unwrap();
    std::fs::write(dir.join("notes.txt"), b"keep me").unwrap();

    store.clear().unwrap();

    let mut left: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    left.sort();
    assert_eq!(left, ["notes.txt"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn entry_ids_come_from_gallery_file_names() {
    assert_eq!(entry_id("17.png"), Some("17"));
    assert_eq!(entry_id("17-1.json"), Some("17-1"));
    assert_eq!(entry_id("17.json.tmp"), Some("17"));
    assert_eq!(entry_id("notes.txt"), None);
    assert_eq!(entry_id("a.b.png"), None);
    assert_eq!(entry_id(".png"), None);
}
