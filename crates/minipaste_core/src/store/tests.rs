//! Paste store tests against a temporary data directory.

use super::*;
use crate::naming::generate_id;
use crate::test_support::{setup_temp_store, stored_file_names};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

fn paste(id: &str, language: Language, expiration: i64, raw: &str) -> Paste {
    Paste::from_submission(id.to_string(), language, expiration, raw)
}

#[test]
fn open_creates_missing_data_directory() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let nested = temp.path().join("a").join("b").join("data");
    let store = PasteStore::open(&nested, 6).expect("open");
    assert!(nested.is_dir());
    assert_eq!(store.dir(), nested.as_path());
    assert_eq!(store.id_length(), 6);
}

#[test]
fn save_writes_record_name_and_escaped_body() {
    let (store, _temp) = setup_temp_store();
    let paste = paste("Ab3dE9", Language::Perl, 1_404_658_345, "print \"<hi>\";");
    store.save(&paste).expect("save");

    let names = stored_file_names(&store);
    assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["Ab3dE9-perl-1404658345"]);
    let body = fs::read_to_string(store.dir().join("Ab3dE9-perl-1404658345")).expect("body");
    assert_eq!(body, "print &#34;&lt;hi&gt;&#34;;");
}

#[cfg(unix)]
#[test]
fn records_are_owner_read_write_only() {
    use std::os::unix::fs::PermissionsExt;

    let (store, _temp) = setup_temp_store();
    store
        .save(&paste("Ab3dE9", Language::Text, 10, "saved"))
        .expect("save");
    let mut rng = StdRng::seed_from_u64(11);
    let created = store
        .create(&mut rng, Language::Text, 10, "created")
        .expect("create");

    for name in ["Ab3dE9-text-10".to_string(), format!("{}-text-10", created.id)] {
        let mode = fs::metadata(store.dir().join(&name))
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600, "record: {}", name);
    }
}

#[test]
fn save_then_load_round_trips_all_fields() {
    let (store, _temp) = setup_temp_store();
    for (id, language) in [("abc123", Language::Python), ("ZZZZZZ", Language::Sql)] {
        let original = paste(id, language, 1_700_007_200, "SELECT 'x' < 1;\n");
        store.save(&original).expect("save");
        assert_eq!(store.load(id).expect("load"), original);
    }
}

#[test]
fn saving_same_record_twice_overwrites_body() {
    let (store, _temp) = setup_temp_store();
    store
        .save(&paste("abc123", Language::Text, 100, "first"))
        .expect("first save");
    store
        .save(&paste("abc123", Language::Text, 100, "second"))
        .expect("second save");

    assert_eq!(stored_file_names(&store).len(), 1);
    assert_eq!(store.load("abc123").expect("load").content, "second");
}

#[test]
fn saving_same_id_with_new_suffix_leaves_both_records() {
    let (store, _temp) = setup_temp_store();
    store
        .save(&paste("abc123", Language::Text, 100, "plain"))
        .expect("text save");
    store
        .save(&paste("abc123", Language::Bash, 200, "echo hi"))
        .expect("bash save");

    let names: Vec<String> = stored_file_names(&store).into_iter().collect();
    assert_eq!(names, vec!["abc123-bash-200", "abc123-text-100"]);

    // Resolution is by file-name order, so the bash record wins.
    let loaded = store.load("abc123").expect("load");
    assert_eq!(loaded.language, Language::Bash);
    assert_eq!(loaded.expiration, 200);
    assert_eq!(loaded.content, "echo hi");
}

#[test]
fn save_leaves_no_temporary_files_behind() {
    let (store, _temp) = setup_temp_store();
    for n in 0..5 {
        store
            .save(&paste("abc123", Language::Text, n, "body"))
            .expect("save");
    }
    assert!(stored_file_names(&store)
        .iter()
        .all(|name| !name.starts_with('.')));
}

#[test]
fn save_rejects_unencodable_pastes() {
    let (store, _temp) = setup_temp_store();
    let cases = [
        paste("abc-12", Language::Text, 1, "x"),
        paste("abc12", Language::Text, 1, "x"),
        paste("../../x", Language::Text, 1, "x"),
        paste("abc123", Language::Text, -1, "x"),
    ];
    for case in cases {
        let err = store.save(&case).expect_err("invalid paste");
        assert!(matches!(err, AppError::BadRequest(_)), "paste: {:?}", case);
    }
    assert!(stored_file_names(&store).is_empty());
}

#[test]
fn load_unknown_or_invalid_id_is_not_found() {
    let (store, _temp) = setup_temp_store();
    store
        .save(&paste("abc123", Language::Text, 1, "x"))
        .expect("save");

    for id in ["zzz999", "abc12", "abc1234", "*", "../abc", "abc12?"] {
        let err = store.load(id).expect_err(id);
        assert!(matches!(err, AppError::NotFound), "id: {}", id);
    }
}

#[test]
fn load_corrupted_record_name_is_malformed() {
    let (store, _temp) = setup_temp_store();
    for name in ["abc123-perl", "abc123-Perl-100", "abc123-perl-1x0"] {
        fs::write(store.dir().join(name), "body").expect("write fixture");
        let err = store.load("abc123").expect_err(name);
        assert!(matches!(err, AppError::MalformedRecord(_)), "name: {}", name);
        fs::remove_file(store.dir().join(name)).expect("cleanup");
    }
}

#[test]
fn load_non_utf8_body_is_malformed() {
    let (store, _temp) = setup_temp_store();
    fs::write(store.dir().join("abc123-text-5"), [0xff, 0xfe, 0x00]).expect("write fixture");
    let err = store.load("abc123").expect_err("invalid utf-8");
    assert!(matches!(err, AppError::MalformedRecord(ref msg) if msg.contains("UTF-8")));
}

#[test]
fn load_unsupported_language_tag_falls_back_to_text() {
    let (store, _temp) = setup_temp_store();
    fs::write(store.dir().join("abc123-cobol-5"), "IDENTIFICATION DIVISION.").expect("write");
    let loaded = store.load("abc123").expect("load");
    assert_eq!(loaded.language, Language::Text);
    assert_eq!(loaded.expiration, 5);
}

#[test]
fn load_takes_metadata_from_hand_written_record_name() {
    let (store, _temp) = setup_temp_store();
    fs::write(store.dir().join("Zz9yX8-c-1700000000"), "int main;").expect("write fixture");
    let loaded = store.load("Zz9yX8").expect("load");
    assert_eq!(
        loaded,
        Paste {
            id: "Zz9yX8".to_string(),
            language: Language::C,
            expiration: 1_700_000_000,
            content: "int main;".to_string(),
        }
    );
}

#[test]
fn load_ignores_directories_with_matching_prefix() {
    let (store, _temp) = setup_temp_store();
    fs::create_dir(store.dir().join("abc123-text-1")).expect("mkdir");
    assert!(matches!(store.load("abc123"), Err(AppError::NotFound)));
}

#[test]
fn create_falls_back_to_text_for_unknown_language() {
    let (store, _temp) = setup_temp_store();
    let mut rng = StdRng::seed_from_u64(0);
    let language = Language::from_tag_or_default(Some("cobol"));
    let created = store
        .create(&mut rng, language, 1_700_003_600, "MOVE 1 TO X.")
        .expect("create");

    let names = stored_file_names(&store);
    assert!(names.contains(&format!("{}-text-1700003600", created.id)));
    assert_eq!(store.load(&created.id).expect("load").language, Language::Text);
}

#[test]
fn create_skips_identifiers_already_on_disk() {
    let (store, _temp) = setup_temp_store();
    let seed = 1234;
    let first_candidate = generate_id(&mut StdRng::seed_from_u64(seed), 6);
    store
        .save(&paste(&first_candidate, Language::Ruby, 50, "puts 1"))
        .expect("occupy first candidate");

    let mut rng = StdRng::seed_from_u64(seed);
    let created = store
        .create(&mut rng, Language::Text, 60, "fresh")
        .expect("create");

    assert_ne!(created.id, first_candidate);
    assert_eq!(store.load(&first_candidate).expect("load").content, "puts 1");
    assert_eq!(store.load(&created.id).expect("load").content, "fresh");
}

#[test]
fn concurrent_creates_with_identical_seeds_never_share_ids() {
    let (store, _temp) = setup_temp_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..3)
        .map(|worker| {
            let store = store.clone();
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(99);
                (0..4)
                    .map(|n| {
                        store
                            .create(&mut rng, Language::Text, 1, &format!("{}-{}", worker, n))
                            .expect("create")
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<String> = handles
        .into_iter()
        .flat_map(|handle| handle.join().expect("worker"))
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 12);
    assert_eq!(stored_file_names(&store).len(), 12);
}
