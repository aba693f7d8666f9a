//! Session tests: lifecycle rules and file round trips through `execute`.

use std::path::Path;

use tempfile::TempDir;

use crate::{Command, ContactDbConfig, Error, NamePolicy, Output, Session};

fn create_test_session(dir: &Path) -> Session {
    Session::new(ContactDbConfig::default().with_data_dir(dir))
}

fn add(session: &mut Session, name: &str, phone: u64, zip: u32) {
    let result = session.execute(Command::AddContact {
        name: name.into(),
        phone,
        zip,
    });
    assert!(matches!(result, Ok(Output::Added { .. })), "{:?}", result);
}

fn names(session: &mut Session) -> Vec<String> {
    match session.execute(Command::PrintAll).unwrap() {
        Output::Contacts { records, .. } => records.into_iter().map(|r| r.name).collect(),
        other => panic!("expected Contacts, got {:?}", other),
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_create_add_clear_lifecycle() {
    let temp = TempDir::new().unwrap();
    let mut session = create_test_session(temp.path());

    assert!(!session.is_active());
    session
        .execute(Command::CreateLog {
            name: "friends".into(),
        })
        .unwrap();
    assert!(session.is_active());

    add(&mut session, "Bob", 6_125_551_234, 55_414);
    add(&mut session, "Alice", 6_125_550_000, 55_455);

    let result = session.execute(Command::Clear).unwrap();
    assert_eq!(
        result,
        Output::Cleared {
            name: "friends".into(),
            released: 2
        }
    );
    assert!(!session.is_active());
}

#[test]
fn test_every_query_requires_active_log() {
    let temp = TempDir::new().unwrap();
    let mut session = create_test_session(temp.path());

    for cmd in [
        Command::LogName,
        Command::Lookup { name: "Bob".into() },
        Command::Clear,
        Command::PrintAll,
        Command::WriteText,
        Command::WriteBinary,
        Command::AddContact {
            name: "Bob".into(),
            phone: 6_125_551_234,
            zip: 55_414,
        },
    ] {
        let result = session.execute(cmd.clone());
        assert!(
            matches!(result, Err(Error::NoActiveDirectory)),
            "{} returned {:?}",
            cmd.name(),
            result
        );
    }
}

#[test]
fn test_every_load_requires_inactive_session() {
    let temp = TempDir::new().unwrap();
    let mut session = create_test_session(temp.path());
    session
        .execute(Command::CreateLog {
            name: "friends".into(),
        })
        .unwrap();

    for cmd in [
        Command::CreateLog {
            name: "work".into(),
        },
        Command::ReadText {
            path: temp.path().join("work.txt"),
        },
        Command::ReadBinary {
            path: temp.path().join("work.bin"),
        },
        Command::Open {
            path: temp.path().join("work.bin"),
        },
    ] {
        let result = session.execute(cmd.clone());
        assert!(
            matches!(result, Err(Error::AlreadyActive { .. })),
            "{} returned {:?}",
            cmd.name(),
            result
        );
    }
    assert_eq!(
        session.execute(Command::LogName).unwrap(),
        Output::LogName("friends".into())
    );
}

#[test]
fn test_invalid_contact_leaves_log_unchanged() {
    let temp = TempDir::new().unwrap();
    let mut session = create_test_session(temp.path());
    session.create_log("friends").unwrap();
    add(&mut session, "Bob", 6_125_551_234, 55_414);

    let result = session.execute(Command::AddContact {
        name: "Carol".into(),
        phone: 12_345,
        zip: 55_414,
    });
    assert!(matches!(result, Err(Error::InvalidField { .. })));
    assert_eq!(names(&mut session), vec!["Bob".to_string()]);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_text_file_round_trip_preserves_chain_order() {
    let temp = TempDir::new().unwrap();
    let config = ContactDbConfig {
        bucket_count: 1,
        ..ContactDbConfig::default()
    }
    .with_data_dir(temp.path());
    let mut session = Session::new(config);

    session.create_log("friends").unwrap();
    add(&mut session, "Bob", 6_125_551_234, 55_414);
    add(&mut session, "Alice", 6_125_550_000, 55_455);
    add(&mut session, "Carol", 6_125_559_999, 55_401);
    let before = names(&mut session);

    let path = session.write_text().unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("3\n"));

    session.clear().unwrap();
    session.execute(Command::ReadText { path }).unwrap();
    assert_eq!(names(&mut session), before);
}

#[test]
fn test_binary_file_round_trip_reverses_chain_order() {
    let temp = TempDir::new().unwrap();
    let config = ContactDbConfig {
        bucket_count: 1,
        ..ContactDbConfig::default()
    }
    .with_data_dir(temp.path());
    let mut session = Session::new(config);

    session.create_log("friends").unwrap();
    add(&mut session, "Bob", 6_125_551_234, 55_414);
    add(&mut session, "Alice", 6_125_550_000, 55_455);
    let mut before = names(&mut session);

    let path = session.write_binary().unwrap();
    session.clear().unwrap();
    let loaded = session.execute(Command::ReadBinary { path }).unwrap();
    assert_eq!(
        loaded,
        Output::Loaded {
            name: "friends".into(),
            records: 2,
            format: "binary".into()
        }
    );

    before.reverse();
    assert_eq!(names(&mut session), before);
    assert_eq!(
        session.lookup("Alice").unwrap().map(|p| p.get()),
        Some(6_125_550_000)
    );
}

#[test]
fn test_cross_format_conversion() {
    let temp = TempDir::new().unwrap();
    let mut session = create_test_session(temp.path());
    session.create_log("friends").unwrap();
    add(&mut session, "Bob", 6_125_551_234, 55_414);
    let txt = session.write_text().unwrap();
    session.clear().unwrap();

    session.open(&txt).unwrap();
    let bin = session.write_binary().unwrap();
    session.clear().unwrap();

    session.open(&bin).unwrap();
    assert_eq!(session.current_log_name().unwrap(), "friends");
    assert_eq!(
        session.lookup("Bob").unwrap().map(|p| p.get()),
        Some(6_125_551_234)
    );
}

#[test]
fn test_open_unknown_extension_is_invalid_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("friends.csv");
    std::fs::write(&path, "1\nBob 6125551234 55414\n").unwrap();

    let mut session = create_test_session(temp.path());
    assert!(matches!(
        session.execute(Command::Open { path }),
        Err(Error::InvalidPath { .. })
    ));
    assert!(!session.is_active());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let mut session = create_test_session(temp.path());
    let result = session.read_text(temp.path().join("missing.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!session.is_active());
}

#[test]
fn test_malformed_text_reports_line() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.txt");
    std::fs::write(&path, "2\nBob 6125551234 55414\nAlice notaphone 55455\n").unwrap();

    let mut session = create_test_session(temp.path());
    match session.read_text(&path) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected Parse error, got {:?}", other),
    }
    assert!(!session.is_active());
}

#[test]
fn test_reject_policy_applies_to_session() {
    let temp = TempDir::new().unwrap();
    let config = ContactDbConfig {
        max_name_bytes: 4,
        name_policy: NamePolicy::Reject,
        ..ContactDbConfig::default()
    }
    .with_data_dir(temp.path());
    let mut session = Session::new(config);
    session.create_log("friends").unwrap();

    assert!(matches!(
        session.add_contact("Christopher", 6_125_551_234, 55_414),
        Err(Error::NameTooLong { len: 11, max: 4 })
    ));
    session.add_contact("Bob", 6_125_551_234, 55_414).unwrap();
    assert_eq!(session.directory().unwrap().len(), 1);
}

#[test]
fn test_truncate_policy_stores_prefix() {
    let temp = TempDir::new().unwrap();
    let config = ContactDbConfig {
        max_name_bytes: 4,
        ..ContactDbConfig::default()
    }
    .with_data_dir(temp.path());
    let mut session = Session::new(config);
    session.create_log("friends").unwrap();

    session.add_contact("Christopher", 6_125_551_234, 55_414).unwrap();
    assert_eq!(
        session.lookup("Chri").unwrap().map(|p| p.get()),
        Some(6_125_551_234)
    );
    assert_eq!(session.lookup("Christopher").unwrap(), None);
}
