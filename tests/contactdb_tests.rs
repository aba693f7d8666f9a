//! End-to-end tests through the top-level `contactdb` crate.

use contactdb::{Command, ContactDbConfig, Error, NamePolicy, Output, Session};
use tempfile::TempDir;

fn session_in(temp: &TempDir) -> Session {
    Session::new(ContactDbConfig::default().with_data_dir(temp.path()))
}

#[test]
fn test_friends_walkthrough() {
    let temp = TempDir::new().unwrap();
    let mut session = session_in(&temp);

    session.create_log("friends").unwrap();
    session.add_contact("Bob", 6_125_551_234, 55_414).unwrap();
    session.add_contact("Alice", 6_125_550_000, 55_455).unwrap();

    assert_eq!(session.directory().unwrap().len(), 2);
    assert_eq!(
        session.lookup("Bob").unwrap().map(|p| p.get()),
        Some(6_125_551_234)
    );
    assert_eq!(session.lookup("Carol").unwrap(), None);

    let txt = session.write_text().unwrap();
    let bin = session.write_binary().unwrap();
    assert_eq!(txt, temp.path().join("friends.txt"));
    assert_eq!(bin, temp.path().join("friends.bin"));

    for (path, format) in [(txt, "text"), (bin, "binary")] {
        session.clear().unwrap();
        let loaded = session.execute(Command::Open { path }).unwrap();
        assert_eq!(
            loaded,
            Output::Loaded {
                name: "friends".into(),
                records: 2,
                format: format.into()
            }
        );
        let mut names: Vec<String> = session
            .print_all()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Alice".to_string(), "Bob".to_string()]);
    }
}

#[test]
fn test_config_file_drives_session() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join(contactdb::CONFIG_FILE_NAME);
    std::fs::write(
        &config_path,
        "bucket_count = 8\nmax_name_bytes = 5\nname_policy = \"reject\"\n",
    )
    .unwrap();

    let config = ContactDbConfig::from_file(&config_path)
        .unwrap()
        .with_data_dir(temp.path());
    assert_eq!(config.name_policy, NamePolicy::Reject);

    let mut session = Session::new(config);
    session.create_log("small").unwrap();
    assert_eq!(session.directory().unwrap().bucket_count(), 8);
    assert!(matches!(
        session.add_contact("Alexander", 6_125_551_234, 55_414),
        Err(Error::NameTooLong { .. })
    ));
}

#[test]
fn test_hand_written_text_file_loads() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("club.txt");
    std::fs::write(
        &path,
        "3\nBob 6125551234 55414\nAlice 6125550000 55455\n  Carol\n6125559999 55401\n",
    )
    .unwrap();

    let mut session = session_in(&temp);
    session.read_text(&path).unwrap();
    assert_eq!(session.current_log_name().unwrap(), "club");
    assert_eq!(session.directory().unwrap().len(), 3);
    assert_eq!(
        session.lookup("Carol").unwrap().map(|p| p.get()),
        Some(6_125_559_999)
    );
}
