use crate::init_logging;
use seeder::{Seeder, ALPHABET};
use serde_json::{json, Value};

fn is_uuid_v4(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 36
        && s.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            14 => c == '4',
            19 => matches!(c, '8' | '9' | 'a' | 'b'),
            _ => c.is_ascii_digit() || ('a'..='f').contains(&c),
        })
}

#[test]
fn uuids_match_v4_layout() {
    init_logging();
    let mut seeder = Seeder::new(12345);
    assert_eq!(seeder.uuid(), "f47d851c-fd7f-4efa-b74c-dacca7153c14");
    for _ in 0..5_000 {
        let uuid = seeder.uuid();
        assert!(is_uuid_v4(&uuid), "{}", uuid);
    }
}

#[test]
fn ids_use_default_alphabet() {
    init_logging();
    let mut seeder = Seeder::new(12345);
    assert_eq!(seeder.id(), "yJUoVL4lzpSwtycFTIlre");
    for _ in 0..1_000 {
        let id = seeder.id();
        assert_eq!(id.chars().count(), 21);
        assert!(id.chars().all(|c| ALPHABET.contains(c)));
    }
    assert_eq!(seeder.id_with_length(0), "");
}

#[test]
fn registry_overwrites_categories() {
    init_logging();
    let mut seeder = Seeder::new(1);
    seeder.use_bundle(vec![("a", vec![json!(1), json!(2)])]);
    seeder.use_bundle(vec![("a", vec![json!(3)])]);
    assert_eq!(seeder.data()["a"], vec![json!(3)]);
}

#[test]
fn registry_feeds_picks() -> seeder::Result<()> {
    init_logging();
    let mut seeder = Seeder::new("users");
    seeder.use_json(
        r#"{
            "users": [
                {"name": "ada", "admin": true},
                {"name": "grace", "admin": false}
            ],
            "tags": ["alpha", 2, null]
        }"#,
    )?;
    let users: Vec<Value> = seeder.category("users").unwrap_or_default().to_vec();
    let user = seeder.pick(&users)?;
    assert!(user["name"].is_string());
    assert_eq!(seeder.data().len(), 2);
    assert!(seeder.use_json("[1, 2]").is_err());
    Ok(())
}
