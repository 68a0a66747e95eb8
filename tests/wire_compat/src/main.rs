fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use gametracker_games::normalize::normalize_draft;
    use gametracker_games::{Game, GameDraft, GamePayload, NO_REVIEW};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and compares
    /// the JSON values (order-independent comparison).
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  store: {fixture}\n  Rust:  {reserialized}"
        );
    }

    // --- Store record fixtures ---

    #[test]
    fn fixture_game_record() {
        roundtrip_test::<Game>("game_record.json");
    }

    #[test]
    fn fixture_create_payload() {
        roundtrip_test::<GamePayload>("create_payload.json");
    }

    #[test]
    fn fixture_game_list_mixed_encodings() {
        let games: Vec<Game> = serde_json::from_value(load_fixture("game_list.json"))
            .unwrap_or_else(|e| panic!("failed to deserialize game_list.json: {e}"));

        assert_eq!(games.len(), 3);
        assert_eq!(games[0].id.as_str(), "1");
        assert_eq!(games[1].id.as_str(), "65f1c2a9e4b0");
        assert_eq!(games[2].id.as_str(), "3");

        // Bare numeric progress and null review are normalized on read.
        assert_eq!(games[2].progress, "45%");
        assert_eq!(games[2].review, "");
        assert_eq!(games[1].review_display(), NO_REVIEW);
        assert_eq!(games[2].review_display(), NO_REVIEW);
    }

    #[test]
    fn fixture_list_reserializes_canonically() {
        let games: Vec<Game> = serde_json::from_value(load_fixture("game_list.json")).unwrap();
        let value = serde_json::to_value(&games).unwrap();

        for entry in value.as_array().unwrap() {
            assert!(entry["id"].is_string(), "id should be text: {entry}");
            assert!(
                entry["progress"].as_str().unwrap().ends_with('%'),
                "progress should carry %: {entry}"
            );
            assert!(entry["review"].is_string(), "review should be text: {entry}");
        }
    }

    #[test]
    fn normalized_draft_matches_create_fixture() {
        let draft = GameDraft::new("Celeste", "Switch")
            .with_progress(80)
            .with_cover("https://via.placeholder.com/120x150?text=Celeste");
        let payload = serde_json::to_value(normalize_draft(draft)).unwrap();

        assert_eq!(payload, load_fixture("create_payload.json"));
    }
}
