use std::collections::HashSet;

use proptest::prelude::*;
use scout_core::{GroundingSource, SavedJobs};

fn source_strategy() -> impl Strategy<Value = GroundingSource> {
    // A small uri space so sequences revisit the same entries often.
    (0u8..6, "[a-z]{0,4}").prop_map(|(id, title)| {
        GroundingSource::new(format!("https://jobs.example/{id}"), title)
    })
}

#[test]
fn toggle_adds_then_removes() {
    let source = GroundingSource::new("https://acme.example/jobs/1", "Acme");
    let mut saved = SavedJobs::new();

    assert!(saved.toggle(source.clone()));
    assert!(saved.contains(&source.uri));
    assert!(!saved.toggle(source.clone()));
    assert!(saved.is_empty());
}

#[test]
fn toggle_matches_by_uri_only() {
    let mut saved = SavedJobs::new();
    saved.toggle(GroundingSource::new("https://acme.example/jobs/1", "Acme"));

    let removed = !saved.toggle(GroundingSource::new(
        "https://acme.example/jobs/1",
        "Renamed listing",
    ));

    assert!(removed);
    assert!(saved.is_empty());
}

#[test]
fn insertion_order_is_kept() {
    let mut saved = SavedJobs::new();
    saved.toggle(GroundingSource::new("https://b.example", "B"));
    saved.toggle(GroundingSource::new("https://a.example", "A"));
    saved.toggle(GroundingSource::new("https://c.example", "C"));
    saved.toggle(GroundingSource::new("https://a.example", "A"));

    let uris: Vec<_> = saved.iter().map(|s| s.uri.as_str()).collect();
    assert_eq!(uris, vec!["https://b.example", "https://c.example"]);
}

proptest! {
    #[test]
    fn toggle_is_its_own_inverse(
        seed in prop::collection::vec(source_strategy(), 0..8),
        source in source_strategy(),
    ) {
        let mut saved = SavedJobs::from_sources(seed);
        let before = saved.clone();
        let was_saved = saved.contains(&source.uri);

        let now_saved = saved.toggle(source.clone());
        prop_assert_eq!(now_saved, !was_saved);
        saved.toggle(source.clone());

        let before_uris: HashSet<_> = before.iter().map(|s| s.uri.clone()).collect();
        let after_uris: HashSet<_> = saved.iter().map(|s| s.uri.clone()).collect();
        prop_assert_eq!(before_uris, after_uris);
    }

    #[test]
    fn uris_stay_unique_under_any_toggle_sequence(
        toggles in prop::collection::vec(source_strategy(), 0..64),
    ) {
        let mut saved = SavedJobs::new();
        for source in toggles {
            saved.toggle(source);
            let uris: HashSet<_> = saved.iter().map(|s| s.uri.as_str()).collect();
            prop_assert_eq!(uris.len(), saved.len());
        }
    }
}
