use linc_core::{plan_claim, ClaimDecision, TopicSelection, TopicState, UserName, TOPIC_QUOTA};
use proptest::prelude::*;

proptest! {
    /// Property: parsing never panics and accepted selections are non-empty
    #[test]
    fn prop_selection_parse_never_panics(raw in ".{0,40}") {
        if let Ok(selection) = TopicSelection::parse([raw.as_str()]) {
            prop_assert!(!selection.is_empty());
        }
    }

    /// Property: ids survive a round trip through the comma separated form
    #[test]
    fn prop_selection_preserves_ids(ids in prop::collection::btree_set(1i32..10_000, 1..8)) {
        let raw: Vec<String> = ids.iter().map(ToString::to_string).collect();
        let selection = TopicSelection::parse([raw.join(",")]).unwrap();

        prop_assert_eq!(selection.to_i32_vec(), ids.into_iter().collect::<Vec<_>>());
    }

    /// Property: a plan that proceeds never pushes the user over the quota
    #[test]
    fn prop_plan_respects_quota(
        held in 0usize..=TOPIC_QUOTA,
        states in prop::collection::btree_map(1i32..50, prop::option::of("[a-c]"), 1..6),
    ) {
        let user = UserName::new("a").unwrap();
        let selection = TopicSelection::parse(
            states.keys().map(ToString::to_string).collect::<Vec<_>>(),
        ).unwrap();
        let rows: Vec<TopicState> = selection
            .iter()
            .zip(states.values())
            .map(|(id, owner)| TopicState { id, assigned_to: owner.clone() })
            .collect();

        match plan_claim(&user, &selection, &rows, held) {
            ClaimDecision::Proceed(plan) => {
                prop_assert!(held + plan.available.len() <= TOPIC_QUOTA);
                let total = plan.available.len()
                    + plan.taken.len()
                    + plan.already_held.len()
                    + plan.missing.len();
                prop_assert_eq!(total, selection.len());
            }
            ClaimDecision::QuotaExceeded { held: h, requested } => {
                prop_assert!(h + requested > TOPIC_QUOTA);
            }
        }
    }
}
