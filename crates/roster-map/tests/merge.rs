use proptest::prelude::*;
use roster_map::{
    MergerSettings, OptionMerger, PendingCreation, SelectionOutcome, filter_options, select,
};
use roster_model::{CandidateOption, SelectOption};

fn options(labels: &[&str]) -> Vec<SelectOption> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| SelectOption::new(*label, index.to_string()))
        .collect()
}

#[test]
fn empty_pool_and_query_yield_nothing() {
    assert!(filter_options(&[], "", 0.4).is_empty());
}

#[test]
fn browse_state_has_no_synthetic_entries() {
    let pool = options(&["Meeting", "Rally"]);
    let result = filter_options(&pool, "", 0.4);
    assert_eq!(result.len(), 2);
    assert!(
        result
            .iter()
            .all(|c| matches!(c, CandidateOption::Existing { .. }))
    );
}

#[test]
fn exact_label_shape() {
    let pool = vec![SelectOption::new("Apple", "a")];
    insta::assert_json_snapshot!(filter_options(&pool, "Apple", 0.4), @r#"
    [
      {
        "kind": "existing",
        "id": "a",
        "title": "Apple"
      },
      {
        "kind": "uncategorized"
      }
    ]
    "#);
}

#[test]
fn unmatched_query_shape() {
    let pool = vec![SelectOption::new("Apple", "a")];
    insta::assert_json_snapshot!(filter_options(&pool, "Mango", 0.4), @r#"
    [
      {
        "kind": "uncategorized"
      },
      {
        "kind": "create_new",
        "title": "Mango"
      }
    ]
    "#);
}

#[test]
fn empty_pool_with_query() {
    assert_eq!(
        filter_options(&[], "zz", 0.4),
        vec![
            CandidateOption::Uncategorized,
            CandidateOption::CreateNew {
                title: "Zz".to_string()
            }
        ]
    );
}

#[test]
fn matches_are_ordered_best_first() {
    let pool = options(&["Canvassing door to door", "Door knocking", "Phone bank"]);
    let result = filter_options(&pool, "door", 0.4);
    let titles: Vec<&str> = result.iter().map(|c| c.label("Uncategorized")).collect();
    assert_eq!(
        titles,
        vec![
            "Door knocking",
            "Canvassing door to door",
            "Uncategorized",
            "Door"
        ]
    );
}

#[test]
fn exact_match_lower_in_list_still_suppresses_creation() {
    let pool = options(&["Rally planning", "Rally"]);
    let result = filter_options(&pool, "rally", 0.4);
    assert!(
        !result
            .iter()
            .any(|c| matches!(c, CandidateOption::CreateNew { .. }))
    );
    assert_eq!(result.last(), Some(&CandidateOption::Uncategorized));
}

#[test]
fn stricter_threshold_drops_typos() {
    let pool = options(&["Meeting"]);
    let loose = filter_options(&pool, "meetnig", 0.4);
    let strict = filter_options(&pool, "meetnig", 0.1);
    assert!(matches!(loose[0], CandidateOption::Existing { .. }));
    assert_eq!(strict[0], CandidateOption::Uncategorized);
}

#[test]
fn create_then_resolve_round() {
    let mut pool = options(&["Meeting"]);
    let merger = OptionMerger::new(MergerSettings::default());
    let candidates = merger.filter(&pool, "rally");
    let Some(picked) = candidates.last().cloned() else {
        panic!("no candidates");
    };

    let SelectionOutcome::Create(pending) = select(picked) else {
        panic!("expected create outcome");
    };
    assert_eq!(pending, PendingCreation::new("Rally"));
    assert_eq!(pending.resolve(&pool), None);

    pool.push(SelectOption::new("Rally", "99"));
    assert_eq!(
        pending.resolve(&pool),
        Some(SelectionOutcome::Selected {
            id: "99".to_string(),
            title: "Rally".to_string()
        })
    );
}

#[test]
fn disabled_options_are_still_offered() {
    let mut pool = options(&["Meeting", "Rally"]);
    pool[0].disabled = true;
    let result = filter_options(&pool, "meet", 0.4);
    assert_eq!(
        result[0],
        CandidateOption::Existing {
            id: "0".to_string(),
            title: "Meeting".to_string()
        }
    );
    assert_eq!(filter_options(&pool, "", 0.4).len(), 2);
}

fn label_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z ]{1,12}"
}

proptest! {
    #[test]
    fn filtering_is_deterministic(
        labels in prop::collection::vec(label_strategy(), 0..8),
        query in "[a-zA-Z]{0,6}"
    ) {
        let pool: Vec<SelectOption> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| SelectOption::new(l.clone(), i.to_string()))
            .collect();
        let before = pool.clone();
        let first = filter_options(&pool, &query, 0.4);
        let second = filter_options(&pool, &query, 0.4);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&pool, &before);
    }

    #[test]
    fn synthetic_entries_are_well_placed(
        labels in prop::collection::vec(label_strategy(), 0..8),
        query in "[a-zA-Z]{1,6}"
    ) {
        let pool: Vec<SelectOption> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| SelectOption::new(l.clone(), i.to_string()))
            .collect();
        let result = filter_options(&pool, &query, 0.4);

        let uncategorized = result
            .iter()
            .filter(|c| **c == CandidateOption::Uncategorized)
            .count();
        prop_assert_eq!(uncategorized, 1);

        let creates: Vec<usize> = result
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, CandidateOption::CreateNew { .. }))
            .map(|(i, _)| i)
            .collect();
        prop_assert!(creates.len() <= 1);
        if let Some(&index) = creates.first() {
            prop_assert_eq!(index, result.len() - 1);
        }

        let exact = pool
            .iter()
            .any(|o| o.label.to_lowercase() == query.to_lowercase())
            || query.to_lowercase() == "uncategorized";
        prop_assert_eq!(creates.is_empty(), exact);
    }
}
