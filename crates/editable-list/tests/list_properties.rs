//! Property tests for list transitions.

use editable_list::{EditableList, Entity, ListConfig, Mode, RowPhase, Workout};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Row(u32);

impl Entity for Row {
    type Id = u32;

    fn id(&self) -> u32 {
        self.0
    }
}

fn seeded(n: u32) -> EditableList<Row> {
    EditableList::new((0..n).map(Row).collect(), ListConfig::default())
}

fn sorted(mut ids: Vec<u32>) -> Vec<u32> {
    ids.sort_unstable();
    ids
}

proptest! {
    #[test]
    fn reorder_is_a_permutation(
        n in 1u32..12,
        moves in prop::collection::vec((0u32..12, 0usize..20), 0..10),
    ) {
        let mut list = seeded(n);
        list.toggle_mode();
        for (id, to) in moves {
            let id = id % n;
            list.begin_drag(id).unwrap();
            let used = list.reorder(id, to).unwrap();
            prop_assert!(used < n as usize);
            prop_assert_eq!(list.display_order()[used].id(), id);
            list.end_drag().unwrap();
        }
        prop_assert_eq!(sorted(list.ids()), (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn reorder_keeps_relative_order_of_others(n in 2u32..12, id in 0u32..12, to in 0usize..30) {
        let id = id % n;
        let mut list = seeded(n);
        list.toggle_mode();
        list.begin_drag(id).unwrap();
        list.reorder(id, to).unwrap();
        list.end_drag().unwrap();

        let others: Vec<u32> = list.ids().into_iter().filter(|i| *i != id).collect();
        let expected: Vec<u32> = (0..n).filter(|i| *i != id).collect();
        prop_assert_eq!(others, expected);
    }

    #[test]
    fn swipe_delete_removes_exactly_one(n in 1u32..12, victim in 0u32..12, dx in -300.0f64..-41.0) {
        let victim = victim % n;
        let mut list = seeded(n);
        list.swipe_move(victim, dx, 0.0).unwrap();
        prop_assert_eq!(list.swipe_end(victim, dx).unwrap(), RowPhase::Revealed);
        list.begin_removal(victim).unwrap();
        list.finish_removal(victim).unwrap();

        let expected: Vec<u32> = (0..n).filter(|i| *i != victim).collect();
        prop_assert_eq!(list.ids(), expected);
        prop_assert!(list.is_settled());
    }

    #[test]
    fn short_swipe_changes_nothing(n in 1u32..12, row in 0u32..12, dx in -40.0f64..0.0, dy in -3.0f64..3.0) {
        let row = row % n;
        let mut list = seeded(n);
        let before = list.items().to_vec();
        list.swipe_move(row, dx, dy).unwrap();
        prop_assert_eq!(list.swipe_end(row, dx).unwrap(), RowPhase::Resting);
        prop_assert_eq!(list.items(), before.as_slice());
        prop_assert!(list.is_settled());
    }

    #[test]
    fn vertical_drift_abandons_the_swipe(n in 1u32..12, row in 0u32..12, dy in 6.0f64..200.0, dx in -300.0f64..0.0) {
        let row = row % n;
        let mut list = seeded(n);
        list.swipe_move(row, 0.0, dy).unwrap();
        list.swipe_move(row, dx, 0.0).unwrap();
        prop_assert_eq!(list.swipe_end(row, dx).unwrap(), RowPhase::Resting);
        prop_assert_eq!(list.len(), n as usize);
        prop_assert!(list.is_settled());
    }
}

#[test]
fn double_toggle_restores_mode() {
    let mut list = seeded(3);
    list.request_delete(1).unwrap();
    list.toggle_mode();
    list.toggle_mode();
    assert_eq!(list.mode(), Mode::Browse);
    assert!(list.is_settled());
    assert_eq!(list.ids(), vec![0, 1, 2]);
}

#[test]
fn seed_file_loads_and_edits_round_trip() {
    let json = include_str!("../../../data/workouts.json");
    let mut list: EditableList<Workout> = EditableList::from_json(json, ListConfig::default()).unwrap();
    assert!(!list.is_empty());

    let first = list.items()[0].clone();
    let mut draft = editable_list::WorkoutDraft::new(&first);
    draft.set_minutes(30);
    list.replace_item(draft.finish()).unwrap();

    assert_eq!(list.items()[0].minutes, 30);
    assert_eq!(list.items()[0].id, first.id);
}

#[test]
fn malformed_seed_is_an_error() {
    let result: Result<EditableList<Workout>, _> = EditableList::from_json("[{\"id\": 1}]", ListConfig::default());
    assert!(matches!(result, Err(editable_list::ListError::Seed(_))));
}
