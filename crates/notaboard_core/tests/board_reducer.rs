use notaboard_core::{reduce, reduce_with_outcome, Board, BoardAction, Container, Item, Outcome, SkipReason};
use proptest::prelude::*;

fn note(id: &str) -> Item {
    Item::new(id, format!("title {id}"), format!("message {id}")).with_color("#ffeb3b")
}

fn board_with_c1(ids: &[&str]) -> Board {
    Board::from_parts(
        "root",
        vec![
            Container::new("root"),
            Container::new("c1").with_items(ids.iter().map(|id| note(id))),
        ],
    )
}

fn ids_of(board: &Board, container_id: &str) -> Vec<String> {
    board
        .container(container_id)
        .expect("container should exist")
        .items
        .iter()
        .map(|item| item.id.clone())
        .collect()
}

#[test]
fn add_item_then_move_to_new_container() {
    let mut board = Board::new("root");
    board = reduce(
        board,
        &BoardAction::AddItem {
            container_id: "root".to_string(),
            item: Item::new("n1", "Hi", "hello"),
        },
    );
    board = reduce(board, &BoardAction::AddContainer(Container::new("c1")));
    board = reduce(
        board,
        &BoardAction::MoveItemBetweenContainers {
            source_index: 0,
            destination_index: 1,
            item_id: "n1".to_string(),
        },
    );

    let expected = Board::from_parts(
        "root",
        vec![
            Container::new("root"),
            Container::new("c1").with_items([Item::new("n1", "Hi", "hello")]),
        ],
    );
    assert_eq!(board, expected);
}

#[test]
fn move_last_item_to_front() {
    let board = reduce(
        board_with_c1(&["X", "Y", "Z"]),
        &BoardAction::MoveItemWithinContainer {
            container_index: 1,
            active_index: 2,
            over_index: 0,
        },
    );
    assert_eq!(ids_of(&board, "c1"), vec!["Z", "X", "Y"]);
}

#[test]
fn move_first_item_forward_shifts_the_rest() {
    let board = reduce(
        board_with_c1(&["A", "B", "C", "D"]),
        &BoardAction::MoveItemWithinContainer {
            container_index: 1,
            active_index: 0,
            over_index: 2,
        },
    );
    assert_eq!(ids_of(&board, "c1"), vec!["B", "C", "A", "D"]);
}

#[test]
fn move_between_appends_to_destination_end() {
    let board = Board::from_parts(
        "root",
        vec![
            Container::new("root").with_items([note("r1")]),
            Container::new("c1").with_items([note("a"), note("b")]),
        ],
    );
    let board = reduce(
        board,
        &BoardAction::MoveItemBetweenContainers {
            source_index: 0,
            destination_index: 1,
            item_id: "r1".to_string(),
        },
    );
    assert_eq!(ids_of(&board, "c1"), vec!["a", "b", "r1"]);
    assert!(ids_of(&board, "root").is_empty());
    let (_, moved) = board.find_item("r1").expect("moved item");
    assert_eq!(moved, &note("r1"));
}

#[test]
fn move_between_with_missing_item_returns_input() {
    let input = board_with_c1(&["a"]);
    let (board, outcome) = reduce_with_outcome(
        input.clone(),
        &BoardAction::MoveItemBetweenContainers {
            source_index: 0,
            destination_index: 1,
            item_id: "a".to_string(),
        },
    );
    assert_eq!(board, input);
    assert_eq!(outcome, Outcome::Skipped(SkipReason::ItemNotFound("a".to_string())));
}

#[test]
fn edit_item_keeps_id_color_and_position() {
    let board = reduce(
        board_with_c1(&["a", "b", "c"]),
        &BoardAction::EditItem {
            container_id: "c1".to_string(),
            item_id: "b".to_string(),
            new_title: "new title".to_string(),
            new_message: "new body".to_string(),
        },
    );
    let container = board.container("c1").expect("c1");
    assert_eq!(container.item_index("b"), Some(1));
    let edited = &container.items[1];
    assert_eq!(edited.title, "new title");
    assert_eq!(edited.message, "new body");
    assert_eq!(edited.color.as_deref(), Some("#ffeb3b"));
}

#[test]
fn edit_item_in_wrong_container_is_noop() {
    let input = board_with_c1(&["a"]);
    let (board, outcome) = reduce_with_outcome(
        input.clone(),
        &BoardAction::EditItem {
            container_id: "root".to_string(),
            item_id: "a".to_string(),
            new_title: "x".to_string(),
            new_message: "y".to_string(),
        },
    );
    assert_eq!(board, input);
    assert_eq!(outcome, Outcome::Skipped(SkipReason::ItemNotFound("a".to_string())));
}

#[test]
fn removals_with_unknown_ids_return_equal_board() {
    let input = board_with_c1(&["a", "b"]);
    let board = reduce(
        input.clone(),
        &BoardAction::RemoveItem {
            container_id: "c1".to_string(),
            item_id: "ghost".to_string(),
        },
    );
    assert_eq!(board, input);
    let board = reduce(
        board,
        &BoardAction::RemoveContainer {
            container_id: "ghost".to_string(),
        },
    );
    assert_eq!(board, input);
}

#[test]
fn remove_container_discards_its_items_only() {
    let board = Board::from_parts(
        "root",
        vec![
            Container::new("root").with_items([note("r1")]),
            Container::new("c1").with_items([note("a")]),
            Container::new("c2").with_items([note("b")]),
        ],
    );
    let board = reduce(
        board,
        &BoardAction::RemoveContainer {
            container_id: "c1".to_string(),
        },
    );
    assert_eq!(board.containers().len(), 2);
    assert!(!board.contains_item("a"));
    assert!(board.contains_item("r1"));
    assert!(board.contains_item("b"));
}

#[test]
fn root_container_cannot_be_removed() {
    let (board, outcome) = reduce_with_outcome(
        Board::new("root"),
        &BoardAction::RemoveContainer {
            container_id: "root".to_string(),
        },
    );
    assert!(board.root().is_some());
    assert_eq!(
        outcome,
        Outcome::Skipped(SkipReason::RootContainerProtected("root".to_string()))
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let input = board_with_c1(&["a"]);
    let (board, outcome) =
        reduce_with_outcome(input.clone(), &BoardAction::AddContainer(Container::new("c1")));
    assert_eq!(board, input);
    assert_eq!(
        outcome,
        Outcome::Skipped(SkipReason::DuplicateContainerId("c1".to_string()))
    );

    let (board, outcome) = reduce_with_outcome(
        input.clone(),
        &BoardAction::AddItem {
            container_id: "root".to_string(),
            item: note("a"),
        },
    );
    assert_eq!(board, input);
    assert_eq!(outcome, Outcome::Skipped(SkipReason::DuplicateItemId("a".to_string())));
}

#[test]
fn seeded_items_must_not_collide() {
    let board = reduce(
        Board::new("root"),
        &BoardAction::AddItem {
            container_id: "root".to_string(),
            item: note("n1"),
        },
    );
    let (next, outcome) = reduce_with_outcome(
        board.clone(),
        &BoardAction::AddContainer(Container::new("c1").with_items([note("n1")])),
    );
    assert_eq!(next, board);
    assert_eq!(outcome, Outcome::Skipped(SkipReason::DuplicateItemId("n1".to_string())));

    let (next, outcome) = reduce_with_outcome(
        board.clone(),
        &BoardAction::AddContainer(Container::new("c1").with_items([note("n2"), note("n2")])),
    );
    assert_eq!(next, board);
    assert_eq!(outcome, Outcome::Skipped(SkipReason::DuplicateItemId("n2".to_string())));

    let next = reduce(
        board,
        &BoardAction::AddContainer(Container::new("c1").with_items([note("n2")])),
    );
    assert_eq!(ids_of(&next, "c1"), vec!["n2"]);
    assert!(next.check_integrity().is_empty());
}

#[test]
fn add_item_to_missing_container_is_noop() {
    let input = Board::new("root");
    let board = reduce(
        input.clone(),
        &BoardAction::AddItem {
            container_id: "ghost".to_string(),
            item: note("a"),
        },
    );
    assert_eq!(board, input);
}

#[test]
fn edit_container_name_sets_and_clears() {
    let board = reduce(
        board_with_c1(&[]),
        &BoardAction::EditContainerName {
            container_id: "c1".to_string(),
            new_name: "Ideas".to_string(),
        },
    );
    assert_eq!(board.container("c1").and_then(|c| c.name.as_deref()), Some("Ideas"));

    let board = reduce(
        board,
        &BoardAction::EditContainerName {
            container_id: "c1".to_string(),
            new_name: String::new(),
        },
    );
    assert_eq!(board.container("c1").and_then(|c| c.name.clone()), None);
}

#[test]
fn transfer_resolves_containers_by_id_after_reindexing() {
    let board = Board::from_parts(
        "root",
        vec![
            Container::new("root"),
            Container::new("c1").with_items([note("a")]),
            Container::new("c2"),
            Container::new("c3"),
        ],
    );
    // c1 disappears, shifting c2 and c3 down by one position.
    let board = reduce(
        board,
        &BoardAction::RemoveContainer {
            container_id: "c1".to_string(),
        },
    );
    let board = reduce(
        board,
        &BoardAction::AddItem {
            container_id: "c2".to_string(),
            item: note("b"),
        },
    );
    let board = reduce(
        board,
        &BoardAction::TransferItem {
            source_container_id: "c2".to_string(),
            destination_container_id: "c3".to_string(),
            item_id: "b".to_string(),
        },
    );
    assert_eq!(ids_of(&board, "c3"), vec!["b"]);
    assert!(ids_of(&board, "c2").is_empty());
}

fn container_id(slot: u8) -> String {
    if slot == 0 {
        "root".to_string()
    } else {
        format!("c{slot}")
    }
}

fn action_strategy() -> impl Strategy<Value = BoardAction> {
    prop_oneof![
        (0u8..4, 0u8..16).prop_map(|(slot, n)| BoardAction::AddItem {
            container_id: container_id(slot),
            item: Item::new(format!("n{n}"), "t", "m"),
        }),
        (0u8..4, prop::collection::vec(0u8..16, 0..3)).prop_map(|(slot, seeded)| {
            BoardAction::AddContainer(
                Container::new(container_id(slot))
                    .with_items(seeded.into_iter().map(|n| Item::new(format!("n{n}"), "t", "m"))),
            )
        }),
        (0u8..4).prop_map(|slot| BoardAction::RemoveContainer {
            container_id: container_id(slot),
        }),
        (0u8..4, 0u8..16).prop_map(|(slot, n)| BoardAction::RemoveItem {
            container_id: container_id(slot),
            item_id: format!("n{n}"),
        }),
        (0usize..5, 0usize..5, 0u8..16).prop_map(|(source, destination, n)| {
            BoardAction::MoveItemBetweenContainers {
                source_index: source,
                destination_index: destination,
                item_id: format!("n{n}"),
            }
        }),
        (0usize..5, 0usize..6, 0usize..6).prop_map(|(container, active, over)| {
            BoardAction::MoveItemWithinContainer {
                container_index: container,
                active_index: active,
                over_index: over,
            }
        }),
        (0u8..4, 0u8..4, 0u8..16).prop_map(|(source, destination, n)| {
            BoardAction::TransferItem {
                source_container_id: container_id(source),
                destination_container_id: container_id(destination),
                item_id: format!("n{n}"),
            }
        }),
    ]
}

proptest! {
    #[test]
    fn any_action_sequence_keeps_ids_unique_and_root_present(
        actions in prop::collection::vec(action_strategy(), 0..60)
    ) {
        let mut board = Board::new("root");
        for action in &actions {
            board = reduce(board, action);
            prop_assert!(board.check_integrity().is_empty());
            prop_assert_eq!(board.containers()[0].id.as_str(), "root");
        }
    }

    #[test]
    fn moves_conserve_items(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut board = Board::new("root");
        for action in &actions {
            let before = board.item_count();
            let moved = match action {
                BoardAction::MoveItemBetweenContainers { item_id, .. }
                | BoardAction::TransferItem { item_id, .. } => board
                    .find_item(item_id)
                    .map(|(_, item)| item.clone()),
                _ => None,
            };
            board = reduce(board, action);
            if let Some(item) = moved {
                prop_assert_eq!(board.item_count(), before);
                let (_, after) = board.find_item(&item.id).expect("moved item stays on board");
                prop_assert_eq!(after, &item);
            }
        }
    }

    #[test]
    fn within_move_matches_stable_array_move(
        (ids, active, over) in (1usize..10).prop_flat_map(|len| (Just(len), 0..len, 0..len))
            .prop_map(|(len, active, over)| {
                ((0..len).map(|n| format!("n{n}")).collect::<Vec<_>>(), active, over)
            })
    ) {
        let board = Board::from_parts(
            "root",
            vec![Container::new("root").with_items(ids.iter().map(|id| Item::new(id.clone(), "", "")))],
        );
        let board = reduce(
            board,
            &BoardAction::MoveItemWithinContainer {
                container_index: 0,
                active_index: active,
                over_index: over,
            },
        );

        let mut expected = ids.clone();
        let moved = expected.remove(active);
        expected.insert(over, moved);
        prop_assert_eq!(ids_of(&board, "root"), expected);
    }
}
