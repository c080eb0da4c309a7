//! Tests for #[derive(Action)] macro

use todolist_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum ListAction {
    #[command]
    AddItem {
        text: String,
    },

    #[command]
    ToggleItem(u32),

    #[event]
    ItemAdded {
        id: u32,
        text: String,
    },

    #[event]
    Cleared,

    Refresh,
}

#[test]
fn test_is_command() {
    let action = ListAction::AddItem {
        text: "Test".to_string(),
    };
    assert!(action.is_command());
    assert!(!action.is_event());
}

#[test]
fn test_is_event() {
    let action = ListAction::ItemAdded {
        id: 1,
        text: "Test".to_string(),
    };
    assert!(!action.is_command());
    assert!(action.is_event());
}

#[test]
fn test_tuple_and_unit_variants() {
    assert!(ListAction::ToggleItem(3).is_command());
    assert!(ListAction::Cleared.is_event());
    assert!(!ListAction::Cleared.is_command());
}

#[test]
fn test_unmarked_variant_is_neither() {
    let action = ListAction::Refresh;
    assert!(!action.is_command());
    assert!(!action.is_event());
}

#[test]
fn test_variant_names() {
    let cases = vec![
        (
            ListAction::AddItem {
                text: "a".to_string(),
            },
            "AddItem",
        ),
        (ListAction::ToggleItem(1), "ToggleItem"),
        (
            ListAction::ItemAdded {
                id: 1,
                text: "a".to_string(),
            },
            "ItemAdded",
        ),
        (ListAction::Cleared, "Cleared"),
        (ListAction::Refresh, "Refresh"),
    ];

    for (action, expected) in cases {
        assert_eq!(action.name(), expected);
    }
}

#[derive(Action, Clone, Debug)]
enum Wrapped<T> {
    #[command]
    Inner(T),
}

#[test]
fn test_generic_enum() {
    let action = Wrapped::Inner(5_u8);
    assert!(action.is_command());
    assert_eq!(action.name(), "Inner");
}
