use todo_core::{InMemoryTodoRepository, Todo, TodoRepository, TodoValidationError};

#[test]
fn snapshot_serialization_uses_expected_wire_fields() {
    let mut repo = InMemoryTodoRepository::new();
    let todo = repo.create_todo("Test title", "Test description").unwrap();

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "title": "Test title",
            "description": "Test description"
        })
    );

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn deserialize_trims_and_defaults_description() {
    let value = serde_json::json!({ "id": 7, "title": "  padded  " });
    let todo: Todo = serde_json::from_value(value).unwrap();
    assert_eq!(todo.title, "padded");
    assert_eq!(todo.description, "");
}

#[test]
fn deserialize_rejects_blank_title() {
    let value = serde_json::json!({ "id": 1, "title": "   ", "description": "" });
    let err = serde_json::from_value::<Todo>(value).unwrap_err();
    assert!(
        err.to_string().contains("title cannot be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_zero_id() {
    let value = serde_json::json!({ "id": 0, "title": "ok" });
    let err = serde_json::from_value::<Todo>(value).unwrap_err();
    assert!(err.to_string().contains("positive"), "unexpected error: {err}");
}

#[test]
fn validate_catches_blank_title_on_hand_edited_snapshot() {
    let mut repo = InMemoryTodoRepository::new();
    let mut todo = repo.create_todo("valid", "").unwrap();
    todo.title = " ".to_string();
    assert_eq!(todo.validate(), Err(TodoValidationError::EmptyTitle));
}
