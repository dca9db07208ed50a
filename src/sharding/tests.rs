use super::*;
use std::collections::HashMap;

fn tasks() -> Vec<&'static str> {
    vec!["one", "two", "three", "four", "five"]
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |var: &str| vars.get(var).cloned()
}

#[test]
fn test_select_middle_task() {
    let tasks = tasks();
    let batch = select_batch(&tasks, &TaskEnv::new(3, 1)).unwrap();
    assert_eq!(batch, ["two", "three"]);
}

#[test]
fn test_every_task_gets_its_share() {
    let tasks = tasks();
    let picked: Vec<&str> = (0..3)
        .flat_map(|i| select_batch(&tasks, &TaskEnv::new(3, i)).unwrap().to_vec())
        .collect();
    assert_eq!(picked, tasks);
}

#[test]
fn test_more_tasks_than_items() {
    let tasks = tasks();
    let batch = select_batch(&tasks, &TaskEnv::new(10, 0)).unwrap();
    assert!(batch.is_empty());

    let batch = select_batch(&tasks, &TaskEnv::new(10, 9)).unwrap();
    assert_eq!(batch, ["five"]);
}

#[test]
fn test_empty_task_list() {
    let empty: Vec<&str> = vec![];
    let result = select_batch(&empty, &TaskEnv::new(3, 0));
    assert!(matches!(result, Err(ShardError::TaskListEmpty)));
    assert_eq!(result.unwrap_err().to_string(), "task not found");
}

#[test]
fn test_cloud_run_empty_list_checked_first() {
    let empty: Vec<u32> = vec![];
    assert!(matches!(
        cloud_run_batch(&empty),
        Err(ShardError::TaskListEmpty)
    ));
}

#[test]
fn test_index_past_last_batch() {
    let tasks = tasks();
    let result = select_batch(&tasks, &TaskEnv::new(3, 3));
    match result {
        Err(ShardError::TaskIndexOutOfBounds { index, max }) => {
            assert_eq!(index, 3);
            assert_eq!(max, 3);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_negative_index() {
    let tasks = tasks();
    let err = select_batch(&tasks, &TaskEnv::new(3, -1)).unwrap_err();
    assert_eq!(err.to_string(), "index (-1) out of bounds (max: 3)");
}

#[test]
fn test_zero_task_count_has_no_batches() {
    let tasks = tasks();
    let result = select_batch(&tasks, &TaskEnv::new(0, 0));
    assert!(matches!(
        result,
        Err(ShardError::TaskIndexOutOfBounds { index: 0, max: 0 })
    ));
}

#[test]
fn test_env_from_lookup() {
    let env = TaskEnv::from_lookup(lookup(&[
        (TASK_COUNT_VAR, "3"),
        (TASK_INDEX_VAR, "1"),
    ]))
    .unwrap();
    assert_eq!(env, TaskEnv::new(3, 1));
}

#[test]
fn test_env_missing_var() {
    let result = TaskEnv::from_lookup(lookup(&[(TASK_COUNT_VAR, "3")]));
    match result {
        Err(ShardError::MissingVar { var }) => assert_eq!(var, TASK_INDEX_VAR),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_env_invalid_var() {
    let result = TaskEnv::from_lookup(lookup(&[
        (TASK_COUNT_VAR, "three"),
        (TASK_INDEX_VAR, "1"),
    ]));
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        ShardError::InvalidVar {
            var: TASK_COUNT_VAR,
            ..
        }
    ));
    assert!(err.to_string().contains("\"three\""));
}

#[test]
fn test_env_serializes() {
    let env = TaskEnv::new(3, 1);
    let json = serde_json::to_string(&env).unwrap();
    assert_eq!(json, r#"{"count":3,"index":1}"#);

    let back: TaskEnv = serde_json::from_str(&json).unwrap();
    assert_eq!(back, env);
}
