#[cfg(test)]
mod tests {
    use schejzuren::commands::serve;
    use schejzuren::db::db::Db;
    use schejzuren::libs::bridge::Bridge;
    use serde_json::{json, Value};
    use std::io::Cursor;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BridgeTestContext {
        _temp_dir: TempDir,
        bridge: Bridge,
    }

    impl TestContext for BridgeTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("test.db")).unwrap();
            let bridge = Bridge::new(db).unwrap();
            BridgeTestContext { _temp_dir: temp_dir, bridge }
        }
    }

    fn serve_lines(bridge: &Bridge, input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        serve::run(bridge, Cursor::new(input.to_string()), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test_context(BridgeTestContext)]
    #[test]
    fn test_create_then_list_activities(ctx: &mut BridgeTestContext) {
        let id = ctx
            .bridge
            .call("CreateActivity", &[json!({"title": "Run", "tags": ["sport"], "status": "done"})])
            .unwrap();
        assert!(id.as_i64().is_some());

        let listed = ctx
            .bridge
            .call("GetActivities", &[json!({"where": {"status": {"eq": "done"}}})])
            .unwrap();
        assert_eq!(listed[0]["id"], id);
        assert_eq!(listed[0]["title"], "Run");
        assert_eq!(listed[0]["tags"], json!(["sport"]));
        assert_eq!(listed[0]["isRecurring"], false);
    }

    #[test_context(BridgeTestContext)]
    #[test]
    fn test_update_and_delete_todo(ctx: &mut BridgeTestContext) {
        let id = ctx.bridge.call("CreateTodo", &[json!({"title": "Call mom"})]).unwrap();

        let result = ctx.bridge.call("UpdateTodo", &[id.clone(), json!({"priority": "high"})]).unwrap();
        assert_eq!(result, Value::Null);
        assert_eq!(ctx.bridge.todos().list(None).unwrap()[0].priority, "high");

        ctx.bridge.call("DeleteTodo", &[id.clone()]).unwrap();
        let listed = ctx.bridge.call("GetTodos", &[]).unwrap();
        assert_eq!(listed, json!([]));

        let err = ctx.bridge.call("UpdateTodo", &[id, json!({"title": "x"})]).unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[test_context(BridgeTestContext)]
    #[test]
    fn test_unknown_method(ctx: &mut BridgeTestContext) {
        let err = ctx.bridge.call("DropEverything", &[]).unwrap_err();
        assert_eq!(err.kind(), "invalid_request");
    }

    #[test_context(BridgeTestContext)]
    #[test]
    fn test_bad_argument_type(ctx: &mut BridgeTestContext) {
        let err = ctx.bridge.call("DeleteActivity", &[json!("seven")]).unwrap_err();
        assert_eq!(err.kind(), "invalid_request");
    }

    #[test_context(BridgeTestContext)]
    #[test]
    fn test_serve_answers_each_line(ctx: &mut BridgeTestContext) {
        let input = [
            r#"{"id":1,"method":"CreateTodo","args":[{"title":"a"}]}"#,
            "",
            r#"{"id":2,"method":"GetTodos"}"#,
            r#"{"id":"x","method":"UpdateActivity","args":[42,{"title":"b"}]}"#,
            "garbage",
        ]
        .join("\n");

        let responses = serve_lines(&ctx.bridge, &input);
        assert_eq!(responses.len(), 4);

        assert_eq!(responses[0]["id"], 1);
        assert!(responses[0]["result"].is_i64());

        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["result"][0]["title"], "a");
        assert!(responses[1].get("error").is_none());

        assert_eq!(responses[2]["id"], "x");
        assert_eq!(responses[2]["error"]["kind"], "not_found");
        assert!(responses[2].get("result").is_none());

        assert_eq!(responses[3]["error"]["kind"], "invalid_request");
    }

    #[test_context(BridgeTestContext)]
    #[test]
    fn test_null_results_are_kept(ctx: &mut BridgeTestContext) {
        let responses = serve_lines(&ctx.bridge, r#"{"id":9,"method":"DeleteActivity","args":[1]}"#);
        assert_eq!(responses[0], json!({"id": 9, "result": null}));
    }
}
