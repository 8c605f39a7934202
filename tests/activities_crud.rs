#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use schejzuren::db::{activities::Activities, db::Db};
    use schejzuren::libs::activity::{Activity, ActivityPatch, ActivityQuery, Priority, Status};
    use serde_json::json;
    use std::thread;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ActivityTestContext {
        _temp_dir: TempDir,
        activities: Activities,
    }

    impl TestContext for ActivityTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("test.db")).unwrap();
            let activities = Activities::new(db).unwrap();
            ActivityTestContext { _temp_dir: temp_dir, activities }
        }
    }

    impl ActivityTestContext {
        fn seed(&self, titles: &[&str]) -> Vec<i64> {
            titles
                .iter()
                .map(|title| self.activities.create(&Activity::new(title)).unwrap())
                .collect()
        }

        fn titles(&self, query: serde_json::Value) -> Vec<String> {
            let query: ActivityQuery = serde_json::from_value(query).unwrap();
            self.activities
                .list(Some(&query))
                .unwrap()
                .into_iter()
                .map(|a| a.title)
                .collect()
        }
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_create_then_get(ctx: &mut ActivityTestContext) {
        let activity = Activity {
            title: "Yoga".into(),
            description: Some("Morning flow".into()),
            tags: vec!["health".into(), "morning".into()],
            color: Some("#88cc88".into()),
            status: Status::InProgress,
            priority: Priority::High,
            is_recurring: true,
            recurrence_rule: Some("everyday".into()),
            ..Default::default()
        };
        let id = ctx.activities.create(&activity).unwrap();

        let stored = ctx.activities.get(id).unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.title, "Yoga");
        assert_eq!(stored.description.as_deref(), Some("Morning flow"));
        assert_eq!(stored.tags, vec!["health", "morning"]);
        assert_eq!(stored.status, Status::InProgress);
        assert_eq!(stored.priority, Priority::High);
        assert!(stored.is_recurring);
        assert!(stored.created_at.is_some());
        assert_eq!(stored.created_at, stored.updated_at);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_create_then_list_returns_same_record(ctx: &mut ActivityTestContext) {
        let activity = Activity {
            title: "Piano".into(),
            description: Some("Scales".into()),
            tags: vec!["music".into()],
            color: Some("#334455".into()),
            status: Status::Done,
            priority: Priority::Low,
            starts_at: Some("2024-06-03T07:00:00Z".into()),
            due: Some("2024-06-03T08:00:00Z".into()),
            completed_at: Some("2024-06-03T07:45:00Z".into()),
            is_recurring: true,
            recurrence_rule: Some("monday".into()),
            ..Default::default()
        };
        ctx.activities.create(&activity).unwrap();

        let listed = ctx.activities.list(None).unwrap();
        assert_eq!(listed.len(), 1);
        let stored = listed[0].clone();
        let expected = Activity {
            id: stored.id,
            created_at: stored.created_at.clone(),
            updated_at: stored.updated_at.clone(),
            ..activity
        };
        assert_eq!(stored, expected);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_update_touches_only_patched_fields(ctx: &mut ActivityTestContext) {
        let mut activity = Activity::new("Read");
        activity.description = Some("Chapter 3".into());
        let id = ctx.activities.create(&activity).unwrap();

        let patch = ActivityPatch { title: Some("Read more".into()), ..Default::default() };
        ctx.activities.update(id, &patch).unwrap();

        let stored = ctx.activities.get(id).unwrap();
        assert_eq!(stored.title, "Read more");
        assert_eq!(stored.description.as_deref(), Some("Chapter 3"));
        assert_eq!(stored.status, Status::Todo);
        assert!(stored.updated_at >= stored.created_at);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_update_missing_id_is_not_found(ctx: &mut ActivityTestContext) {
        ctx.seed(&["only"]);
        let patch = ActivityPatch { title: Some("ghost".into()), ..Default::default() };

        let err = ctx.activities.update(999, &patch).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ctx.titles(json!({})), vec!["only"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_empty_patch_keeps_updated_at(ctx: &mut ActivityTestContext) {
        let id = ctx.seed(&["still"])[0];
        let before = ctx.activities.get(id).unwrap();
        ctx.activities.update(id, &ActivityPatch::default()).unwrap();
        assert_eq!(ctx.activities.get(id).unwrap(), before);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_delete_is_idempotent(ctx: &mut ActivityTestContext) {
        let ids = ctx.seed(&["a", "b"]);

        ctx.activities.delete(ids[0]).unwrap();
        ctx.activities.delete(ids[0]).unwrap();
        ctx.activities.delete(12345).unwrap();

        assert_eq!(ctx.titles(json!({})), vec!["b"]);
        assert!(ctx.activities.get(ids[0]).unwrap_err().is_not_found());
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_ids_are_not_reused(ctx: &mut ActivityTestContext) {
        let first = ctx.seed(&["a"])[0];
        ctx.activities.delete(first).unwrap();
        let second = ctx.seed(&["b"])[0];
        assert!(second > first);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_or_filter(ctx: &mut ActivityTestContext) {
        ctx.seed(&["a", "b", "c"]);
        let titles = ctx.titles(json!({"where": {"OR": [{"title": {"eq": "a"}}, {"title": {"eq": "b"}}]}}));
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_empty_or_child_adds_nothing(ctx: &mut ActivityTestContext) {
        ctx.seed(&["a", "b"]);
        let titles = ctx.titles(json!({"where": {"OR": [{"title": {"eq": "a"}}, {}]}}));
        assert_eq!(titles, vec!["a"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_and_filter(ctx: &mut ActivityTestContext) {
        let ids = ctx.seed(&["a", "a", "b"]);
        let done = ActivityPatch { status: Some(Status::Done), ..Default::default() };
        ctx.activities.update(ids[1], &done).unwrap();
        ctx.activities.update(ids[2], &done).unwrap();

        let query: ActivityQuery = serde_json::from_value(json!({
            "where": {"AND": [{"title": {"eq": "a"}}, {"status": {"eq": "done"}}]}
        }))
        .unwrap();
        let found = ctx.activities.list(Some(&query)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(ids[1]));
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_not_negates_whole_group(ctx: &mut ActivityTestContext) {
        ctx.seed(&["a", "b", "c"]);
        let titles = ctx.titles(json!({
            "where": {"NOT": {"OR": [{"title": {"eq": "a"}}, {"title": {"eq": "b"}}]}}
        }));
        assert_eq!(titles, vec!["c"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_first_set_operator_wins(ctx: &mut ActivityTestContext) {
        ctx.seed(&["a", "z"]);
        // eq outranks gt; gt alone would select "z"
        assert_eq!(ctx.titles(json!({"where": {"title": {"eq": "a", "gt": "b"}}})), vec!["a"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_set_and_pattern_operators(ctx: &mut ActivityTestContext) {
        let ids = ctx.seed(&["walk dog", "feed cat", "walk home"]);

        let query = json!({"where": {"id": {"in": [ids[0], ids[2]]}}});
        assert_eq!(ctx.titles(query), vec!["walk dog", "walk home"]);

        let query = json!({"where": {"id": {"notIn": [ids[0]]}}});
        assert_eq!(ctx.titles(query), vec!["feed cat", "walk home"]);

        assert_eq!(ctx.titles(json!({"where": {"title": {"like": "walk%"}}})), vec!["walk dog", "walk home"]);
        assert_eq!(ctx.titles(json!({"where": {"title": {"contains": "cat"}}})), vec!["feed cat"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_boolean_filter(ctx: &mut ActivityTestContext) {
        let mut recurring = Activity::new("daily");
        recurring.is_recurring = true;
        ctx.activities.create(&recurring).unwrap();
        ctx.seed(&["once"]);

        assert_eq!(ctx.titles(json!({"where": {"isRecurring": {"eq": true}}})), vec!["daily"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_unknown_where_keys_are_ignored(ctx: &mut ActivityTestContext) {
        ctx.seed(&["a", "b"]);
        assert_eq!(ctx.titles(json!({"where": {"nonexistent": {"eq": "x"}}})), vec!["a", "b"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_pagination(ctx: &mut ActivityTestContext) {
        ctx.seed(&["1", "2", "3", "4", "5"]);

        assert_eq!(ctx.titles(json!({"paginate": {"size": 2, "page": 2}})), vec!["3", "4"]);
        assert_eq!(ctx.titles(json!({"paginate": {"size": 2, "offset": 3}})), vec!["4", "5"]);
        // page takes precedence over offset
        assert_eq!(ctx.titles(json!({"paginate": {"size": 2, "page": 1, "offset": 7}})), vec!["1", "2"]);
        assert_eq!(ctx.titles(json!({"paginate": {"size": 0}})).len(), 5);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_page_past_the_end_is_empty(ctx: &mut ActivityTestContext) {
        ctx.seed(&["1", "2"]);
        let titles = ctx.titles(json!({"paginate": {"size": 100, "page": i64::MAX}}));
        assert!(titles.is_empty());
        let titles = ctx.titles(json!({"paginate": {"size": i64::MAX, "page": i64::MAX}}));
        assert!(titles.is_empty());
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_sorting(ctx: &mut ActivityTestContext) {
        ctx.seed(&["b", "c", "a"]);
        assert_eq!(ctx.titles(json!({"desc": ["title"]})), vec!["c", "b", "a"]);
        assert_eq!(ctx.titles(json!({"asc": ["Title"]})), vec!["a", "b", "c"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_unknown_sort_field_is_skipped(ctx: &mut ActivityTestContext) {
        ctx.seed(&["b", "a"]);
        assert_eq!(ctx.titles(json!({"asc": ["shoeSize", "title"]})), vec!["a", "b"]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_list_for_weekday(ctx: &mut ActivityTestContext) {
        for (title, rule) in [
            ("daily", Some("everyday")),
            ("mon-fri", Some("monday,friday")),
            ("tuesday", Some("tuesday")),
            ("none", None),
        ] {
            let mut activity = Activity::new(title);
            activity.recurrence_rule = rule.map(str::to_string);
            ctx.activities.create(&activity).unwrap();
        }

        let monday: Vec<_> = ctx
            .activities
            .list_for_weekday(Weekday::Mon)
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(monday, vec!["daily", "mon-fri"]);

        let today = ctx.activities.list_today().unwrap();
        assert!(today.iter().any(|a| a.title == "daily"));
        assert!(today.iter().all(|a| a.title != "none"));
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_concurrent_updates_last_write_wins(ctx: &mut ActivityTestContext) {
        let id = ctx.seed(&["start"])[0];
        let activities = &ctx.activities;

        thread::scope(|scope| {
            for title in ["left", "right"] {
                scope.spawn(move || {
                    let patch = ActivityPatch { title: Some(title.into()), ..Default::default() };
                    activities.update(id, &patch).unwrap();
                });
            }
        });

        let title = activities.get(id).unwrap().title;
        assert!(title == "left" || title == "right");
    }
}
