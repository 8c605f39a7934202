#[cfg(test)]
mod tests {
    use schejzuren::libs::config::{Config, CONFIG_FILE_NAME, DB_FILE_NAME};
    use schejzuren::libs::data_storage::DataStorage;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext { temp_dir: tempfile::tempdir().unwrap() }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.database_file, DB_FILE_NAME);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_then_read(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        let config = Config {
            database_file: "other.db".into(),
            log_filter: Some("schejzuren=debug".into()),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::read_from(&path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{}").unwrap();
        assert_eq!(Config::read_from(&path).unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ database_file").unwrap();
        let err = Config::read_from(&path).unwrap_err();
        assert_eq!(err.kind(), "serialization");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_path_resolution(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::at(ctx.temp_dir.path().join("data"));

        let relative = Config::default().database_path_in(&storage).unwrap();
        assert_eq!(relative, ctx.temp_dir.path().join("data").join(DB_FILE_NAME));
        assert!(ctx.temp_dir.path().join("data").is_dir());

        let absolute_file = ctx.temp_dir.path().join("elsewhere.db");
        let config = Config { database_file: absolute_file.display().to_string(), log_filter: None };
        assert_eq!(config.database_path_in(&storage).unwrap(), absolute_file);
    }
}
