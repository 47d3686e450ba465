//! Execute tests for drop command.

#[cfg(test)]
mod tests {
    use super::super::DropCmd;
    use crate::commands::Execute;
    use crate::generator::DialectKind;
    use crate::test_utils::context;
    use rstest::rstest;

    #[rstest]
    #[case(DialectKind::Mysql, vec!["DROP DATABASE IF EXISTS app_test"])]
    #[case(DialectKind::Postgres, vec!["DROP DATABASE IF EXISTS app_test"])]
    #[case(DialectKind::Sqlite, vec![])]
    fn test_drop(#[case] kind: DialectKind, #[case] expected: Vec<&str>) {
        let cmd = DropCmd {
            database: Some("app_test".to_string()),
        };
        let result = cmd.execute(&context(kind)).unwrap();
        assert_eq!(result.database, "app_test");
        assert_eq!(result.statements, expected);
    }

    #[rstest]
    fn test_drop_requires_database() {
        let cmd = DropCmd { database: None };
        assert!(cmd.execute(&context(DialectKind::Mysql)).is_err());
    }

    #[rstest]
    fn test_drop_rejects_unsafe_database_name() {
        let cmd = DropCmd {
            database: Some("app; DROP DATABASE prod".to_string()),
        };
        assert!(cmd.execute(&context(DialectKind::Mysql)).is_err());
    }
}
