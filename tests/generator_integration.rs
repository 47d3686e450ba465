//! End-to-end tests through the public API: descriptions in, DDL out.

use std::error::Error;

use rstest::rstest;
use schema_ddl::bootstrap::{Bootstrap, StatementExecutor};
use schema_ddl::config::DialectConfigFile;
use schema_ddl::spec::{RecordDescription, parse_descriptions};
use schema_ddl::{
    ClassSpecification, DdlError, Dialect, DialectKind, FieldType, SqlGenerator, TypeDescription,
};

const SCHEMA: &str = r#"[
  {
    "name": "users",
    "fields": [
      {"name": "id", "type": "UUID", "primary_key": true},
      {"name": "email", "type": "String"},
      {"name": "bio", "type": "Text", "nullable": true}
    ],
    "constraints": [{"type": "unique", "fields": ["email"]}]
  },
  {
    "name": "sessions",
    "fields": [
      {"name": "token", "type": "String"},
      {"name": "user_id", "type": "UUID"},
      {"name": "expires_at", "type": "DateTime"},
      {"name": "remember", "type": "Boolean"}
    ],
    "id_fields": ["token"],
    "constraints": [{"type": "key", "fields": ["user_id", "expires_at"], "extras": "USING HASH "}]
  }
]"#;

/// Executor that records statements the way a connection would receive them.
#[derive(Default)]
struct RecordingConnection {
    executed: Vec<String>,
}

impl StatementExecutor for RecordingConnection {
    fn execute(&mut self, statement: &str) -> Result<(), Box<dyn Error>> {
        self.executed.push(statement.to_string());
        Ok(())
    }
}

fn schema() -> Vec<RecordDescription> {
    parse_descriptions("schema.json", SCHEMA).expect("schema should parse")
}

#[rstest]
fn test_users_end_to_end() {
    let spec = ClassSpecification::builder("users")
        .field("id", FieldType::Uuid)
        .field("email", FieldType::String)
        .nullable_field("bio", FieldType::Text)
        .id_fields(["id"])
        .constraint("unique", ["email"], None)
        .build()
        .unwrap();

    assert_eq!(
        Dialect::default().generate_create_query(&spec).unwrap(),
        "CREATE TABLE users (`id` VARCHAR(36) NOT NULL, `email` VARCHAR(255) NOT NULL, \
         `bio` TEXT NULL DEFAULT NULL, PRIMARY KEY (`id`), UNIQUE (`email`))"
    );
}

#[rstest]
fn test_description_and_builder_agree() {
    let descriptions = schema();
    let built = ClassSpecification::builder("users")
        .field("id", FieldType::Uuid)
        .field("email", FieldType::String)
        .nullable_field("bio", FieldType::Text)
        .id_fields(["id"])
        .constraint("unique", ["email"], None)
        .build()
        .unwrap();

    assert_eq!(descriptions[0].analyze().unwrap(), built);
}

#[rstest]
fn test_sessions_mysql() {
    let descriptions = schema();
    let ddl = Dialect::default()
        .convert_class_to_create_query(&descriptions[1])
        .unwrap();

    assert_eq!(
        ddl,
        "CREATE TABLE sessions (`token` VARCHAR(255) NOT NULL, `user_id` VARCHAR(36) NOT NULL, \
         `expires_at` DATETIME NOT NULL, `remember` TINYINT(1) NOT NULL, PRIMARY KEY (`token`), \
         KEY (`user_id`, `expires_at`) USING HASH)"
    );
}

#[rstest]
#[case(DialectKind::Mysql)]
#[case(DialectKind::Postgres)]
#[case(DialectKind::Sqlite)]
fn test_every_dialect_renders_schema(#[case] kind: DialectKind) {
    let dialect = kind.into_dialect();
    for description in schema() {
        let ddl = dialect.convert_class_to_create_query(&description).unwrap();
        assert!(ddl.starts_with(&format!("CREATE TABLE {} (", description.name)));
        assert_eq!(ddl.matches("PRIMARY KEY").count(), 1);
    }
}

#[rstest]
fn test_unknown_type_produces_no_output() {
    let json = r#"{"name": "t", "fields": [{"name": "id", "type": "Decimal", "primary_key": true}]}"#;
    let descriptions = parse_descriptions("t.json", json).unwrap();

    let result = Dialect::default().convert_class_to_create_query(&descriptions[0]);
    assert_eq!(result, Err(DdlError::UnknownFieldType("Decimal".to_string())));
}

#[rstest]
fn test_bootstrap_against_connection() {
    let descriptions = schema();
    let described: Vec<&dyn TypeDescription> =
        descriptions.iter().map(|d| d as &dyn TypeDescription).collect();

    let mut bootstrap =
        Bootstrap::new(DialectKind::Postgres.into_dialect(), "auth", RecordingConnection::default())
            .unwrap();
    assert_eq!(bootstrap.initialize(&described).unwrap(), 2);
    bootstrap.deinitialize().unwrap();

    let executed = bootstrap.into_executor().executed;
    assert_eq!(executed.len(), 4);
    assert_eq!(executed[0], "CREATE DATABASE auth ENCODING 'UTF8'");
    assert!(executed[1].starts_with(r#"CREATE TABLE users ("id" UUID NOT NULL"#));
    assert!(executed[2].starts_with(r#"CREATE TABLE sessions ("token" VARCHAR(255) NOT NULL"#));
    assert_eq!(executed[3], "DROP DATABASE IF EXISTS auth");
}

#[rstest]
#[case(r#"{"type": "postgres", "encoding": "UTF8'; DROP DATABASE prod; --"}"#)]
#[case(r#"{"type": "mysql", "charset": "utf8mb4; DROP DATABASE prod"}"#)]
fn test_bootstrap_refuses_unsafe_config_settings(#[case] dialect: &str) {
    let config: DialectConfigFile = serde_json::from_str(dialect).unwrap();

    let result = Bootstrap::new(config.to_dialect(), "app", RecordingConnection::default());
    let err = result.err().expect("unsafe setting should be rejected");
    assert!(matches!(
        err.downcast_ref::<DdlError>(),
        Some(DdlError::InvalidSetting { .. })
    ));
}
