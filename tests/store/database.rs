use tabula_engine::store::{Database, Row, Value};

fn _prepare_database() -> Database {
    Database::new("test_db")
}

#[test]
fn database_create_table() {
    let mut database = _prepare_database();

    assert!(database.create_table("students", ["id", "name"]));
    assert!(database.contains_table("students"));

    let table = database.get_table("students").unwrap();
    assert_eq!(table.name(), "students");
    assert_eq!(table.columns(), vec!["id", "name"]);
    assert!(table.is_empty());
}

#[test]
fn database_create_table_collision_is_a_noop() {
    let mut database = _prepare_database();

    assert!(database.create_table("T", ["a", "b"]));
    database
        .get_table_mut("T")
        .unwrap()
        .insert(Row::new().with("a", 1).with("b", 2));

    assert!(!database.create_table("T", ["c"]));

    let table = database.get_table("T").unwrap();
    assert_eq!(table.columns(), vec!["a", "b"]);
    assert_eq!(table.len(), 1);
    assert_eq!(database.table_names(), vec!["T"]);
}

#[test]
fn database_create_table_is_permissive() {
    let mut database = _prepare_database();

    assert!(database.create_table("", Vec::<String>::new()));
    assert!(database.create_table("dupes", ["a", "a", "b"]));

    assert_eq!(database.get_table("dupes").unwrap().columns(), vec!["a", "b"]);

    let empty = database.get_table_mut("").unwrap();
    assert!(empty.insert(Row::new()));
    assert!(!empty.insert(Row::new().with("a", 1)));
}

#[test]
fn database_get_table_missing() {
    let mut database = _prepare_database();

    assert!(database.get_table("missing").is_none());
    assert!(database.get_table_mut("missing").is_none());
    assert!(!database.contains_table("missing"));
    assert!(database.table_names().is_empty());
}

#[test]
fn database_mutations_through_handle_persist() {
    let mut database = _prepare_database();
    database.create_table("people", ["id", "grp"]);

    {
        let people = database.get_table_mut("people").unwrap();
        people.insert(Row::new().with("id", 1).with("grp", "x"));
        people.insert(Row::new().with("id", 2).with("grp", "y"));
        people.update(&Row::new().with("id", 2), &Row::new().with("grp", "x"));
    }

    let people = database.get_table("people").unwrap();
    assert_eq!(people.select(Some(&Row::new().with("grp", "x"))).len(), 2);
    assert_eq!(people.rows()[1].get("grp"), Some(&Value::from("x")));
}

#[test]
fn database_list_structure_in_creation_order() {
    let mut database = _prepare_database();
    database.create_table("students", ["id", "name", "age", "course_id"]);
    database.create_table("courses", ["course_id", "course_name", "teacher"]);

    let structure = database.list_structure();
    assert_eq!(
        structure,
        vec![
            (
                "students".to_string(),
                vec![
                    "id".to_string(),
                    "name".to_string(),
                    "age".to_string(),
                    "course_id".to_string()
                ]
            ),
            (
                "courses".to_string(),
                vec![
                    "course_id".to_string(),
                    "course_name".to_string(),
                    "teacher".to_string()
                ]
            ),
        ]
    );
}

#[test]
fn database_display_structure() {
    let mut database = _prepare_database();
    assert_eq!(
        format!("{}", database),
        "Structure of database 'test_db':\n  (no tables)"
    );

    database.create_table("courses", ["course_id", "teacher"]);
    assert_eq!(
        format!("{}", database),
        "Structure of database 'test_db':\n  - Table: courses | Columns: course_id, teacher"
    );
}
