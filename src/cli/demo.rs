//! A scripted walk through the store: a small school with students and
//! courses, one refused insert, a filtered select, an update and a delete.
//!
//! Useful as a smoke test of a build and as a tour of the API.

use crate::cli::messages::{
    highlight_argument, render_rows, schema_mismatch_message, system_message,
};
use crate::config::Config;
use crate::store::{Database, Row, Table};

fn insert_or_explain(table: &mut Table, record: Row) -> bool {
    let given = record.clone();

    if table.insert(record) {
        return true;
    }

    let mismatch = table.schema().mismatch(&given).unwrap_or_default();
    println!(
        "{}",
        schema_mismatch_message(table.name(), &table.columns(), &mismatch)
    );
    false
}

fn section(title: &str) {
    println!();
    println!("{}", system_message("demo", highlight_argument(title)));
}

pub fn run_demo(config: &Config) -> Result<(), String> {
    let mut school = Database::new(config.database_name.clone());

    school.create_table("students", ["id", "name", "age", "course_id"]);
    school.create_table("courses", ["course_id", "course_name", "teacher"]);

    println!("{}", school);

    section("Inserting data");
    {
        let students = school
            .get_table_mut("students")
            .ok_or_else(|| "table 'students' was not created".to_string())?;

        let rows = [
            (1, "Ana Torres", 15, 101),
            (2, "Luis Castro", 16, 102),
            (3, "Marta Rivas", 15, 101),
        ];
        for (id, name, age, course_id) in rows {
            insert_or_explain(
                students,
                Row::new()
                    .with("id", id)
                    .with("name", name)
                    .with("age", age)
                    .with("course_id", course_id),
            );
        }

        println!(
            "{}",
            system_message("demo", "Trying an insert with missing columns...".to_string())
        );
        insert_or_explain(students, Row::new().with("id", 4).with("name", "Carlos"));
    }
    {
        let courses = school
            .get_table_mut("courses")
            .ok_or_else(|| "table 'courses' was not created".to_string())?;

        insert_or_explain(
            courses,
            Row::new()
                .with("course_id", 101)
                .with("course_name", "Mathematics")
                .with("teacher", "Prof. Garcia"),
        );
        insert_or_explain(
            courses,
            Row::new()
                .with("course_id", 102)
                .with("course_name", "Literature")
                .with("teacher", "Prof. Perez"),
        );
    }

    let students = school
        .get_table_mut("students")
        .ok_or_else(|| "table 'students' was not created".to_string())?;

    section("Querying data");
    println!("All students:");
    println!("{}", render_rows(&students.select(None)));
    println!("Students of course 101:");
    println!(
        "{}",
        render_rows(&students.select(Some(&Row::new().with("course_id", 101))))
    );

    section("Updating data");
    let n_updated = students.update(
        &Row::new().with("name", "Ana Torres"),
        &Row::new().with("age", 16),
    );
    println!("Updated Ana's age. Rows affected: {}", n_updated);

    section("Deleting data");
    let n_deleted = students.delete(&Row::new().with("name", "Luis Castro"));
    println!("Deleted Luis. Rows affected: {}", n_deleted);

    section("Final results");
    println!("{}", students);

    Ok(())
}
