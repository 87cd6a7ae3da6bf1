// Integration tests for identity-map behavior across loads and repositories

use perfrev_store::repo::{EmployeeRepo, ReviewRepo, SqlDirectory};
use rusqlite::Connection;
use std::rc::Rc;

fn setup_test_db() -> Connection {
    let conn = perfrev_store::db::open_in_memory().unwrap();
    perfrev_store::schema::create_all(&conn).unwrap();
    conn
}

#[test]
fn test_repeated_loads_return_the_same_instance() {
    let conn = setup_test_db();
    let employee = EmployeeRepo::create(&conn, "Kai").unwrap();
    let mut repo = ReviewRepo::new();

    let directory = SqlDirectory::new(&conn);
    let created = repo
        .create(&conn, &directory, 2021, "steady", employee.id.unwrap())
        .unwrap();
    let id = created.borrow().id.unwrap();

    let first = repo.find_by_id(&conn, id).unwrap().unwrap();
    let second = repo.find_by_id(&conn, id).unwrap().unwrap();

    assert!(Rc::ptr_eq(&created, &first));
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn test_get_all_resolves_through_the_cache() {
    let conn = setup_test_db();
    let employee = EmployeeRepo::create(&conn, "Kai").unwrap();
    let mut repo = ReviewRepo::new();

    let directory = SqlDirectory::new(&conn);
    let created = repo
        .create(&conn, &directory, 2021, "listed", employee.id.unwrap())
        .unwrap();

    let all = repo.get_all(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert!(Rc::ptr_eq(&created, &all[0]));
}

#[test]
fn test_unsaved_mutation_is_visible_through_any_handle() {
    let conn = setup_test_db();
    let employee = EmployeeRepo::create(&conn, "Kai").unwrap();
    let mut repo = ReviewRepo::new();

    let directory = SqlDirectory::new(&conn);
    let created = repo
        .create(&conn, &directory, 2021, "draft", employee.id.unwrap())
        .unwrap();
    let id = created.borrow().id.unwrap();

    created.borrow_mut().set_summary("amended draft").unwrap();

    // Same instance, so the mutation shows up before any save
    let loaded = repo.find_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(loaded.borrow().summary(), "amended draft");
}

#[test]
fn test_fresh_repository_loads_fresh_instances() {
    let conn = setup_test_db();
    let employee = EmployeeRepo::create(&conn, "Kai").unwrap();
    let mut repo = ReviewRepo::new();

    let directory = SqlDirectory::new(&conn);
    let created = repo
        .create(&conn, &directory, 2021, "original", employee.id.unwrap())
        .unwrap();
    let id = created.borrow().id.unwrap();

    // A second repository has its own cache: equal values, distinct instance
    let mut other = ReviewRepo::new();
    let reloaded = other.find_by_id(&conn, id).unwrap().unwrap();

    assert!(!Rc::ptr_eq(&created, &reloaded));
    assert_eq!(*created.borrow(), *reloaded.borrow());
}

#[test]
fn test_file_backed_rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.db");

    let id = {
        let conn = perfrev_store::db::open(&path).unwrap();
        perfrev_store::schema::create_all(&conn).unwrap();
        let employee = EmployeeRepo::create(&conn, "Kai").unwrap();

        let mut repo = ReviewRepo::new();
        let directory = SqlDirectory::new(&conn);
        let review = repo
            .create(&conn, &directory, 2023, "durable", employee.id.unwrap())
            .unwrap();
        let review_id = review.borrow().id.unwrap();
        review_id
    };

    let conn = perfrev_store::db::open(&path).unwrap();
    let mut repo = ReviewRepo::new();
    let review = repo
        .find_by_id(&conn, id)
        .unwrap()
        .expect("row should survive reopen");

    let r = review.borrow();
    assert_eq!(r.year(), 2023);
    assert_eq!(r.summary(), "durable");
}
