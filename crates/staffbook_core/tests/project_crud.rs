use staffbook_core::db::open_db_in_memory;
use staffbook_core::{
    Project, ProjectRepository, ProjectUpdate, RepoError, Session, SqliteProjectRepository,
};

#[test]
fn register_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let stored = Project::new(1, "Alpha", "2024-01-01", "2024-06-01");
    let id = repo.register_project(&stored).unwrap();

    let loaded = repo.get_project(id).unwrap().unwrap();
    assert_eq!(loaded, stored);
}

#[test]
fn list_returns_registration_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    repo.register_project(&Project::new(1, "Alpha", "2024-01-01", "2024-06-01"))
        .unwrap();
    repo.register_project(&Project::new(2, "Beta", "2024-02-01", "2024-07-01"))
        .unwrap();

    let names: Vec<String> = repo
        .list_projects()
        .unwrap()
        .into_iter()
        .map(|project| project.name)
        .collect();
    assert_eq!(names, ["Alpha", "Beta"]);
}

#[test]
fn duplicate_name_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    repo.register_project(&Project::new(1, "Alpha", "2024-01-01", "2024-06-01"))
        .unwrap();

    let err = repo
        .register_project(&Project::new(2, "Alpha", "2024-02-01", "2024-07-01"))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateProjectName(name) if name == "Alpha"));
    assert_eq!(repo.list_projects().unwrap().len(), 1);
}

#[test]
fn update_overwrites_without_validation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let id = repo
        .register_project(&Project::new(1, "Alpha", "2024-01-01", "2024-06-01"))
        .unwrap();

    repo.update_project(
        id,
        &ProjectUpdate {
            name: "Alpha Reloaded".to_string(),
            start_date: "2025-01-01".to_string(),
            end_date: "2024-01-01".to_string(),
        },
    )
    .unwrap();

    let loaded = repo.get_project(id).unwrap().unwrap();
    assert_eq!(loaded.code, 1);
    assert_eq!(loaded.name, "Alpha Reloaded");
    assert_eq!(loaded.start_date, "2025-01-01");
    assert_eq!(loaded.end_date, "2024-01-01");
}

#[test]
fn rename_may_reuse_a_registered_name() {
    // Renames bypass the registry: only registration checks it.
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    repo.register_project(&Project::new(1, "Alpha", "2024-01-01", "2024-06-01"))
        .unwrap();
    let id = repo
        .register_project(&Project::new(2, "Beta", "2024-02-01", "2024-07-01"))
        .unwrap();

    repo.update_project(
        id,
        &ProjectUpdate {
            name: "Alpha".to_string(),
            start_date: "2024-02-01".to_string(),
            end_date: "2024-07-01".to_string(),
        },
    )
    .unwrap();

    assert_eq!(repo.get_project(id).unwrap().unwrap().name, "Alpha");
}

#[test]
fn registered_name_stays_taken_after_rename() {
    // The registry records every name ever accepted, so renaming a project
    // away from its original name does not free that name up.
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let id = repo
        .register_project(&Project::new(1, "Alpha", "2024-01-01", "2024-06-01"))
        .unwrap();
    repo.update_project(
        id,
        &ProjectUpdate {
            name: "Omega".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-06-01".to_string(),
        },
    )
    .unwrap();

    let err = repo
        .register_project(&Project::new(3, "Alpha", "2024-03-01", "2024-08-01"))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateProjectName(_)));
}

#[test]
fn update_unknown_record_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let err = repo
        .update_project(
            999,
            &ProjectUpdate {
                name: "Nothing".to_string(),
                start_date: "2024-01-01".to_string(),
                end_date: "2024-06-01".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(999)));
}

#[test]
fn service_registers_and_updates_through_session() {
    let session = Session::open_in_memory().unwrap();
    let projects = session.projects();

    let id = projects
        .register(&Project::new(1, "Alpha", "2024-01-01", "2024-06-01"))
        .unwrap();

    projects
        .update(
            id,
            &ProjectUpdate {
                name: "Beta".to_string(),
                start_date: "2024-03-01".to_string(),
                end_date: "2024-09-01".to_string(),
            },
        )
        .unwrap();

    let listed = projects.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Beta");

    let err = projects
        .register(&Project::new(2, "Alpha", "2024-01-01", "2024-06-01"))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateProjectName(_)));
}
