//! Repository-level tests for project CRUD, filtering, and bulk import.

mod common;

use common::project;
use sqlx::PgPool;

use civitrack_db::repositories::ProjectRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_fetch_round_trips_location(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &project("Waterfront LRT"))
        .await
        .unwrap();

    let fetched = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.project_name, "Waterfront LRT");
    assert_eq!(fetched.location.0.coordinates, [-79.3832, 43.6532]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_project_name_is_rejected(pool: PgPool) {
    ProjectRepo::create(&pool, &project("Twin")).await.unwrap();
    let err = ProjectRepo::create(&pool, &project("Twin"))
        .await
        .unwrap_err();

    // Unique violation on uq_projects_project_name.
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_projects_project_name"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_filter_is_case_insensitive(pool: PgPool) {
    ProjectRepo::create(&pool, &project("Filtered"))
        .await
        .unwrap();

    let hits = ProjectRepo::list(&pool, Some("construction started"), None, 1, 6)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);

    let misses = ProjectRepo::list(&pool, Some("Completed"), None, 1, 6)
        .await
        .unwrap();
    assert!(misses.is_empty());

    let category_hits = ProjectRepo::list(&pool, None, Some("TRANSIT"), 1, 6)
        .await
        .unwrap();
    assert_eq!(category_hits.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pagination_is_offset_based_without_total(pool: PgPool) {
    for i in 0..5 {
        ProjectRepo::create(&pool, &project(&format!("Project {i}")))
            .await
            .unwrap();
    }

    let page1 = ProjectRepo::list(&pool, None, None, 1, 2).await.unwrap();
    let page2 = ProjectRepo::list(&pool, None, None, 2, 2).await.unwrap();
    let page3 = ProjectRepo::list(&pool, None, None, 3, 2).await.unwrap();

    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 2);
    // Short page signals the end of the collection.
    assert_eq!(page3.len(), 1);
    assert_ne!(page1[0].id, page2[0].id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_import_is_idempotent(pool: PgPool) {
    let records = [project("A"), project("B"), project("C")];

    let mut first_run = 0;
    for record in &records {
        if ProjectRepo::insert_if_absent(&pool, record).await.unwrap() {
            first_run += 1;
        }
    }
    assert_eq!(first_run, 3);

    let mut second_run = 0;
    for record in &records {
        if ProjectRepo::insert_if_absent(&pool, record).await.unwrap() {
            second_run += 1;
        }
    }
    assert_eq!(second_run, 0, "re-import must insert nothing");

    let all = ProjectRepo::list(&pool, None, None, 1, 100).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_all_wipes_the_table(pool: PgPool) {
    ProjectRepo::create(&pool, &project("Ephemeral"))
        .await
        .unwrap();
    let removed = ProjectRepo::delete_all(&pool).await.unwrap();
    assert_eq!(removed, 1);
    assert!(ProjectRepo::figures(&pool).await.unwrap().is_empty());
}
