use chrono::Duration;
use wh::db::log::load_log;
use wh::db::migrate::run_pending_migrations;
use wh::db::pool::DbPool;
use wh::db::queries::*;
use wh::db::stats::collect_db_info;
use wh::errors::AppError;
use wh::models::{WorkDay, WorkPeriod};

mod common;
use common::{date, local, memory_pool, setup_test_db};

fn saved_day(pool: &DbPool, y: i32, m: u32, d: u32) -> WorkDay {
    create_work_day(&pool.conn, &WorkDay::new(date(y, m, d))).expect("create work day")
}

#[test]
fn test_work_day_round_trip() {
    let pool = memory_pool();

    let mut wd = WorkDay::new(date(2023, 8, 11));
    wd.set_length(Duration::minutes(270));
    wd.set_note("half day");

    let created = create_work_day(&pool.conn, &wd).unwrap();
    assert!(created.is_persisted());
    assert!(created.created_at.is_some());
    assert_eq!(created.created_at, created.updated_at);

    let loaded = get_work_day_by_date(&pool.conn, &date(2023, 8, 11))
        .unwrap()
        .expect("work day present");

    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.date, date(2023, 8, 11));
    assert_eq!(loaded.length_mins, 270);
    assert_eq!(loaded.note.as_deref(), Some("half day"));
    assert_eq!(loaded.created_at, created.created_at);
}

#[test]
fn test_missing_work_day_is_none() {
    let pool = memory_pool();
    saved_day(&pool, 2023, 8, 11);

    assert!(
        get_work_day_by_date(&pool.conn, &date(2023, 8, 12))
            .unwrap()
            .is_none()
    );
    assert!(
        load_work_day_with_periods(&pool.conn, &date(2023, 8, 12))
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_duplicate_date_is_refused() {
    let pool = memory_pool();
    saved_day(&pool, 2023, 8, 11);

    let err = create_work_day(&pool.conn, &WorkDay::new(date(2023, 8, 11))).unwrap_err();
    assert!(matches!(err, AppError::Db(_)), "got {err:?}");
    assert_eq!(get_work_day_count(&pool.conn).unwrap(), 1);
}

#[test]
fn test_work_day_count() {
    let pool = memory_pool();
    assert_eq!(get_work_day_count(&pool.conn).unwrap(), 0);

    saved_day(&pool, 2023, 8, 11);
    saved_day(&pool, 2023, 8, 12);
    saved_day(&pool, 2023, 8, 14);

    assert_eq!(get_work_day_count(&pool.conn).unwrap(), 3);
}

#[test]
fn test_periods_are_returned_in_insertion_order() {
    let pool = memory_pool();
    let wd = saved_day(&pool, 2023, 9, 1);
    let other = saved_day(&pool, 2023, 9, 2);

    // inserted out of chronological order on purpose
    for (h, m) in [(13, 0), (9, 0), (11, 30)] {
        let mut wp = WorkPeriod::new(&wd, local(2023, 9, 1, h, m, 0));
        wp.set_end_at(Some(local(2023, 9, 1, h, m + 15, 0)));
        create_work_period(&pool.conn, &wp).unwrap();
    }
    create_work_period(&pool.conn, &WorkPeriod::new(&other, local(2023, 9, 2, 8, 0, 0))).unwrap();

    let periods = get_work_periods(&pool.conn, &wd).unwrap();
    let starts: Vec<_> = periods.iter().map(|p| p.start_at).collect();
    assert_eq!(
        starts,
        vec![
            local(2023, 9, 1, 13, 0, 0),
            local(2023, 9, 1, 9, 0, 0),
            local(2023, 9, 1, 11, 30, 0),
        ]
    );
    assert!(periods.iter().all(|p| p.work_day_id == wd.id));
    assert!(periods.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(get_work_period_count(&pool.conn).unwrap(), 4);
}

#[test]
fn test_load_work_day_attaches_periods() {
    let pool = memory_pool();
    let wd = saved_day(&pool, 2023, 9, 1);

    let mut first = WorkPeriod::new(&wd, local(2023, 9, 1, 9, 0, 0));
    first.set_end_at(Some(local(2023, 9, 1, 10, 30, 0)));
    first.set_note("standup");
    create_work_period(&pool.conn, &first).unwrap();

    let loaded = load_work_day_with_periods(&pool.conn, &date(2023, 9, 1))
        .unwrap()
        .expect("work day present");

    assert_eq!(loaded.work_periods().len(), 1);
    assert_eq!(loaded.work_periods()[0].note.as_deref(), Some("standup"));
    assert_eq!(loaded.time_worked(), Duration::minutes(90));
}

#[test]
fn test_open_period_lookup() {
    let pool = memory_pool();
    let wd = saved_day(&pool, 2023, 9, 1);

    assert!(get_open_work_period(&pool.conn, &wd).unwrap().is_none());

    let mut done = WorkPeriod::new(&wd, local(2023, 9, 1, 8, 0, 0));
    done.set_end_at(Some(local(2023, 9, 1, 9, 0, 0)));
    create_work_period(&pool.conn, &done).unwrap();
    assert!(get_open_work_period(&pool.conn, &wd).unwrap().is_none());

    let first_open =
        create_work_period(&pool.conn, &WorkPeriod::new(&wd, local(2023, 9, 1, 10, 0, 0)))
            .unwrap();
    create_work_period(&pool.conn, &WorkPeriod::new(&wd, local(2023, 9, 1, 11, 0, 0))).unwrap();

    let open = get_open_work_period(&pool.conn, &wd)
        .unwrap()
        .expect("open period present");
    assert_eq!(open.id, first_open.id);
    assert!(open.is_open());
}

#[test]
fn test_update_work_period() {
    let pool = memory_pool();
    let wd = saved_day(&pool, 2023, 9, 1);

    let mut wp =
        create_work_period(&pool.conn, &WorkPeriod::new(&wd, local(2023, 9, 1, 9, 0, 0)))
            .unwrap();
    wp.set_end_at(Some(local(2023, 9, 1, 12, 0, 0)));
    wp.set_note("deep work");

    let updated = update_work_period(&pool.conn, &wp).unwrap();
    assert!(updated.updated_at >= wp.created_at);

    let stored = &get_work_periods(&pool.conn, &wd).unwrap()[0];
    assert_eq!(stored.id, wp.id);
    assert_eq!(stored.end_at, Some(local(2023, 9, 1, 12, 0, 0)));
    assert_eq!(stored.note.as_deref(), Some("deep work"));
    assert!(get_open_work_period(&pool.conn, &wd).unwrap().is_none());
}

#[test]
fn test_update_missing_period_fails() {
    let pool = memory_pool();
    let wd = saved_day(&pool, 2023, 9, 1);

    let mut ghost = WorkPeriod::new(&wd, local(2023, 9, 1, 9, 0, 0));
    ghost.id = 42;

    let err = update_work_period(&pool.conn, &ghost).unwrap_err();
    assert!(matches!(err, AppError::Db(_)), "got {err:?}");
}

#[test]
fn test_period_requires_existing_work_day() {
    let pool = memory_pool();

    let mut orphan_day = WorkDay::new(date(2023, 9, 1));
    orphan_day.id = 999;
    let orphan = WorkPeriod::new(&orphan_day, local(2023, 9, 1, 9, 0, 0));

    assert!(create_work_period(&pool.conn, &orphan).is_err());
    assert_eq!(get_work_period_count(&pool.conn).unwrap(), 0);
}

#[test]
fn test_migrations_apply_once() {
    let pool = memory_pool();

    assert_eq!(run_pending_migrations(&pool.conn).unwrap(), 0);

    let applied: Vec<_> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "migration_applied")
        .collect();
    assert_eq!(applied.len(), 3);
    assert_eq!(applied[0].target, "20230811_0001_create_work_days");
}

#[test]
fn test_open_file_database_twice() {
    let (_dir, db_path) = setup_test_db();

    {
        let pool = DbPool::open(&db_path).unwrap();
        saved_day(&pool, 2023, 9, 1);
    }

    let pool = DbPool::open(&db_path).unwrap();
    assert_eq!(get_work_day_count(&pool.conn).unwrap(), 1);

    let info = collect_db_info(&pool.conn, &db_path).unwrap();
    assert!(info.file_size > 0);
    assert_eq!(info.work_days, 1);
    assert_eq!(info.first_date, Some(date(2023, 9, 1)));
    assert_eq!(info.last_date, Some(date(2023, 9, 1)));
}

#[test]
fn test_db_info_on_empty_store() {
    let pool = memory_pool();
    let info = collect_db_info(&pool.conn, ":memory:").unwrap();

    assert_eq!(info.file_size, 0);
    assert_eq!(info.work_days, 0);
    assert_eq!(info.work_periods, 0);
    assert!(info.first_date.is_none());
}
