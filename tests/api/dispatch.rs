use crate::helpers::spawn_runtime;
use claims::{assert_err, assert_ok};
use status_test_support::fixtures::{BASIC_USER, TEST_SUITE_DATA};
use status_test_support::suite::TestStatus;
use status_test_support::{debug, start_threads, try_start_indexed_threads};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use uuid::Uuid;

#[derive(Debug)]
struct Session {
    id: Uuid,
    username: String,
}

fn open_session(username: String) -> Session {
    debug(&format!("Opening session for {}", username));
    std::thread::sleep(Duration::from_millis(200));
    Session {
        id: Uuid::new_v4(),
        username,
    }
}

#[test]
fn sessions_are_opened_in_parallel() {
    let runtime = spawn_runtime();
    let mut sessions = HashMap::new();

    let started = Instant::now();
    let result = runtime.block_on(start_threads(
        4,
        open_session,
        &mut sessions,
        BASIC_USER.username.clone(),
    ));
    let elapsed = started.elapsed();

    assert_ok!(result);
    assert_eq!(sessions.len(), 4);
    assert!(
        sessions
            .values()
            .all(|session| session.username == BASIC_USER.username)
    );
    let ids: HashSet<_> = sessions.values().map(|session| session.id).collect();
    assert_eq!(ids.len(), 4);
    // Sequential execution would take at least 800ms
    assert!(elapsed < Duration::from_millis(700), "took {:?}", elapsed);

    TEST_SUITE_DATA.record("sessions_are_opened_in_parallel", TestStatus::Passed);
}

#[test]
fn a_failed_session_fails_the_whole_dispatch() {
    let runtime = spawn_runtime();
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let mut sessions = HashMap::new();

    let result = runtime.block_on(try_start_indexed_threads(
        3,
        move |index, username: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            if index == 1 {
                anyhow::bail!("{} could not sign in", username);
            }
            Ok(open_session(username))
        },
        &mut sessions,
        BASIC_USER.username.clone(),
    ));

    let error = assert_err!(result);
    assert_eq!(error.index, 1);
    assert!(format!("{:?}", error).contains("could not sign in"));
    // Dropping the runtime waits for in-flight blocking work
    drop(runtime);
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}
