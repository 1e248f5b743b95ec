use status_test_support::configuration::{Settings, get_configuration};
use status_test_support::fixtures::UNIQUE_PASSWORD;
use status_test_support::startup::build_runtime;
use status_test_support::telemetry::{get_subscriber, init_subscriber};
use std::sync::LazyLock;
use tokio::runtime::Runtime;

static CONFIGURATION: LazyLock<Settings> =
    LazyLock::new(|| get_configuration().expect("Failed to read configuration."));

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let subscriber_name = CONFIGURATION.application.name.clone();
    let log_level = CONFIGURATION.application.log_level.clone();
    // The sink is part of the type returned by `get_subscriber`,
    // hence the two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, log_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, log_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// A runtime sized from `configuration/`, with tracing initialised.
///
/// Also pins the process-wide unique password to the start of the run.
pub fn spawn_runtime() -> Runtime {
    LazyLock::force(&UNIQUE_PASSWORD);
    LazyLock::force(&TRACING);

    build_runtime(&CONFIGURATION.runtime).expect("Failed to build runtime.")
}
