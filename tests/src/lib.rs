#[macro_use]
mod macros;


pub use db_test::DbTest;

mod exec_log;
pub use exec_log::ExecLog;

pub mod fixtures;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

pub mod prelude;

pub use setup::Setup;

mod stale_read_driver;
pub use stale_read_driver::{StaleReadDriver, StaleReads};

use std::sync::Once;

/// Installs a `tracing` subscriber honouring `RUST_LOG`, once per process.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Drives a test future to completion on a fresh current-thread runtime.
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime")
        .block_on(future)
}

pub use pretty_assertions;
