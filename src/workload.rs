//! Synthetic workloads behind the simulation endpoints.
//!
//! Every random draw takes the generator as a parameter so tests can
//! use a seeded `StdRng` while handlers use `thread_rng`.

use axum::http::StatusCode;
use rand::Rng;
use std::time::Duration;

/// Discrete distribution for `/random_status`. 200 appears twice on purpose.
pub const STATUS_TABLE: [StatusCode; 5] = [
    StatusCode::OK,
    StatusCode::OK,
    StatusCode::MULTIPLE_CHOICES,
    StatusCode::BAD_REQUEST,
    StatusCode::INTERNAL_SERVER_ERROR,
];

/// Upper bound (inclusive) of `/random_sleep`, in whole seconds.
pub const MAX_SLEEP_SECS: u64 = 5;

/// Fixed wait of `/io_task`.
pub const IO_DELAY: Duration = Duration::from_secs(1);

/// Iterations of the `/cpu_task` loop.
pub const CPU_ITERATIONS: u64 = 1000;

/// Pick a status by indexing [`STATUS_TABLE`] with a uniform draw.
pub fn pick_status<R: Rng + ?Sized>(rng: &mut R) -> StatusCode {
    STATUS_TABLE[rng.gen_range(0..STATUS_TABLE.len())]
}

/// Uniform whole-second delay in `0..=MAX_SLEEP_SECS`.
pub fn pick_sleep<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_secs(rng.gen_range(0..=MAX_SLEEP_SECS))
}

/// Cube every integer below [`CPU_ITERATIONS`] and throw the results away.
pub fn burn_cpu() {
    for i in 0..CPU_ITERATIONS {
        std::hint::black_box(i * i * i);
    }
}
