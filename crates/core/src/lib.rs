// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod query;
mod registry;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use query::{
    HistoryFilter, PeriodFilter, ShiftFilter, facilities_by_approval, history, list_shifts,
    open_shifts, shifts_for_facility, shifts_for_worker, shifts_in_group, worker_availability,
    workers_by_approval, workers_in_city, years_in,
};
pub use state::{State, Subject, TransitionResult};
