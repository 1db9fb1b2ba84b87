//! Shared test harness modules for the getaway CLI.

mod helpers;
