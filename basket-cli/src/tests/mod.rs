//! Shared test harness modules for the basket splitter CLI.

use super::*;

mod helpers;
