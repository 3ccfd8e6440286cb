//! Process exit codes.
//!
//! | Code | Constant | Meaning |
//! |------|----------|---------|
//! | 0 | `SUCCESS` | Command completed, including empty results and a declined next page |
//! | 1 | `ERROR` | Configuration, transport, HTTP status or decode failure |

/// Command completed normally.
pub const SUCCESS: i32 = 0;

/// Any failure. Nothing is retried; the operator re-runs the command.
pub const ERROR: i32 = 1;
