//! Appraisal Model
//!
//! Plain records shared by the progress aggregator and the authorization
//! resolver:
//! - Lifecycle statuses (`StatusType`)
//! - The objective → goal → task hierarchy
//! - Feedback records
//! - Progress summaries (`ProgressData`)
//! - Roles, permission contexts and permission records
//!
//! Every type here is a transient value supplied by the caller. Nothing in
//! this crate holds state between calls.
//!
//! # Example
//!
//! ```rust
//! use appraisal_model::{Goal, Scoring, StatusType, Task};
//!
//! let goal = Goal::new("g1", StatusType::InProgress)
//!     .with_tasks(vec![Task::new("t1", StatusType::Completed)]);
//!
//! match goal.scoring() {
//!     Scoring::Children(tasks) => assert_eq!(tasks.len(), 1),
//!     Scoring::OwnStatus(_) => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod access;
pub mod entity;
pub mod error;
pub mod progress;
pub mod status;

pub use access::{EntityPermissions, PermissionContext, Role};
pub use entity::{EntityId, Feedback, Goal, Objective, Scoring, Statused, Task, UserId, Weighted};
pub use error::ModelError;
pub use progress::ProgressData;
pub use status::StatusType;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
