//! Appraisal Core - progress and permissions for performance reviews
//!
//! The single entry point for host applications:
//! - Rolls task completion up through goals and objectives
//! - Resolves which actions a caller may take on an entity
//! - Validates lifecycle status changes
//! - Loads its behaviour switches from TOML
//!
//! # Example
//!
//! ```rust
//! use appraisal_core::prelude::*;
//!
//! # fn example() -> appraisal_core::Result<()> {
//! let config = EngineConfig::from_toml_str("weighted_rollups = true")?;
//! let engine = ReviewEngine::new(config);
//!
//! let goals = vec![Goal::new("g1", StatusType::Completed).with_weight(2.0)];
//! assert_eq!(engine.goal_progress(&goals).percentage, 100.0);
//!
//! let ctx = PermissionContext::new(Role::Manager, "m1");
//! assert!(engine.permissions(&ctx, &goals[0]).can_assign);
//!
//! engine.transition(StatusType::InProgress, StatusType::Completed)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod engine;
pub mod error;

pub use config::EngineConfig;
pub use engine::{EntityRef, ReviewEngine};
pub use error::{ConfigError, EngineError, Result};

pub use appraisal_authz as authz;
pub use appraisal_model as model;
pub use appraisal_progress as progress;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the appraisal engine
    pub use crate::{EngineConfig, EngineError, EntityRef, ReviewEngine};
    pub use appraisal_authz::{PermissionCheck, ReviewType, StatusAction};
    pub use appraisal_model::{
        EntityPermissions, Feedback, Goal, Objective, PermissionContext, ProgressData, Role,
        StatusType, Task,
    };
    pub use appraisal_progress::{ProgressSnapshot, ProgressStatus, ProgressTrend, TrendDirection};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
