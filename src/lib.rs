//! # stagetime
//!
//! Stage-level wall-clock accounting for pipeline instrumentation.
//!
//! A pipeline declares a fixed, ordered set of named stages once, then
//! brackets its work with scope guards or explicit switch calls. Each
//! context (one worker, one frame, one unit of work) owns its own clock;
//! independently measured clocks are merged at a join point and rendered
//! as a per-stage time/percentage table.
//!
//! ## Features
//!
//! - Commit-on-switch accumulation against a monotonic checkpoint
//! - Stack-free RAII nesting: guards restore the previous stage on every
//!   exit path, including early returns and panics
//! - Bucketed variant: per-stage totals broken down by an (x, y, z)
//!   coordinate (e.g. block position plus a slice index)
//! - Element-wise merge for combining per-worker clocks
//! - Build-time variant selection (disabled / single-dimension /
//!   bucketed) behind one capability interface, so instrumented call
//!   sites compile unchanged
//!
//! ## Quick Start
//!
//! ```rust
//! use stagetime::{stages, StageClock, StageGuard};
//!
//! stages! {
//!     pub enum DecodeStage {
//!         Parse => "parse",
//!         Transform => "inverse transform",
//!         Filter => "loop filter",
//!     }
//! }
//!
//! let clock = StageClock::<DecodeStage>::new();
//! clock.start(DecodeStage::Parse);
//! {
//!     let _scope = StageGuard::new(&clock, DecodeStage::Transform);
//!     // ... transform work, attributed to Transform ...
//! } // Parse is current again here
//! clock.stop(DecodeStage::Parse);
//! println!("{}", clock.report());
//! ```

pub mod api;

mod macros;
mod util;

// Re-export public API at crate root for convenience
pub use api::aggregate::ClockAggregator;
pub use api::clock::StageClock;
pub use api::grid::{BucketedStageClock, StageGrid};
pub use api::layout::{bucket_coords, BucketLayout};
pub use api::report::{ReportRow, StageReport};
pub use api::scope::{StageGuard, StageGuard2D};
pub use api::stage::Stage;
pub use api::variant::{ActiveClock, NoopClock, StageAccounting};
