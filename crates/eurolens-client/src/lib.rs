//! HTTP clients for the remote classification service.
//!
//! [`AnalysisClient`] sends image or text analysis requests and decodes the
//! typed [`eurolens_core::AnalysisResult`]; [`FeedbackClient`] submits user
//! corrections tied to a prior result. Both surface every failure as one
//! member of the closed [`ClientError`] taxonomy and never retry internally;
//! callers decide whether a call is worth repeating.

pub mod analysis;
pub mod error;
pub mod feedback;
pub mod location;
pub mod types;

pub use analysis::AnalysisClient;
pub use error::ClientError;
pub use feedback::{FeedbackClient, FeedbackRecord};
pub use location::{LocationProvider, StaticLocation};
pub use types::UserLocation;
