//! AWS adapters
//!
//! SDK-backed implementations of the collaborator traits. All clients share
//! one SDK configuration so the region is applied consistently.

mod acm;
mod client;
mod s3;
mod sns;
mod sts;

pub use acm::AcmCertificateService;
pub use client::{AwsServices, load_sdk_config};
pub use s3::S3ArtifactStore;
pub use sns::SnsNotificationChannel;
pub use sts::StsIdentityService;
