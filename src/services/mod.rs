// Services - collaborators of the report run
//
// Traits the runner depends on, the clock, and their implementations
// (AWS SDK adapters and a local filesystem store).

pub mod aws;
pub mod clock;
pub mod local;
pub mod traits;

pub use clock::{Clock, FixedClock, SystemClock};
pub use local::LocalArtifactStore;
pub use traits::{ArtifactStore, CertificateService, IdentityService, NotificationChannel};
