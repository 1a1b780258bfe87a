pub mod digest_service;
pub mod email_service;
pub mod scheduler;
pub mod summary_service;

pub use digest_service::{DigestRun, DigestService};
pub use email_service::EmailService;
pub use summary_service::build_summary;
