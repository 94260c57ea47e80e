pub mod header;
pub mod require_auth;
pub mod status_banner;

pub use header::Header;
pub use require_auth::RequireAuth;
pub use status_banner::MutationStatus;
