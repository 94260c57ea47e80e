pub mod courts;
pub mod create_group;
pub mod home;
pub mod live_updates;
pub mod login;
pub mod not_found;
pub mod sent_invitations;

pub use courts::CourtsPage;
pub use create_group::CreateGroupPage;
pub use home::HomePage;
pub use live_updates::LiveUpdatesPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use sent_invitations::SentInvitationsPage;
