pub mod use_authentication;
pub mod use_bookings;
pub mod use_courts;
pub mod use_devices;
pub mod use_groups;
pub mod use_login;
pub mod use_logout;
pub mod use_mutation;
pub mod use_notifications;
pub mod use_player_finder;
pub mod use_polling_resource;
pub mod use_resource;
pub mod use_title;

pub use use_authentication::{use_authentication, use_require_auth};
pub use use_bookings::{
    use_cancel_booking, use_live_bookings, use_user_bookings,
};
pub use use_courts::use_club_courts;
pub use use_devices::{use_add_device, use_club_devices, use_delete_device};
pub use use_groups::{use_create_group, use_groups, use_registered_players};
pub use use_login::use_login;
pub use use_logout::use_logout;
pub use use_mutation::{MutationCallbacks, MutationHookReturn, use_mutation};
pub use use_notifications::{use_mark_notifications_read, use_unread_count};
pub use use_player_finder::{
    use_filtered_and_sorted_invites, use_grouped_invites, use_sent_invitations,
    use_withdraw_request,
};
pub use use_polling_resource::use_polling_resource;
pub use use_resource::{ResourceHookReturn, use_resource};
pub use use_title::use_title;
