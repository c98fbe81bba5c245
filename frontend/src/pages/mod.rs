pub mod home;
pub mod login;
pub mod profile_edit;
pub mod profile_view;
