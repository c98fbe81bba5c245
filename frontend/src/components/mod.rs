pub mod forms;
pub mod modal;
pub mod profile_edit;
pub mod recaptcha;
