pub mod credentials_form;
