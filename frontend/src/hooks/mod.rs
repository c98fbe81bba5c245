pub mod use_login;
pub mod use_route;
pub mod use_viewport;
