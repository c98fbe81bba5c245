use std::fmt;

/// Client-side routes the app knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page, target of a successful login
    Home,
    Login,
    Signup,
    ProfileEdit,
    ProfileView,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::ProfileEdit => "/userProfile/profileEdit",
            Route::ProfileView => "/userProfile/profileView",
            Route::NotFound => "/404",
        }
    }

    /// Resolve a location path. Query strings, fragments and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/userProfile/profileEdit" => Route::ProfileEdit,
            "/userProfile/profileView" => Route::ProfileView,
            _ => Route::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
