//! Client-side routes

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Upload,
    Results,
    About,
}

impl Route {
    /// Navigation bar order
    pub const ALL: [Route; 4] = [Route::Home, Route::Upload, Route::Results, Route::About];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Upload => "/upload",
            Route::Results => "/results",
            Route::About => "/about",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Upload => "Upload",
            Route::Results => "Results",
            Route::About => "About",
        }
    }

    /// Exact match on the pathname; a trailing slash is tolerated
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL.into_iter().find(|r| r.path() == trimmed)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_lookup() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/results/"), Some(Route::Results));
        assert_eq!(Route::from_path("/upload/extra"), None);
    }
}
