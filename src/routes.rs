use std::collections::HashSet;

/// The views which can be bound to a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Users,
    Products,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    View(View),
    Redirect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub binding: Binding,
}

impl Route {
    pub fn view(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            binding: Binding::View(view),
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            binding: Binding::Redirect(to.into()),
        }
    }
}

/// The route table of the application.
pub fn routes() -> Vec<Route> {
    vec![
        Route::redirect("/", "/users"),
        Route::view("/users", View::Users),
        Route::view("/products", View::Products),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    Duplicate(String),
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),
    #[error("redirect from {from} targets unknown path {to}")]
    UnknownRedirectTarget { from: String, to: String },
    #[error("redirect loop starting at {0}")]
    RedirectLoop(String),
}

/// A route which ended up at a view, after following all redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved<'r> {
    pub path: &'r str,
    pub view: View,
}

/// Matches paths against a validated route table.
///
/// Navigation itself is backed by the browser's push-state history, so all
/// paths are plain URL paths, without a fragment marker. Matching is exact and
/// case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppRouter {
    routes: Vec<Route>,
}

impl AppRouter {
    /// Create a new router for browser history, validating the route table.
    pub fn browser(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath(route.path.clone()));
            }
            if !seen.insert(route.path.as_str()) {
                return Err(RouteError::Duplicate(route.path.clone()));
            }
        }

        for route in &routes {
            if let Binding::Redirect(to) = &route.binding {
                if !seen.contains(to.as_str()) {
                    return Err(RouteError::UnknownRedirectTarget {
                        from: route.path.clone(),
                        to: to.clone(),
                    });
                }
            }
        }

        let router = Self { routes };

        for route in &router.routes {
            router.follow(&route.path)?;
        }

        Ok(router)
    }

    pub fn matches(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Resolve a path to its view, following redirects.
    pub fn resolve(&self, path: &str) -> Option<Resolved<'_>> {
        // cycles are rejected when building the router
        self.follow(path).ok().flatten()
    }

    fn follow(&self, path: &str) -> Result<Option<Resolved<'_>>, RouteError> {
        let mut current = match self.matches(path) {
            Some(route) => route,
            None => return Ok(None),
        };

        // a chain without a cycle visits every route at most once
        for _ in 0..self.routes.len() {
            match &current.binding {
                Binding::View(view) => {
                    return Ok(Some(Resolved {
                        path: &current.path,
                        view: *view,
                    }))
                }
                Binding::Redirect(to) => match self.matches(to) {
                    Some(next) => current = next,
                    None => return Ok(None),
                },
            }
        }

        Err(RouteError::RedirectLoop(path.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn router() -> AppRouter {
        AppRouter::browser(routes()).unwrap()
    }

    #[test]
    fn test_table_order() {
        let paths: Vec<_> = routes().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/", "/users", "/products"]);
    }

    #[test]
    fn test_index_redirects_to_users() {
        let router = router();
        assert_eq!(
            router.matches("/").map(|r| &r.binding),
            Some(&Binding::Redirect("/users".into()))
        );
        assert_eq!(
            router.resolve("/"),
            Some(Resolved {
                path: "/users",
                view: View::Users
            })
        );
    }

    #[test]
    fn test_users() {
        assert_eq!(
            router().resolve("/users"),
            Some(Resolved {
                path: "/users",
                view: View::Users
            })
        );
    }

    #[test]
    fn test_products() {
        assert_eq!(
            router().resolve("/products"),
            Some(Resolved {
                path: "/products",
                view: View::Products
            })
        );
    }

    #[test]
    fn test_unmatched() {
        let router = router();
        for path in ["", "/user", "/users/", "/USERS", "/products/1", "/about", "users"] {
            assert!(router.matches(path).is_none(), "{path} must not match");
            assert!(router.resolve(path).is_none(), "{path} must not resolve");
        }
    }

    #[test]
    fn test_duplicate() {
        let result = AppRouter::browser(vec![
            Route::view("/users", View::Users),
            Route::view("/users", View::Products),
        ]);
        assert_eq!(result, Err(RouteError::Duplicate("/users".into())));
    }

    #[test]
    fn test_relative_path() {
        let result = AppRouter::browser(vec![Route::view("users", View::Users)]);
        assert_eq!(result, Err(RouteError::InvalidPath("users".into())));
    }

    #[test]
    fn test_unknown_redirect_target() {
        let result = AppRouter::browser(vec![
            Route::redirect("/", "/customers"),
            Route::view("/users", View::Users),
        ]);
        assert_eq!(
            result,
            Err(RouteError::UnknownRedirectTarget {
                from: "/".into(),
                to: "/customers".into()
            })
        );
    }

    #[test]
    fn test_redirect_loop() {
        let result = AppRouter::browser(vec![
            Route::redirect("/a", "/b"),
            Route::redirect("/b", "/a"),
            Route::view("/users", View::Users),
        ]);
        assert_eq!(result, Err(RouteError::RedirectLoop("/a".into())));
    }

    #[test]
    fn test_self_redirect() {
        let result = AppRouter::browser(vec![Route::redirect("/", "/")]);
        assert_eq!(result, Err(RouteError::RedirectLoop("/".into())));
    }

    #[test]
    fn test_redirect_chain() {
        let router = AppRouter::browser(vec![
            Route::redirect("/", "/home"),
            Route::redirect("/home", "/products"),
            Route::view("/products", View::Products),
        ])
        .unwrap();

        assert_eq!(
            router.resolve("/"),
            Some(Resolved {
                path: "/products",
                view: View::Products
            })
        );
    }
}
