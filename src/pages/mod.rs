use yew_nested_router::Target;

mod products;
mod users;

pub use products::*;
pub use users::*;

#[derive(Clone, Debug, PartialEq, Eq, Target)]
pub enum AppRoute {
    #[target(index)]
    Index,
    Users,
    Products,
}

impl AppRoute {
    const ALL: [AppRoute; 3] = [AppRoute::Index, AppRoute::Users, AppRoute::Products];

    /// The path of the route, as used in the route table.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Users => "/users",
            Self::Products => "/products",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::{routes, AppRouter};

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Index));
        assert_eq!(AppRoute::from_path("/users"), Some(AppRoute::Users));
        assert_eq!(AppRoute::from_path("/products"), Some(AppRoute::Products));
        assert_eq!(AppRoute::from_path("/orders"), None);
    }

    #[test]
    fn test_routes_and_table_agree() {
        let router = AppRouter::browser(routes()).unwrap();

        for route in AppRoute::ALL {
            assert!(
                router.matches(route.path()).is_some(),
                "{route:?} is missing from the route table"
            );
        }

        for route in routes() {
            assert!(
                AppRoute::from_path(&route.path).is_some(),
                "{} has no navigation target",
                route.path
            );
        }
    }
}
