//! Startup sequence of the application.
//!
//! The sequence is strictly linear: define routes, construct the router,
//! construct the application, attach the router, mount. Every failure is a
//! configuration defect and aborts the startup.

use crate::app::{Application, ApplicationProps};
use crate::routes::{self, AppRouter, RouteError};
use std::rc::Rc;

/// Selector of the page element the application gets mounted on.
pub const MOUNT_SELECTOR: &str = "#app";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    DefineRoutes,
    ConstructRouter,
    ConstructApplication,
    AttachRouter,
    Mount,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StartupError {
    #[error("invalid route table: {0}")]
    Route(#[from] RouteError),
    #[error("a router is already attached to the application")]
    RouterAlreadyAttached,
    #[error("no router attached to the application")]
    RouterNotAttached,
    #[error("mount target '{0}' not found")]
    MountTargetMissing(String),
}

/// The page hosting the application.
pub trait Host {
    type Anchor;
    type Handle;

    fn find_anchor(&self, selector: &str) -> Option<Self::Anchor>;

    fn render(&self, anchor: Self::Anchor, props: ApplicationProps) -> Self::Handle;

    /// Called before each stage of the startup sequence.
    fn stage(&self, _stage: Stage) {}
}

/// The browser page, rendering with yew.
pub struct BrowserHost;

impl Host for BrowserHost {
    type Anchor = web_sys::Element;
    type Handle = yew::AppHandle<Application>;

    fn find_anchor(&self, selector: &str) -> Option<Self::Anchor> {
        gloo_utils::document()
            .query_selector(selector)
            .ok()
            .flatten()
    }

    fn render(&self, anchor: Self::Anchor, props: ApplicationProps) -> Self::Handle {
        yew::Renderer::<Application>::with_root_and_props(anchor, props).render()
    }

    fn stage(&self, stage: Stage) {
        log::debug!("Startup: {stage:?}");
    }
}

/// An application instance, not yet mounted.
#[derive(Debug, Default)]
pub struct Instance {
    router: Option<Rc<AppRouter>>,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, router: Rc<AppRouter>) -> Result<(), StartupError> {
        if self.router.is_some() {
            return Err(StartupError::RouterAlreadyAttached);
        }
        self.router = Some(router);
        Ok(())
    }

    /// Mount the instance, consuming it.
    pub fn mount<H: Host>(self, host: &H, selector: &str) -> Result<H::Handle, StartupError> {
        let router = self.router.ok_or(StartupError::RouterNotAttached)?;
        let anchor = host
            .find_anchor(selector)
            .ok_or_else(|| StartupError::MountTargetMissing(selector.to_string()))?;

        Ok(host.render(anchor, ApplicationProps { router }))
    }
}

/// Run the startup sequence on a host.
pub fn start<H: Host>(host: &H) -> Result<H::Handle, StartupError> {
    host.stage(Stage::DefineRoutes);
    let routes = routes::routes();

    host.stage(Stage::ConstructRouter);
    let router = Rc::new(AppRouter::browser(routes)?);

    host.stage(Stage::ConstructApplication);
    let mut app = Instance::new();

    host.stage(Stage::AttachRouter);
    app.attach(router)?;

    host.stage(Stage::Mount);
    app.mount(host, MOUNT_SELECTOR)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::{Route, View};
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Event {
        Stage(Stage),
        Lookup(String),
        Render(Rc<AppRouter>),
    }

    #[derive(Default)]
    struct RecordingHost {
        anchor: bool,
        events: RefCell<Vec<Event>>,
    }

    impl RecordingHost {
        fn with_anchor() -> Self {
            Self {
                anchor: true,
                ..Default::default()
            }
        }

        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }
    }

    impl Host for RecordingHost {
        type Anchor = ();
        type Handle = Rc<AppRouter>;

        fn find_anchor(&self, selector: &str) -> Option<()> {
            self.events
                .borrow_mut()
                .push(Event::Lookup(selector.to_string()));
            self.anchor.then_some(())
        }

        fn render(&self, _anchor: (), props: ApplicationProps) -> Rc<AppRouter> {
            self.events
                .borrow_mut()
                .push(Event::Render(props.router.clone()));
            props.router
        }

        fn stage(&self, stage: Stage) {
            self.events.borrow_mut().push(Event::Stage(stage));
        }
    }

    #[test]
    fn test_start() {
        let host = RecordingHost::with_anchor();
        let router = start(&host).unwrap();

        assert_eq!(
            router.resolve("/").map(|r| r.view),
            Some(View::Users)
        );

        assert_eq!(
            host.events(),
            vec![
                Event::Stage(Stage::DefineRoutes),
                Event::Stage(Stage::ConstructRouter),
                Event::Stage(Stage::ConstructApplication),
                Event::Stage(Stage::AttachRouter),
                Event::Stage(Stage::Mount),
                Event::Lookup("#app".into()),
                Event::Render(router.clone()),
            ]
        );
    }

    #[test]
    fn test_router_shared_once() {
        let host = RecordingHost::with_anchor();
        let router = start(&host).unwrap();
        let events = host.events();

        let constructed = events
            .iter()
            .filter(|e| **e == Event::Stage(Stage::ConstructRouter))
            .count();
        assert_eq!(constructed, 1);

        let rendered = events
            .iter()
            .filter_map(|e| match e {
                Event::Render(rendered) => Some(rendered),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(rendered.len(), 1);
        assert!(Rc::ptr_eq(rendered[0], &router));
    }

    #[test]
    fn test_missing_anchor() {
        let host = RecordingHost::default();
        let result = start(&host);

        assert_eq!(
            result,
            Err(StartupError::MountTargetMissing("#app".into()))
        );
        assert!(!host
            .events()
            .iter()
            .any(|e| matches!(e, Event::Render(_))));
    }

    #[test]
    fn test_mount_without_router() {
        let host = RecordingHost::with_anchor();
        let result = Instance::new().mount(&host, MOUNT_SELECTOR);

        assert_eq!(result, Err(StartupError::RouterNotAttached));
        assert!(host.events().is_empty());
    }

    #[test]
    fn test_attach_twice() {
        let router = Rc::new(AppRouter::browser(routes::routes()).unwrap());
        let mut app = Instance::new();

        assert_eq!(app.attach(router.clone()), Ok(()));
        assert_eq!(
            app.attach(router),
            Err(StartupError::RouterAlreadyAttached)
        );
    }

    #[test]
    fn test_invalid_routes_fail_before_mount() {
        let err = AppRouter::browser(vec![
            Route::view("/users", View::Users),
            Route::view("/users", View::Users),
        ])
        .map_err(StartupError::from)
        .unwrap_err();

        assert_eq!(
            err,
            StartupError::Route(RouteError::Duplicate("/users".into()))
        );
        assert_eq!(
            err.to_string(),
            "invalid route table: duplicate route path: /users"
        );
    }
}
