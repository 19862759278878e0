use crate::{
    pages::{self, AppRoute},
    routes::{AppRouter, View},
};
use gloo_history::{BrowserHistory, History};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use yew::prelude::*;
use yew_nested_router::prelude::{Router, Switch as RouterSwitch};

#[function_component(Console)]
pub fn console() -> Html {
    let logo = html!(
        <span class="app-brand">{ "Shop Admin" }</span>
    );

    let sidebar = html_nested!(
        <PageSidebar>
            <Nav>
                <NavList>
                    <NavRouterItem<AppRoute> to={AppRoute::Users}>{ "Users" }</NavRouterItem<AppRoute>>
                    <NavRouterItem<AppRoute> to={AppRoute::Products}>{ "Products" }</NavRouterItem<AppRoute>>
                </NavList>
            </Nav>
        </PageSidebar>
    );

    html!(
        <Router<AppRoute>>
            <Page {logo} {sidebar}>
                <RouterSwitch<AppRoute> {render}/>
            </Page>
        </Router<AppRoute>>
    )
}

fn render(route: AppRoute) -> Html {
    log::info!("Route: {route:?}");
    html!(<RouteView {route}/>)
}

#[derive(Clone, Debug, PartialEq, Eq, Properties)]
struct RouteViewProps {
    route: AppRoute,
}

/// What to show for a route.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Activation {
    View(View),
    Redirect(AppRoute),
    Nothing,
}

fn activation(router: &AppRouter, route: &AppRoute) -> Activation {
    let path = route.path();
    match router.resolve(path) {
        Some(resolved) if resolved.path == path => Activation::View(resolved.view),
        Some(resolved) => match AppRoute::from_path(resolved.path) {
            Some(to) => Activation::Redirect(to),
            None => {
                log::error!("Redirect target has no route: {}", resolved.path);
                Activation::Nothing
            }
        },
        None => {
            log::warn!("No route matches: {path}");
            Activation::Nothing
        }
    }
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let router = use_context::<Rc<AppRouter>>();

    let Some(router) = router else {
        log::error!("No router attached to the application");
        return html!();
    };

    match activation(&router, &props.route) {
        Activation::View(View::Users) => html!(<pages::Users/>),
        Activation::View(View::Products) => html!(<pages::Products/>),
        Activation::Redirect(to) => html!(<Redirect {to}/>),
        Activation::Nothing => html!(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Properties)]
struct RedirectProps {
    to: AppRoute,
}

/// Replace the current history entry with the target.
fn redirect_to(history: &impl History, to: &AppRoute) {
    history.replace(to.path());
}

/// The router only offers `push`, which would leave the redirecting entry
/// behind. The browser history is a shared instance, so the router picks up
/// the replaced location.
#[function_component(Redirect)]
fn redirect(props: &RedirectProps) -> Html {
    use_effect_with_deps(
        move |to: &AppRoute| {
            log::info!("Redirecting to: {to:?}");
            redirect_to(&BrowserHistory::new(), to);
        },
        props.to.clone(),
    );

    html!()
}
