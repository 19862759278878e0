use crate::console::Console;
use crate::routes::AppRouter;
use patternfly_yew::*;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct ApplicationProps {
    pub router: Rc<AppRouter>,
}

#[function_component(Application)]
pub fn app(props: &ApplicationProps) -> Html {
    html!(
        <ContextProvider<Rc<AppRouter>> context={props.router.clone()}>
            <ToastViewer>
                <BackdropViewer>
                    <Console />
                </BackdropViewer>
            </ToastViewer>
        </ContextProvider<Rc<AppRouter>>>
    )
}
