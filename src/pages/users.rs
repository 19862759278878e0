use crate::api::{create_user, delete_user, fetch_users};
use crate::model::{format_timestamp, NewUser, User};
use crate::utils::use_text_input;
use patternfly_yew::{next::TextInput, prelude::*};
use yew::prelude::*;
use yew_hooks::{use_async, use_async_with_options, UseAsyncOptions, UseAsyncState};

#[function_component(Users)]
pub fn users() -> Html {
    let state = use_async_with_options(fetch_users(), UseAsyncOptions::enable_auto());
    let (query, on_query) = use_text_input();

    // create

    let (username, on_username) = use_text_input();
    let (email, on_email) = use_text_input();
    let (first_name, on_first_name) = use_text_input();
    let (last_name, on_last_name) = use_text_input();

    let new_user = NewUser::from_input(&username, &email, &first_name, &last_name);

    let create = {
        let new_user = new_user.clone();
        use_async(async move { create_user(&new_user?).await })
    };

    let on_create = {
        let create = create.clone();
        Callback::from(move |_| {
            create.run();
        })
    };

    // delete

    let deleting = use_state_eq(|| None::<String>);
    let delete = {
        let id = (*deleting).clone();
        use_async(async move {
            match id {
                Some(id) => delete_user(id).await,
                None => Err("No user selected".to_string()),
            }
        })
    };

    {
        let delete = delete.clone();
        use_effect_with_deps(
            move |id| {
                if id.is_some() {
                    delete.run();
                }
            },
            (*deleting).clone(),
        );
    }

    let on_delete = {
        let deleting = deleting.clone();
        Callback::from(move |id: String| deleting.set(Some(id)))
    };

    // reload after changes

    {
        let state = state.clone();
        let inputs = [
            username.clone(),
            email.clone(),
            first_name.clone(),
            last_name.clone(),
        ];
        use_effect_with_deps(
            move |(created, deleted)| {
                if created.is_some() {
                    for input in inputs {
                        input.set(String::new());
                    }
                }
                if created.is_some() || deleted.is_some() {
                    state.run();
                }
            },
            (create.data.clone(), delete.data.clone()),
        );
    }

    // render

    let main = match &*state {
        UseAsyncState { loading: true, .. } => html!({ "Loading..." }),
        UseAsyncState {
            error: Some(error), ..
        } => html!(<> {"Failed: "} {error} </>),
        UseAsyncState {
            data: Some(users), ..
        } => {
            let users = users
                .iter()
                .filter(|user| user.matches(&query))
                .cloned()
                .collect::<Vec<_>>();
            html!(<UserTable {users} {on_delete}/>)
        }
        _ => html!(),
    };

    let change_error = match (&create.error, &delete.error) {
        (Some(err), _) => Some(format!("Failed to create user: {err}")),
        (_, Some(err)) => Some(format!("Failed to delete user: {err}")),
        _ => None,
    };

    html!(
        <>
        <PageSection variant={PageSectionVariant::Light}>
            <Title>
                <Content> { "Users" } </Content>
            </Title>
        </PageSection>
        <PageSection variant={PageSectionVariant::Light}>
            <Title level={Level::H2}> { "Add user" } </Title>
            <Form>
                <FormGroup label="Username" required=true>
                    <TextInput onchange={on_username} value={(*username).clone()} required=true/>
                </FormGroup>
                <FormGroup label="Email" required=true>
                    <TextInput onchange={on_email} value={(*email).clone()} required=true/>
                </FormGroup>
                <FormGroup label="First Name">
                    <TextInput onchange={on_first_name} value={(*first_name).clone()}/>
                </FormGroup>
                <FormGroup label="Last Name">
                    <TextInput onchange={on_last_name} value={(*last_name).clone()}/>
                </FormGroup>
            </Form>
            <Toolbar>
                <ToolbarItem>
                    <Button label="Add" variant={ButtonVariant::Primary}
                        disabled={create.loading || new_user.is_err()}
                        onclick={on_create}
                    />
                </ToolbarItem>
            </Toolbar>
            if let Some(err) = change_error {
                <Content><p>{ err }</p></Content>
            }
        </PageSection>
        <PageSection variant={PageSectionVariant::Light} fill=true>
            <Toolbar>
                <ToolbarItem>
                    <TextInput onchange={on_query} value={(*query).clone()} placeholder="Filter by name or email"/>
                </ToolbarItem>
            </Toolbar>
            { main }
        </PageSection>
        </>
    )
}

#[derive(Clone, PartialEq)]
struct UserEntry {
    user: User,
    on_delete: Callback<String>,
}

impl TableEntryRenderer for UserEntry {
    fn render_cell(&self, context: &CellContext) -> Cell {
        match context.column {
            0 => html!(&self.user.username),
            1 => html!(&self.user.email),
            2 => html!(self.user.first_name.clone().unwrap_or_default()),
            3 => html!(self.user.last_name.clone().unwrap_or_default()),
            4 => html!(format_timestamp(&self.user.created_at)),
            5 => match &self.user.id {
                Some(id) => {
                    let onclick = {
                        let id = id.clone();
                        self.on_delete.reform(move |_| id.clone())
                    };
                    html!(<Button label="Delete" variant={ButtonVariant::Secondary} {onclick}/>)
                }
                None => html!(),
            },
            _ => html!(),
        }
        .into()
    }
}

#[derive(Clone, PartialEq, Properties)]
struct UserTableProps {
    users: Vec<User>,
    on_delete: Callback<String>,
}

#[function_component(UserTable)]
fn user_table(props: &UserTableProps) -> Html {
    if props.users.is_empty() {
        return html!({ "No users found" });
    }

    let header = html_nested! {
        <TableHeader>
            <TableColumn label="Username"/>
            <TableColumn label="Email"/>
            <TableColumn label="First Name"/>
            <TableColumn label="Last Name"/>
            <TableColumn label="Created"/>
            <TableColumn label="Actions"/>
        </TableHeader>
    };

    let entries = SharedTableModel::new(
        props
            .users
            .iter()
            .cloned()
            .map(|user| UserEntry {
                user,
                on_delete: props.on_delete.clone(),
            })
            .collect(),
    );

    html!(
        <Table<SharedTableModel<UserEntry>> {header} {entries} mode={TableMode::Compact}/>
    )
}
