use crate::api::fetch_products;
use crate::model::{format_price, Product};
use crate::utils::use_text_input;
use patternfly_yew::{next::TextInput, prelude::*};
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions, UseAsyncState};

#[function_component(Products)]
pub fn products() -> Html {
    let state = use_async_with_options(fetch_products(), UseAsyncOptions::enable_auto());
    let (query, onchange) = use_text_input();

    let main = match &*state {
        UseAsyncState { loading: true, .. } => html!({ "Loading..." }),
        UseAsyncState {
            error: Some(error), ..
        } => html!(<> {"Failed: "} {error} </>),
        UseAsyncState {
            data: Some(products),
            ..
        } => {
            let products = products
                .iter()
                .filter(|product| product.matches(&query))
                .cloned()
                .collect::<Vec<_>>();
            html!(<ProductTable {products}/>)
        }
        _ => html!(),
    };

    html!(
        <>
        <PageSection variant={PageSectionVariant::Light}>
            <Title>
                <Content> { "Products" } </Content>
            </Title>
        </PageSection>
        <PageSection variant={PageSectionVariant::Light} fill=true>
            <Toolbar>
                <ToolbarItem>
                    <TextInput {onchange} value={(*query).clone()} placeholder="Search products"/>
                </ToolbarItem>
            </Toolbar>
            { main }
        </PageSection>
        </>
    )
}

#[derive(Clone, PartialEq)]
struct ProductEntry(Product);

impl TableEntryRenderer for ProductEntry {
    fn render_cell(&self, context: &CellContext) -> Cell {
        match context.column {
            0 => html!(&self.0.name),
            1 => html!(self.0.description.clone().unwrap_or_default()),
            2 => html!(format_price(self.0.price)),
            3 => {
                if self.0.in_stock() {
                    html!(self.0.stock.to_string())
                } else {
                    html!(<Label label={"Out of stock"} color={Color::Orange} compact=true/>)
                }
            }
            _ => html!(),
        }
        .into()
    }
}

#[derive(Clone, PartialEq, Properties)]
struct ProductTableProps {
    products: Vec<Product>,
}

#[function_component(ProductTable)]
fn product_table(props: &ProductTableProps) -> Html {
    if props.products.is_empty() {
        return html!({ "No products found" });
    }

    let header = html_nested! {
        <TableHeader>
            <TableColumn label="Name"/>
            <TableColumn label="Description"/>
            <TableColumn label="Price"/>
            <TableColumn label="Stock"/>
        </TableHeader>
    };

    let entries = SharedTableModel::new(
        props
            .products
            .iter()
            .cloned()
            .map(ProductEntry)
            .collect(),
    );

    html!(
        <Table<SharedTableModel<ProductEntry>> {header} {entries} mode={TableMode::Compact}/>
    )
}
