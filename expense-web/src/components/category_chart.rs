use shared::models::CategoryTotal;
use yew::prelude::*;

const BAR_COLOURS: [&str; 4] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0"];

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub totals: Vec<CategoryTotal>,
}

/// Share of spending per category as horizontal bars.
#[function_component(CategoryChart)]
pub fn category_chart(props: &CategoryChartProps) -> Html {
    if props.totals.is_empty() {
        return html! { <p class="text-base-content/60">{"No spending recorded for these filters."}</p> };
    }

    let shares = CategoryTotal::shares(&props.totals);

    html! {
        <ul class="space-y-3">
            { for props.totals.iter().zip(shares).enumerate().map(|(index, (row, share))| {
                let colour = BAR_COLOURS[index % BAR_COLOURS.len()];
                html! {
                    <li key={row.category.as_str()}>
                        <div class="flex justify-between text-sm">
                            <span>{ row.category.label() }</span>
                            <span>{ format!("₹{} ({share:.1}%)", row.total_amount) }</span>
                        </div>
                        <div class="w-full bg-base-300 rounded h-3">
                            <div
                                class="h-3 rounded"
                                style={format!("width: {share:.1}%; background-color: {colour};")}
                            ></div>
                        </div>
                    </li>
                }
            }) }
        </ul>
    }
}
