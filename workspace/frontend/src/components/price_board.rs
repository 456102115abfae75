use common::PriceBoard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub board: PriceBoard,
}

#[derive(Properties, PartialEq)]
struct ModelRowProps {
    id: AttrValue,
    label: AttrValue,
    value: Option<String>,
}

#[function_component(ModelRow)]
fn model_row(props: &ModelRowProps) -> Html {
    html! {
        <div class="flex justify-between py-1">
            <span class="text-sm text-gray-500">{&props.label}</span>
            <span id={props.id.clone()} class="font-semibold">
                {props.value.clone().unwrap_or_else(|| "-".to_string())}
            </span>
        </div>
    }
}

/// Headline estimate, per-model sub-estimates and the model accuracy badge.
#[function_component(PriceBoardView)]
pub fn price_board_view(props: &Props) -> Html {
    let board = &props.board;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title text-lg">{"Tahmini Kira"}</h3>
                    <span id="successRate" class="badge badge-success">
                        {board.success_rate.clone().unwrap_or_default()}
                    </span>
                </div>
                <div class="text-4xl font-bold text-primary">
                    <span id="predictedPrice">
                        {board.predicted_price.clone().unwrap_or_else(|| "0".to_string())}
                    </span>
                    {" TL"}
                </div>
                <div class="divider my-2"></div>
                <ModelRow id="xgbPrice" label="XGBoost" value={board.xgb_price.clone()} />
                <ModelRow id="catPrice" label="CatBoost" value={board.cat_price.clone()} />
                <ModelRow id="rfPrice" label="Random Forest" value={board.rf_price.clone()} />
            </div>
        </div>
    }
}
