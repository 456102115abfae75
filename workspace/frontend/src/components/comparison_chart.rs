use common::{BAR_COLORS, CATEGORY_LABELS, DATASET_LABEL};
use plotly::common::Marker;
use plotly::layout::{Axis, Layout, RangeMode};
use plotly::Bar;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn react(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

pub const CHART_ID: &str = "comparisonChart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub values: [f64; 3],
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("Failed to serialize chart: {}", e))
}

fn figure(values: &[f64; 3]) -> Result<(JsValue, JsValue, JsValue), String> {
    let trace = Bar::new(CATEGORY_LABELS.to_vec(), values.to_vec())
        .name(DATASET_LABEL)
        .marker(Marker::new().color_array(BAR_COLORS.iter().map(|c| c.to_string()).collect()));

    let layout = Layout::new()
        .show_legend(false)
        .y_axis(Axis::new().range_mode(RangeMode::ToZero));

    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    Ok((to_js(&vec![trace])?, to_js(&layout)?, to_js(&config)?))
}

/// Bar chart comparing the predicted price with the district and
/// neighborhood bars. Drawn once with zeros on mount, redrawn on every change.
#[function_component(ComparisonChart)]
pub fn comparison_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();
    let drawn = use_mut_ref(|| false);

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.values, move |values| {
            if chart_ref.cast::<HtmlElement>().is_none() {
                log::error!("Chart surface '{}' is missing, comparison chart not drawn", CHART_ID);
            } else {
                match figure(values) {
                    Ok((data, layout, config)) => {
                        if *drawn.borrow() {
                            react(CHART_ID, data, layout, config);
                            log::debug!("Comparison chart redrawn: {:?}", values);
                        } else {
                            new_plot(CHART_ID, data, layout, config);
                            *drawn.borrow_mut() = true;
                            log::info!("Comparison chart initialized");
                        }
                    }
                    Err(e) => log::error!("{}", e),
                }
            }
            || ()
        });
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Fiyat Karşılaştırması"}</h3>
                <div ref={chart_ref} id={CHART_ID} style="width:100%; height:300px;"></div>
                <p class="text-xs text-gray-500">
                    {"İlçe ve mahalle ortalamaları tahmin etrafında simüle edilmiştir, gerçek istatistik değildir."}
                </p>
            </div>
        </div>
    }
}
