use std::rc::Rc;

use common::{
    Estimate, FormInput, GENERIC_FAILURE_ALERT, PredictionOutcome, PredictionResponse,
    RequestSequencer, SimulatedAverages,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::comparison_chart::ComparisonChart;
use super::price_board::PriceBoardView;
use crate::alert::blocking_alert;
use crate::api_client::{metadata::get_metadata, prediction::predict};

#[derive(Debug, Default, PartialEq)]
struct EstimateState {
    estimate: Estimate,
}

enum EstimateAction {
    Apply {
        response: PredictionResponse,
        averages: SimulatedAverages,
    },
}

impl Reducible for EstimateState {
    type Action = EstimateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut estimate = self.estimate.clone();
        match action {
            EstimateAction::Apply { response, averages } => estimate.apply(&response, averages),
        }
        Rc::new(Self { estimate })
    }
}

#[derive(Clone)]
struct FormRefs {
    room: NodeRef,
    living_room: NodeRef,
    area: NodeRef,
    floor: NodeRef,
    age: NodeRef,
    district: NodeRef,
    neighborhood: NodeRef,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

impl FormRefs {
    fn read(&self) -> FormInput {
        FormInput {
            room: input_value(&self.room),
            living_room: input_value(&self.living_room),
            area: input_value(&self.area),
            floor: input_value(&self.floor),
            age: input_value(&self.age),
            district: select_value(&self.district),
            neighborhood: select_value(&self.neighborhood),
        }
    }
}

#[derive(Properties, PartialEq)]
struct NumberFieldProps {
    id: AttrValue,
    label: AttrValue,
    node: NodeRef,
}

#[function_component(NumberField)]
fn number_field(props: &NumberFieldProps) -> Html {
    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{&props.label}</span>
            </label>
            <input
                ref={props.node.clone()}
                id={props.id.clone()}
                name={props.id.clone()}
                type="number"
                class="input input-bordered w-full"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SelectFieldProps {
    id: AttrValue,
    label: AttrValue,
    node: NodeRef,
    options: Vec<String>,
}

#[function_component(SelectField)]
fn select_field(props: &SelectFieldProps) -> Html {
    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{&props.label}</span>
            </label>
            <select
                ref={props.node.clone()}
                id={props.id.clone()}
                name={props.id.clone()}
                class="select select-bordered w-full"
            >
                { for props.options.iter().map(|option| html! {
                    <option value={option.clone()}>{option}</option>
                })}
            </select>
        </div>
    }
}

/// The estimator page: property form, result panel and comparison chart.
#[function_component(Estimator)]
pub fn estimator() -> Html {
    let districts = use_state(Vec::<String>::new);
    let neighborhoods = use_state(Vec::<String>::new);
    let estimate = use_reducer(EstimateState::default);
    let in_flight = use_state(|| false);
    let sequencer = use_mut_ref(RequestSequencer::default);
    let refs = FormRefs {
        room: use_node_ref(),
        living_room: use_node_ref(),
        area: use_node_ref(),
        floor: use_node_ref(),
        age: use_node_ref(),
        district: use_node_ref(),
        neighborhood: use_node_ref(),
    };

    // Load metadata once on mount; failures leave the selects empty
    {
        let districts = districts.clone();
        let neighborhoods = neighborhoods.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_metadata().await {
                    Ok(metadata) => {
                        districts.set(metadata.districts().to_vec());
                        neighborhoods.set(metadata.neighborhoods().to_vec());
                    }
                    Err(e) => log::error!("Error loading metadata: {}", e),
                }
            });
            || ()
        });
    }

    let on_submit = {
        let refs = refs.clone();
        let estimate = estimate.clone();
        let in_flight = in_flight.clone();
        let sequencer = sequencer.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = refs.read().to_request();
            let ticket = sequencer.borrow_mut().issue();
            in_flight.set(true);

            let estimate = estimate.clone();
            let in_flight = in_flight.clone();
            let sequencer = sequencer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = predict(&request).await;
                if !sequencer.borrow().is_current(ticket) {
                    return;
                }
                in_flight.set(false);

                match result {
                    Ok(PredictionOutcome::Success(response)) => {
                        let mut sampler = js_sys::Math::random;
                        let averages = SimulatedAverages::around(response.price(), &mut sampler);
                        estimate.dispatch(EstimateAction::Apply { response, averages });
                    }
                    Ok(rejected) => {
                        if let Some(message) = rejected.alert_message() {
                            blocking_alert(&message);
                        }
                    }
                    Err(e) => {
                        log::error!("Error predicting: {}", e);
                        blocking_alert(GENERIC_FAILURE_ALERT);
                    }
                }
            });
        })
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-lg">{"Ev Bilgileri"}</h3>
                    <form id="predictionForm" onsubmit={on_submit} class="space-y-4">
                        <div class="grid grid-cols-2 gap-4">
                            <NumberField id="room" label="Oda Sayısı" node={refs.room.clone()} />
                            <NumberField id="living_room" label="Salon Sayısı" node={refs.living_room.clone()} />
                            <NumberField id="area" label="Alan (m²)" node={refs.area.clone()} />
                            <NumberField id="floor" label="Kat" node={refs.floor.clone()} />
                            <NumberField id="age" label="Bina Yaşı" node={refs.age.clone()} />
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <SelectField id="district" label="İlçe" node={refs.district.clone()} options={(*districts).clone()} />
                            <SelectField id="neighborhood" label="Mahalle" node={refs.neighborhood.clone()} options={(*neighborhoods).clone()} />
                        </div>
                        <button type="submit" class="btn btn-primary w-full">
                            if *in_flight {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            {"Fiyat Tahmin Et"}
                        </button>
                    </form>
                </div>
            </div>
            <div class="space-y-6">
                <PriceBoardView board={estimate.estimate.board.clone()} />
                <ComparisonChart values={estimate.estimate.chart.values()} />
            </div>
        </div>
    }
}
