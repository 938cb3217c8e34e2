use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::model::{ArenaMetrics, GamePhase, Position};
use crate::state::ArenaSensor;
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct ArenaViewProps {
    pub phase: GamePhase,
    pub position: Position,
    pub show_target: bool,
    pub on_catch: Callback<()>,
    pub on_metrics: Callback<ArenaMetrics>,
}

#[function_component(ArenaView)]
pub fn arena_view(props: &ArenaViewProps) -> Html {
    let arena_ref = use_node_ref();

    // Sensor lives as long as the arena is mounted, across every phase.
    {
        let arena_ref = arena_ref.clone();
        let on_metrics = props.on_metrics.clone();
        use_effect_with((), move |_| {
            let sensor = arena_ref
                .cast::<Element>()
                .and_then(|el| ArenaSensor::attach(el, on_metrics));
            if sensor.is_none() {
                clog("arena sensor not attached; relocation stays at base speed");
            }
            move || drop(sensor)
        });
    }

    let target = if props.show_target {
        let catch_cb = {
            let cb = props.on_catch.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                cb.emit(())
            })
        };
        let ring = match props.phase {
            GamePhase::Won => "#2ea043",
            GamePhase::Lost => "#f85149",
            _ => "#30363d",
        };
        // Only moves while Playing; Won/Lost freeze it where it was caught or escaped to.
        let transition = if props.phase == GamePhase::Playing {
            "left 0.08s linear, top 0.08s linear"
        } else {
            "none"
        };
        html! {
            <button
                class="target"
                aria-label="mouse"
                onclick={catch_cb}
                style={format!(
                    "position:absolute; left:{:.2}%; top:{:.2}%; transform:translate(-50%, -50%); width:44px; height:44px; border-radius:50%; border:2px solid {}; background:#161b22; font-size:24px; line-height:1; cursor:pointer; transition:{};",
                    props.position.x, props.position.y, ring, transition
                )}
            >{"🐭"}</button>
        }
    } else {
        html! {}
    };

    html! {
        <div
            ref={arena_ref}
            id="arena"
            style="position:relative; flex:1; min-height:320px; background:#161b22; border:1px solid #30363d; border-radius:12px; overflow:hidden;"
        >
            { target }
        </div>
    }
}
