use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudPanelProps {
    pub status: String,
    pub time_left: u32,
    /// Remaining share of the budget, drives the bar width.
    pub countdown_fraction: f64,
    pub action_label: &'static str,
    pub on_start: Callback<()>,
}

#[function_component]
pub fn HudPanel(props: &HudPanelProps) -> Html {
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let bar_pct = (props.countdown_fraction.clamp(0.0, 1.0) * 100.0).round();
    let bar_color = if props.time_left <= 3 { "#f85149" } else { "#58a6ff" };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px;">
        <div style="display:flex; align-items:center; gap:12px;">
            <span style="flex:1; font-size:16px; font-weight:600;">{ props.status.clone() }</span>
            <span style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">{ format!("{}s", props.time_left) }</span>
            <button class="hud-action" onclick={start_cb} style="padding:4px 14px;">{ props.action_label }</button>
        </div>
        <div style="height:4px; background:#1c2128; border-radius:2px; overflow:hidden;">
            <div style={format!("height:100%; width:{}%; background:{}; transition:width 0.25s linear;", bar_pct, bar_color)}></div>
        </div>
    </div>}
}
