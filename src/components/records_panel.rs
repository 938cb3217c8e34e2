use crate::util::format_duration_ms;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecordsPanelProps {
    pub best_ms: Option<f64>,
    pub last_ms: Option<f64>,
}

#[function_component]
pub fn RecordsPanel(props: &RecordsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🏆"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Best"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ format_duration_ms(props.best_ms) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"⏱"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Last"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ format_duration_ms(props.last_ms) }</span>
            </div>
        </div>
    }
}
