use crate::model::DensityLevel;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DensityControlsProps {
    pub current: DensityLevel,
    pub on_select: Callback<DensityLevel>,
}

/// Buttons for picking a density directly, for devices without touch.
#[function_component(DensityControls)]
pub fn density_controls(props: &DensityControlsProps) -> Html {
    let buttons = DensityLevel::ALL
        .iter()
        .map(|&level| {
            let onclick = {
                let cb = props.on_select.clone();
                Callback::from(move |_: MouseEvent| cb.emit(level))
            };
            let active = level == props.current;
            let style = if active {
                "background:#1677ff; color:#fff; border:1px solid #1677ff;"
            } else {
                "background:#fff; color:#333; border:1px solid #d9d9d9;"
            };
            html! {
                <button {onclick} title={level.label()} aria-pressed={active.to_string()}
                    style={format!("{} border-radius:6px; padding:4px 10px; min-width:36px;", style)}>
                    { level.columns() }
                </button>
            }
        })
        .collect::<Html>();
    html! {<div style="display:flex; gap:6px; align-items:center; margin-bottom:12px;">
        <span style="font-size:13px; opacity:0.7;">{"Columns"}</span>
        { buttons }
    </div>}
}
