use super::{card::Card, cards::Cards, density_controls::DensityControls};
use crate::config::CardsConfig;
use crate::model::DensityLevel;
use yew::prelude::*;

const CONFIG_ELEMENT_ID: &str = "cards-config";

fn demo_card(n: usize, on_click: Callback<()>) -> Html {
    html! {
        <Card title={format!("Card {}", n)} {on_click}>
            { format!("Content of card {}", n) }
        </Card>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| CardsConfig::from_document(CONFIG_ELEMENT_ID));
    let free_level = use_state(|| config.default_level);
    let controlled_level = use_state(|| config.default_level);
    let clicks = use_state(|| 0_u32);

    let on_card_click = {
        let clicks = clicks.clone();
        Callback::from(move |_| clicks.set(*clicks + 1))
    };
    // Uncontrolled grid: we only mirror its level for the label.
    let on_free_change = {
        let free_level = free_level.clone();
        Callback::from(move |level: DensityLevel| free_level.set(level))
    };
    // Controlled grid: accepting the request is what makes it move.
    let on_controlled_change = {
        let controlled_level = controlled_level.clone();
        Callback::from(move |level: DensityLevel| {
            log::info!("controlled grid asked for {:?}", level);
            controlled_level.set(level)
        })
    };

    html! {
        <div style="max-width:720px; margin:0 auto; padding:16px; background:#f5f5f5; font-family:sans-serif;">
            <h3 style="margin:0 0 4px;">{"Pinch to change density"}</h3>
            <p style="margin:0 0 12px; font-size:13px; opacity:0.7;">
                { format!("Showing {} · {} card taps", free_level.label(), *clicks) }
            </p>
            <Cards
                default_level={config.default_level}
                gap={config.gap.clone()}
                enable_gesture={config.enable_gesture}
                gesture_thresholds={config.gesture_thresholds}
                settle_transition={AttrValue::from(config.settle_transition.clone())}
                on_level_change={on_free_change}
            >
                { for (1..=config.item_count).map(|n| demo_card(n, on_card_click.clone())) }
            </Cards>

            <h3 style="margin:24px 0 8px;">{"Controlled"}</h3>
            <DensityControls current={*controlled_level} on_select={on_controlled_change.clone()} />
            <Cards
                level={*controlled_level}
                gap={config.gap.clone()}
                enable_gesture={config.enable_gesture}
                settle_transition={AttrValue::from(config.settle_transition.clone())}
                on_level_change={on_controlled_change}
            >
                { for (1..=config.item_count).map(|n| demo_card(n, on_card_click.clone())) }
            </Cards>
        </div>
    }
}
