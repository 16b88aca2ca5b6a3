use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub title: AttrValue,
    /// Rendered at the right end of the header.
    #[prop_or_default]
    pub extra: Html,
    #[prop_or_default]
    pub on_click: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let header = if props.title.is_empty() {
        html! {}
    } else {
        html! {
            <div style="display:flex; justify-content:space-between; align-items:center; padding:10px 12px; border-bottom:1px solid #f0f0f0; font-weight:600; font-size:14px;">
                <span style="overflow:hidden; text-overflow:ellipsis; white-space:nowrap;">{ props.title.clone() }</span>
                { props.extra.clone() }
            </div>
        }
    };
    html! {
        <div {onclick} style="background:#fff; border-radius:8px; overflow:hidden; box-shadow:0 1px 3px rgba(0,0,0,0.08);">
            { header }
            <div style="padding:12px; font-size:13px; color:#555;">{ for props.children.iter() }</div>
        </div>
    }
}
