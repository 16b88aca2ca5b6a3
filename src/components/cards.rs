use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, TouchEvent};
use yew::prelude::*;

use crate::model::{DensityLevel, Gap, GestureThresholds, DEFAULT_SETTLE_TRANSITION};
use crate::state::{
    contact_distance, plan_flip, DensityState, GestureInterpreter, PositionArena, Preview,
    TouchPoint,
};
use crate::util::{
    after_next_paint, item_elements, measure_items, now_ms, request_frame, set_style, ITEM_CLASS,
};

const CLASS_PREFIX: &str = "cards";

#[derive(Properties, PartialEq, Clone)]
pub struct CardsProps {
    /// When set, the grid shows this level and never picks one itself.
    #[prop_or_default]
    pub level: Option<DensityLevel>,
    /// Starting level when `level` is not given.
    #[prop_or_default]
    pub default_level: Option<DensityLevel>,
    /// Fired for every committed change, controlled or not.
    #[prop_or_default]
    pub on_level_change: Callback<DensityLevel>,
    #[prop_or_default]
    pub gap: Gap,
    #[prop_or(true)]
    pub enable_gesture: bool,
    /// Reserved; classification works on distance ratios.
    #[prop_or_default]
    pub gesture_thresholds: GestureThresholds,
    #[prop_or(AttrValue::Static(DEFAULT_SETTLE_TRANSITION))]
    pub settle_transition: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Extra inline style appended to the container.
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

// Refreshed every render so listeners attached earlier see current props.
struct LatestProps {
    controlled: Option<DensityLevel>,
    on_level_change: Callback<DensityLevel>,
}

type RequestLevel = Rc<dyn Fn(DensityLevel)>;

#[derive(Clone)]
struct GestureCtx {
    interpreter: Rc<RefCell<GestureInterpreter>>,
    density: Rc<RefCell<DensityState>>,
    latest: Rc<RefCell<LatestProps>>,
    preview: UseStateHandle<Preview>,
    request_level: RequestLevel,
}

fn touch_points(e: &TouchEvent) -> Vec<TouchPoint> {
    let list = e.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint {
            x: t.client_x() as f64,
            y: t.client_y() as f64,
        })
        .collect()
}

/// Binds the pinch listeners to `container` and returns their teardown.
fn attach_gesture_listeners(container: Element, ctx: GestureCtx) -> impl FnOnce() {
    let touch_start_cb = {
        let ctx = ctx.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if e.touches().length() != 2 {
                return;
            }
            // Keep the browser from zooming the page while we interpret the pinch.
            e.prevent_default();
            let distance = contact_distance(&touch_points(&e));
            let controlled = ctx.latest.borrow().controlled;
            let shown = ctx.density.borrow_mut().pivot(controlled);
            let preview = ctx.interpreter.borrow_mut().begin(distance, shown);
            log::trace!("pinch started at {distance:.1}px on {shown:?}");
            ctx.preview.set(preview);
        }) as Box<dyn FnMut(_)>)
    };
    let touch_move_cb = {
        let ctx = ctx.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if e.touches().length() != 2 || !ctx.interpreter.borrow().is_active() {
                return;
            }
            e.prevent_default();
            let distance = contact_distance(&touch_points(&e));
            let controlled = ctx.latest.borrow().controlled;
            let shown = ctx.density.borrow().effective(controlled);
            let update = ctx
                .interpreter
                .borrow_mut()
                .update(distance, shown, now_ms());
            let Some(update) = update else {
                return;
            };
            if let Some(level) = update.commit {
                (ctx.request_level)(level);
            }
            ctx.preview.set(Preview {
                scale: update.preview_scale,
                pinching: true,
            });
        }) as Box<dyn FnMut(_)>)
    };
    let touch_end_cb = {
        let ctx = ctx;
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if e.touches().length() >= 2 {
                return;
            }
            let preview = ctx.interpreter.borrow_mut().end();
            ctx.preview.set(preview);
        }) as Box<dyn FnMut(_)>)
    };

    // Non-passive, otherwise prevent_default is ignored.
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    let bindings = [
        ("touchstart", &touch_start_cb),
        ("touchmove", &touch_move_cb),
        ("touchend", &touch_end_cb),
        ("touchcancel", &touch_end_cb),
    ];
    for (name, cb) in bindings {
        container
            .add_event_listener_with_callback_and_add_event_listener_options(
                name,
                cb.as_ref().unchecked_ref(),
                &options,
            )
            .ok();
    }

    move || {
        let bindings = [
            ("touchstart", &touch_start_cb),
            ("touchmove", &touch_move_cb),
            ("touchend", &touch_end_cb),
            ("touchcancel", &touch_end_cb),
        ];
        for (name, cb) in bindings {
            let _ = container.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
    }
}

/// Play the glide from the positions in `positions` to the current layout,
/// then remember the current layout for the next change.
fn settle(container: &Element, positions: &RefCell<PositionArena>, transition: &AttrValue) {
    let after = measure_items(container);
    let before = positions.replace(after.clone());
    let items = item_elements(container);
    for mv in plan_flip(&before, &after) {
        // Removed between measurement and now.
        let Some(el) = items.get(mv.index) else {
            continue;
        };
        set_style(el, "transition", "none");
        set_style(el, "transform", &mv.translate_css());
        let el = el.clone();
        let transition = transition.clone();
        request_frame(move || {
            set_style(&el, "transition", transition.as_str());
            set_style(&el, "transform", "");
        });
    }
}

/// Grid of cards whose column count follows a two-finger pinch.
///
/// Pinching in adds columns, spreading out removes them. Each change is
/// animated: items glide from where they were to where the new layout puts
/// them.
#[function_component(Cards)]
pub fn cards(props: &CardsProps) -> Html {
    let container_ref = use_node_ref();
    let force_update = use_force_update();
    let density = use_mut_ref(|| {
        DensityState::new(props.level.or(props.default_level).unwrap_or_default())
    });
    let interpreter = use_mut_ref(GestureInterpreter::new);
    let positions = use_mut_ref(PositionArena::default);
    let preview = use_state_eq(Preview::default);
    let latest = use_mut_ref(|| LatestProps {
        controlled: props.level,
        on_level_change: props.on_level_change.clone(),
    });
    *latest.borrow_mut() = LatestProps {
        controlled: props.level,
        on_level_change: props.on_level_change.clone(),
    };

    let level = density.borrow().effective(props.level);
    density.borrow_mut().observe(level);

    {
        let conflicting = props.level.is_some() && props.default_level.is_some();
        use_effect_with(conflicting, move |conflicting| {
            if cfg!(debug_assertions) && *conflicting {
                log::warn!("Cards: `level` and `default_level` both set; `default_level` is ignored");
            }
            || ()
        });
    }

    let request_level: RequestLevel = {
        let density = density.clone();
        let positions = positions.clone();
        let latest = latest.clone();
        let container_ref = container_ref.clone();
        let force_update = force_update.clone();
        Rc::new(move |target: DensityLevel| {
            if density.borrow().in_effect() == target {
                return;
            }
            if let Some(container) = container_ref.cast::<Element>() {
                *positions.borrow_mut() = measure_items(&container);
            }
            let (controlled, on_level_change) = {
                let latest = latest.borrow();
                (latest.controlled, latest.on_level_change.clone())
            };
            let commit = density.borrow_mut().request(target, controlled);
            let Some(commit) = commit else {
                return;
            };
            log::debug!("density -> {:?} ({} columns)", commit.level, commit.level.columns());
            if commit.update_internal {
                force_update.force_update();
            }
            on_level_change.emit(commit.level);
        })
    };

    // Settle after every change of the level on screen.
    {
        let container_ref = container_ref.clone();
        let positions = positions.clone();
        let transition = props.settle_transition.clone();
        use_effect_with(level, move |_| {
            after_next_paint(move || {
                if let Some(container) = container_ref.cast::<Element>() {
                    settle(&container, &positions, &transition);
                }
            });
            || ()
        });
    }

    // Rebind whenever the flag or the level on screen changes.
    {
        let container_ref = container_ref.clone();
        let ctx = GestureCtx {
            interpreter: interpreter.clone(),
            density: density.clone(),
            latest: latest.clone(),
            preview: preview.clone(),
            request_level,
        };
        use_effect_with((props.enable_gesture, level), move |(enabled, _)| {
            let teardown = match container_ref.cast::<Element>() {
                Some(container) if *enabled => Some(attach_gesture_listeners(container, ctx)),
                _ => {
                    // No listener will see the fingers lift; rest the items now.
                    let preview = ctx.interpreter.borrow_mut().end();
                    ctx.preview.set(preview);
                    None
                }
            };
            move || {
                if let Some(teardown) = teardown {
                    teardown();
                }
            }
        });
    }

    let style = format!(
        "display:grid; grid-template-columns:repeat({}, 1fr); gap:{}; {}",
        level.columns(),
        props.gap.to_css(),
        props.style
    );
    let body_style = format!(
        "transform:scale({}); transition:{};",
        preview.scale,
        preview.transition(props.settle_transition.as_str())
    );

    let items = props
        .children
        .iter()
        .enumerate()
        .map(|(i, child)| {
            html! {
                <div key={i} class={ITEM_CLASS}>
                    <div class={format!("{}-item-body", CLASS_PREFIX)} style={body_style.clone()}>
                        { child }
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div ref={container_ref} class={classes!(CLASS_PREFIX, props.class.clone())} style={style}>
            { items }
        </div>
    }
}
