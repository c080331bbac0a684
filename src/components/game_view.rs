use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};
use yew::prelude::*;

use super::{controls_panel::ControlsPanel, loading_overlay::LoadingOverlay, shop_overlay::ShopOverlay};
use crate::config::GameConfig;
use crate::game::{GameState, PressOutcome, TickOutcome};
use crate::input::{Command, command_for_key};
use crate::render;
use crate::shop::{PurchaseOutcome, UPGRADES};
use crate::state::{AssetLoader, CanvasSurface, FrameLoop, Sprites};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub config: GameConfig,
}

type LoopSlot = Rc<RefCell<Option<Rc<FrameLoop>>>>;

/// Everything the mount effect registered, released on unmount.
struct Mounted {
    window: Window,
    frame_loop: Rc<FrameLoop>,
    _assets: AssetLoader,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    keyup: Closure<dyn FnMut(KeyboardEvent)>,
}

impl Mounted {
    fn teardown(self) {
        self.window
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref())
            .ok();
        self.window
            .remove_event_listener_with_callback("keyup", self.keyup.as_ref().unchecked_ref())
            .ok();
        self.frame_loop.cancel();
    }
}

fn describe_purchase(outcome: PurchaseOutcome) -> String {
    match outcome {
        PurchaseOutcome::Bought(id) => {
            let name = UPGRADES.iter().find(|u| u.id == id).map(|u| u.name).unwrap_or("upgrade");
            format!("Bought {}", name)
        }
        PurchaseOutcome::NotEnoughGold { cost, gold } => format!("Need {} gold (have {})", cost, gold),
        PurchaseOutcome::Closed => String::new(),
    }
}

/// Routes one command into the session and reacts to what it changed.
/// Returns true when the overlays need a re-render.
fn dispatch(session: &RefCell<GameState>, frame_loop: &LoopSlot, feedback: &RefCell<String>, cmd: Command) -> bool {
    let outcome = session.borrow_mut().press(cmd);
    match outcome {
        PressOutcome::ShopToggled { open } => {
            feedback.borrow_mut().clear();
            if !open {
                if let Some(fl) = frame_loop.borrow().as_ref() {
                    fl.resume();
                }
            }
            true
        }
        PressOutcome::Navigated(_) => true,
        PressOutcome::Purchase(p) => {
            *feedback.borrow_mut() = describe_purchase(p);
            true
        }
        _ => false,
    }
}

fn mount(
    canvas_ref: &NodeRef,
    session: Rc<RefCell<GameState>>,
    sprites: Rc<RefCell<Option<Rc<Sprites>>>>,
    loop_slot: LoopSlot,
    feedback: Rc<RefCell<String>>,
    loaded: UseStateHandle<bool>,
    refresh: UseForceUpdateHandle,
) -> Result<Mounted, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| JsValue::from_str("canvas not mounted"))?;
    let cfg = session.borrow().config.clone();
    canvas.set_width(cfg.canvas_width as u32);
    canvas.set_height(cfg.canvas_height as u32);
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let draw: Rc<dyn Fn()> = {
        let session = session.clone();
        let sprites = sprites.clone();
        Rc::new(move || {
            let Some(sheet) = sprites.borrow().clone() else {
                return;
            };
            let gs = session.borrow();
            let mut surface = CanvasSurface { ctx: &ctx, sprites: &sheet };
            render::draw_frame(&gs, &mut surface);
        })
    };

    let on_stop: Rc<dyn Fn(TickOutcome)> = {
        let refresh = refresh.clone();
        Rc::new(move |outcome| {
            if outcome == TickOutcome::GameOver {
                refresh.force_update();
            }
        })
    };
    let frame_loop = FrameLoop::new(window.clone(), session.clone(), draw.clone(), on_stop);
    *loop_slot.borrow_mut() = Some(frame_loop.clone());

    let assets = {
        let session = session.clone();
        let frame_loop = frame_loop.clone();
        AssetLoader::start(&cfg, move |sheet| {
            *sprites.borrow_mut() = Some(sheet);
            session.borrow_mut().start();
            loaded.set(true);
            draw();
            frame_loop.resume();
        })?
    };

    let keydown = {
        let session = session.clone();
        let loop_slot = loop_slot.clone();
        let cfg = cfg.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let Some(cmd) = command_for_key(&e.key(), &cfg) else {
                return;
            };
            e.prevent_default();
            if dispatch(&session, &loop_slot, &feedback, cmd) {
                refresh.force_update();
            }
        }) as Box<dyn FnMut(_)>)
    };
    window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

    let keyup = {
        let session = session.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if let Some(cmd) = command_for_key(&e.key(), &cfg) {
                session.borrow_mut().release(cmd);
            }
        }) as Box<dyn FnMut(_)>)
    };
    window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;

    Ok(Mounted { window, frame_loop, _assets: assets, keydown, keyup })
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let session = use_mut_ref(|| GameState::new(props.config.clone()));
    let sprites = use_mut_ref(|| None::<Rc<Sprites>>);
    let loop_slot: LoopSlot = use_mut_ref(|| None::<Rc<FrameLoop>>);
    let feedback = use_mut_ref(String::new);
    let loaded = use_state(|| false);
    let refresh = use_force_update();

    // Main mount effect (canvas, sprites, loop, keys)
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let sprites = sprites.clone();
        let loop_slot = loop_slot.clone();
        let feedback = feedback.clone();
        let loaded = loaded.clone();
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            let mounted = match mount(&canvas_ref, session, sprites, loop_slot, feedback, loaded, refresh) {
                Ok(m) => Some(m),
                Err(e) => {
                    clog(&format!("Game setup failed: {:?}", e));
                    None
                }
            };
            move || {
                if let Some(m) = mounted {
                    m.teardown();
                }
            }
        });
    }

    let on_select: Callback<usize> = {
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |i: usize| {
            let mut gs = session.borrow_mut();
            if gs.shop.open {
                gs.shop.selected = i.min(UPGRADES.len() - 1);
                drop(gs);
                refresh.force_update();
            }
        })
    };
    let press_cb = |cmd: Command| -> Callback<()> {
        let session = session.clone();
        let loop_slot = loop_slot.clone();
        let feedback = feedback.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            if dispatch(&session, &loop_slot, &feedback, cmd) {
                refresh.force_update();
            }
        })
    };

    let gs = session.borrow();
    let cfg = &gs.config;
    let recorded: Vec<u32> = UPGRADES
        .iter()
        .map(|u| gs.purchases.get(&u.id).copied().unwrap_or(0))
        .collect();
    let feedback_opt = {
        let f = feedback.borrow();
        if f.is_empty() { None } else { Some(f.clone()) }
    };

    html! {<div>
        <div style={format!("position:relative; width:{}px; height:{}px; margin:0 auto;", cfg.canvas_width, cfg.canvas_height)}>
            <canvas ref={canvas_ref.clone()} id="gameCanvas" style="display:block;"></canvas>
            <LoadingOverlay show={!*loaded} />
            <ShopOverlay
                show={gs.shop.open}
                gold={gs.economy.gold()}
                selected={gs.shop.selected}
                recorded={recorded}
                feedback={feedback_opt}
                on_select={on_select}
                on_buy={press_cb(Command::ShopConfirm)}
                on_close={press_cb(Command::ToggleShop)}
            />
        </div>
        <ControlsPanel
            spell_enabled={cfg.spell_enabled}
            spell_cost={cfg.spell_cost}
            shop_enabled={cfg.shop_enabled}
            game_over={gs.game_over}
            shots_fired={gs.shots_fired}
            hits_landed={gs.hits_landed}
        />
    </div>}
}
