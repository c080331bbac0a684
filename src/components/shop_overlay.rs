use yew::prelude::*;

use crate::shop::UPGRADES;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopOverlayProps {
    pub show: bool,
    pub gold: u64,
    pub selected: usize,
    /// Purchase count per catalog entry, in catalog order.
    pub recorded: Vec<u32>,
    pub feedback: Option<String>,
    pub on_select: Callback<usize>,
    pub on_buy: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ShopOverlay(props: &ShopOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let buy_cb = {
        let cb = props.on_buy.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rows = UPGRADES.iter().enumerate().map(|(i, up)| {
        let selected = i == props.selected;
        let affordable = props.gold >= up.cost;
        let recorded = props.recorded.get(i).copied().unwrap_or(0);
        let select_cb = {
            let cb = props.on_select.clone();
            Callback::from(move |_| cb.emit(i))
        };
        let border = if selected { "#58a6ff" } else { "#30363d" };
        let cost_color = if affordable { "#d4af37" } else { "#6e7681" };
        html! {
            <div onclick={select_cb} style={format!("border:1px solid {}; border-radius:8px; padding:8px 10px; cursor:pointer; display:flex; flex-direction:column; gap:2px;", border)}>
                <div style="display:flex; justify-content:space-between; gap:12px;">
                    <span style="font-weight:600;">{ up.name }</span>
                    <span style={format!("color:{}; font-variant-numeric:tabular-nums;", cost_color)}>{ format!("{}g", up.cost) }</span>
                </div>
                <div style="font-size:12px; opacity:0.8;">{ up.description }</div>
                if recorded > 0 {
                    <div style="font-size:11px; opacity:0.6;">{ format!("Recorded: {}", recorded) }</div>
                }
            </div>
        }
    });

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Shop (paused)"}</h3>
                <span style="color:#d4af37; font-weight:600;">{ format!("Gold: {}", props.gold) }</span>
            </div>
            <div style="display:flex; flex-direction:column; gap:8px;">
                { for rows }
            </div>
            if let Some(msg) = &props.feedback {
                <div style="font-size:12px; background:#1c2128; border:1px solid #30363d; padding:4px 6px; border-radius:6px;">{ msg.clone() }</div>
            }
            <div style="display:flex; gap:8px;">
                <button onclick={buy_cb} style="flex:1;">{"Buy (Enter)"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Resume (S)"}</button>
            </div>
        </div>
    </div>}
}
