use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub spell_enabled: bool,
    pub spell_cost: u32,
    pub shop_enabled: bool,
    pub game_over: bool,
    pub shots_fired: u64,
    pub hits_landed: u64,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let hint = "font-size:12px; opacity:0.8;";
    html! {<div style="margin:8px auto; width:800px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; flex-wrap:wrap; gap:6px 18px;">
        <span style={hint}>{"← / → move"}</span>
        <span style={hint}>{"Space shoot"}</span>
        if props.spell_enabled {
            <span style={hint}>{ format!("M clear the field ({} mana)", props.spell_cost) }</span>
        }
        if props.shop_enabled {
            <span style={hint}>{"S / Esc shop, ↑ / ↓ select, Enter buy"}</span>
        }
        if props.game_over {
            <span style="font-size:12px; color:#f85149;">{"The fortress has fallen. Reload the page to play again."}</span>
            <span style={hint}>{ format!("Hits {} / shots {}", props.hits_landed, props.shots_fired) }</span>
        }
    </div>}
}
