use super::game_view::GameView;
use crate::config::GameConfig;
use crate::util::clog;
use yew::prelude::*;

/// Id of an optional `<script type="application/json">` block carrying
/// config overrides.
const CONFIG_ELEMENT_ID: &str = "game-config";

fn load_config() -> GameConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return GameConfig::default();
    };
    match GameConfig::from_json(&raw) {
        Ok(cfg) => {
            clog(&format!("Loaded {:?} config", cfg.variant));
            cfg
        }
        Err(e) => {
            clog(&format!("Bad game config, using defaults: {}", e));
            GameConfig::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_config());
    html! { <GameView config={(*config).clone()} /> }
}
