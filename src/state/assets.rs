// Sprite loading. The session must not start until every image has fired
// `onload`; a failed image is logged and the game stays on the loading screen.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlImageElement};

use crate::config::GameConfig;
use crate::render::Sprite;
use crate::util::clog;

pub struct Sprites {
    pub background: HtmlImageElement,
    pub guardian: HtmlImageElement,
    pub enemies: Vec<HtmlImageElement>,
}

impl Sprites {
    pub fn get(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        match sprite {
            Sprite::Background => Some(&self.background),
            Sprite::Guardian => Some(&self.guardian),
            Sprite::Enemy(i) => self.enemies.get(i).or_else(|| self.enemies.first()),
        }
    }

    fn all(&self) -> impl Iterator<Item = &HtmlImageElement> {
        [&self.background, &self.guardian].into_iter().chain(self.enemies.iter())
    }
}

/// Keeps the image callbacks alive until loading settles.
pub struct AssetLoader {
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut(Event)>,
}

impl AssetLoader {
    pub fn start(cfg: &GameConfig, on_ready: impl FnOnce(Rc<Sprites>) + 'static) -> Result<Self, JsValue> {
        let sprites = Rc::new(Sprites {
            background: HtmlImageElement::new()?,
            guardian: HtmlImageElement::new()?,
            enemies: cfg
                .enemy_sprites
                .iter()
                .map(|_| HtmlImageElement::new())
                .collect::<Result<Vec<_>, _>>()?,
        });
        let pending = Rc::new(Cell::new(sprites.all().count()));
        let on_ready: Box<dyn FnOnce(Rc<Sprites>)> = Box::new(on_ready);
        let on_ready = Rc::new(RefCell::new(Some(on_ready)));

        let onload = {
            let pending = pending.clone();
            let sprites = sprites.clone();
            Closure::wrap(Box::new(move || {
                let left = pending.get().saturating_sub(1);
                pending.set(left);
                if left == 0 {
                    if let Some(cb) = on_ready.borrow_mut().take() {
                        clog("All sprites loaded");
                        cb(sprites.clone());
                    }
                }
            }) as Box<dyn FnMut()>)
        };
        let onerror = Closure::wrap(Box::new(move |e: Event| {
            let src = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
                .map(|img| img.src())
                .unwrap_or_default();
            clog(&format!("Failed to load sprite {}", src));
        }) as Box<dyn FnMut(Event)>);

        let sources = [&cfg.background_sprite, &cfg.guardian_sprite]
            .into_iter()
            .chain(cfg.enemy_sprites.iter());
        for (img, src) in sprites.all().zip(sources) {
            img.set_onload(Some(onload.as_ref().unchecked_ref()));
            img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            img.set_src(src);
        }

        Ok(Self { _onload: onload, _onerror: onerror })
    }
}
