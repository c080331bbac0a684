use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingOverlayProps {
    pub show: bool,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.87);">
            <div style="text-align:center; font-size:14px;">
                <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff;">{"Guardian Defence"}</h2>
                <p style="margin:4px 0; opacity:0.85;">{"Loading sprites..."}</p>
            </div>
        </div>
    }
}
