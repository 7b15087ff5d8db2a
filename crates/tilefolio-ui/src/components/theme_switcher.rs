//! Theme cycle button and direct theme picker.

use web_sys::Element;
use yew::prelude::*;

use crate::app::{element_rect, use_theme};
use crate::components::icon::Icon;
use crate::core::icons::IconRef;
use crate::core::theme::{ThemeName, descriptor};

/// Advances the theme, rippling out from the button's center.
#[function_component(ThemeSwitcher)]
pub(crate) fn theme_switcher() -> Html {
    let theme = use_theme();
    let node = use_node_ref();

    let onclick = {
        let node = node.clone();
        let cycle = theme.cycle.clone();
        Callback::from(move |_: MouseEvent| {
            let origin = node
                .cast::<Element>()
                .map(|button| element_rect(&button).center());
            cycle.emit(origin);
        })
    };

    html! {
        <div class="theme-switcher__group">
        <button
            ref={node}
            type="button"
            class="theme-switcher"
            aria-label={format!("Switch theme (current: {})", theme.name)}
            {onclick}
        >
            <Icon icon={IconRef::named("sparkle-fill")} class={classes!("theme-switcher__icon")} />
            <span class="theme-switcher__label">{theme.name.as_str()}</span>
        </button>
        <ThemePicker />
        </div>
    }
}

/// One swatch per theme; picking one jumps straight to it.
#[function_component(ThemePicker)]
fn theme_picker() -> Html {
    let theme = use_theme();

    html! {
        <div class="theme-picker" role="radiogroup" aria-label="Themes">
            {for ThemeName::ALL.into_iter().map(|name| {
                let set = theme.set.clone();
                let onclick = Callback::from(move |event: MouseEvent| {
                    let origin = event
                        .target_dyn_into::<Element>()
                        .map(|swatch| element_rect(&swatch).center());
                    set.emit((name, origin));
                });
                let active = name == theme.name;
                html! {
                    <button
                        type="button"
                        role="radio"
                        aria-checked={active.to_string()}
                        aria-label={format!("Use {name} theme")}
                        class={classes!("theme-picker__swatch", active.then_some("is-active"))}
                        style={format!("background: {};", descriptor(name).accent)}
                        {onclick}
                    />
                }
            })}
        </div>
    }
}
