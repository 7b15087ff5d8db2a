//! Start screen header.

use tilefolio_content::SiteProfile;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::core::icons::IconRef;

#[derive(Properties, PartialEq)]
pub(crate) struct HeaderProps {
    pub profile: SiteProfile,
}

#[function_component(Header)]
pub(crate) fn header(props: &HeaderProps) -> Html {
    let profile = &props.profile;
    html! {
        <header class="metro-header">
            <div class="metro-header__top">
                <div class="metro-header__heading">
                    {for profile.eyebrow.iter().map(|eyebrow| html! {
                        <p class="metro-header__eyebrow">{eyebrow.clone()}</p>
                    })}
                    <h1 class="metro-header__title">
                        <span class="metro-header__accent" aria-hidden="true"></span>
                        {profile.name.clone()}
                    </h1>
                </div>
                <div class="metro-header__actions">
                    <ThemeSwitcher />
                    <span class="metro-header__user">
                        <span class="metro-header__user-label">{"User"}</span>
                        <Icon icon={IconRef::named("user-fill")} class={classes!("metro-header__user-icon")} />
                    </span>
                </div>
            </div>
            {for profile.description.iter().map(|description| html! {
                <p class="metro-header__description">{description.clone()}</p>
            })}
            {for profile.tip.iter().map(|tip| html! {
                <p class="metro-header__tip">{tip.clone()}</p>
            })}
        </header>
    }
}
