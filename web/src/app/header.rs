use leptos::prelude::*;
use leptos_router::components::*;

use site_ui::{
    icons::{GitHub, Twitter, WakaTime},
    DarkModeToggle, NavIcon,
};

#[component]
pub fn Header() -> impl IntoView {
    let aclass = "text-sky-700 dark:text-sky-500 hover:text-sky-900 dark:hover:text-sky-400 font-medium";

    view! {
        <header class="flex flex-wrap space-y-2 space-x-4 items-center justify-between px-4 py-2 border-b border-slate-200 dark:border-slate-800 bg-neutral-200/50 dark:bg-slate-950/50">
            <A href="/" attr:class="flex items-center space-x-2">
                <span class="text-lg font-bold">"Gudwin Nayak"</span>
            </A>
            <div class="flex items-center space-x-2">
                <A href="/blog" attr:class=format!("{} text-lg", aclass)>
                    "Blog"
                </A>
                <span class="text-slate-950 dark:text-slate-100">"|"</span>
                <A href="/contact" attr:class=format!("{} text-lg", aclass)>
                    "Contact"
                </A>
            </div>
            <div class="flex grow justify-end items-center space-x-2">
                <NavIcon href="https://github.com/sylvaincodes" title="GitHub" label="Follow Me">
                    <GitHub />
                </NavIcon>
                <NavIcon href="https://twitter.com/sylvaincodes" title="Twitter">
                    <Twitter />
                </NavIcon>
                <NavIcon href="https://wakatime.com/@Gudwin_786" title="WakaTime">
                    <WakaTime />
                </NavIcon>
                <DarkModeToggle />
            </div>
        </header>
    }
}
