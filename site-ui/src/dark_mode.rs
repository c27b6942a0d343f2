use leptos::prelude::*;
use leptos_use::{use_color_mode, ColorMode, UseColorModeReturn};

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let UseColorModeReturn { mode, set_mode, .. } = use_color_mode();
    view! {
        <button
            id="dark-mode-toggle"
            type="button"
            aria-label="dark mode toggle"
            class="flex h-9 w-9 cursor-pointer items-center justify-center rounded-xl text-slate-800 hover:bg-slate-300/50 dark:text-slate-100 dark:hover:bg-slate-800/50"
            on:click=move |_| {
                match mode.get() {
                    ColorMode::Dark => set_mode.set(ColorMode::Light),
                    _ => set_mode.set(ColorMode::Dark),
                }
            }
        >

            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="h-5 w-5"
            >
                <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
            </svg>
        </button>
    }
}
