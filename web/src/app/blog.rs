use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn BlogView() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <div class="flex-1 mx-auto w-full max-w-5xl px-4 py-12">
            <h1 class="text-3xl font-bold mb-8">"Personal Blog"</h1>
            <p class="text-slate-600 dark:text-slate-400">
                "Posts about front-end development and UI design are on their way."
            </p>
        </div>
    }
}
