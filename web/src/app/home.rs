use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

/// Renders the landing page.
#[component]
pub fn HomeView() -> impl IntoView {
    view! {
        <Title text="Front-End Developer" />
        <div class="flex-1 flex flex-col items-center justify-center py-12 px-4">
            <h1 class="text-4xl font-bold text-center mb-4">"Hi, I'm Gudwin Nayak"</h1>
            <p class="max-w-xl text-center text-lg text-slate-600 dark:text-slate-400 mb-8">
                "A front-end developer who loves intuitive, clean and modern UI design."
            </p>
            <div class="flex items-center space-x-4">
                <A
                    href="/contact"
                    attr:class="rounded-xl bg-sky-700 px-6 py-3 font-medium text-white hover:bg-sky-800"
                >
                    "Get in touch"
                </A>
                <A
                    href="/blog"
                    attr:class="rounded-xl border border-slate-300 dark:border-slate-700 px-6 py-3 font-medium hover:bg-slate-300/50 dark:hover:bg-slate-800/50"
                >
                    "Read the blog"
                </A>
            </div>
        </div>
    }
}
