use leptos::prelude::*;
use leptos_meta::Title;

use site_ui::{nav_aria_label, nav_title, EXTERNAL_REL, EXTERNAL_TARGET};

#[component]
pub fn ContactView() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="flex-1 mx-auto w-full max-w-5xl px-4 py-12">
            <h1 class="text-3xl font-bold mb-8">"Contact"</h1>
            <p class="mb-4 text-slate-600 dark:text-slate-400">
                "The quickest way to reach me is through GitHub or Twitter."
            </p>
            <ul class="flex flex-col gap-2">
                <li>
                    <a
                        href="https://github.com/sylvaincodes"
                        target=EXTERNAL_TARGET
                        rel=EXTERNAL_REL
                        class="text-sky-700 dark:text-sky-500 hover:underline"
                        aria-label=nav_aria_label("GitHub")
                        title=nav_title("GitHub")
                    >
                        "GitHub"
                    </a>
                </li>
                <li>
                    <a
                        href="https://twitter.com/sylvaincodes"
                        target=EXTERNAL_TARGET
                        rel=EXTERNAL_REL
                        class="text-sky-700 dark:text-sky-500 hover:underline"
                        aria-label=nav_aria_label("Twitter")
                        title=nav_title("Twitter")
                    >
                        "Twitter"
                    </a>
                </li>
            </ul>
        </div>
    }
}
