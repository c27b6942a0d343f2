use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use super::{
    blog::BlogView,
    contact::ContactView,
    error_template::{AppError, ErrorTemplate},
    footer::Footer,
    header::Header,
    home::HomeView,
};

#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-web.css" />
                <script>
                    r#"
                    // On page load or when changing themes, best to add inline in `head` to avoid FOUC
                    if (
                        localStorage.getItem("leptos-use-color-scheme") === 'dark' ||
                        (!('leptos-use-color-scheme' in localStorage) && window.matchMedia('(prefers-color-scheme: dark)').matches)
                    ) {
                        document.documentElement.classList.add('dark')
                    } else {
                        document.documentElement.classList.remove('dark')
                    }
                    "#
                </script>
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Gudwin Nayak - {title}") />
        <Router>
            <main class="flex flex-col min-h-screen bg-white text-slate-900 dark:bg-slate-900 dark:text-slate-200">
                <Header />
                <Routes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(AppError::NotFound);
                    view! { <ErrorTemplate outside_errors /> }.into_view()
                }>
                    <Route path=path!("/") view=HomeView />
                    <Route path=path!("/blog") view=BlogView />
                    <Route path=path!("/contact") view=ContactView />
                </Routes>
                <Footer />
            </main>
        </Router>
    }
}
