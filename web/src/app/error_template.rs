use http::status::StatusCode;
use leptos::prelude::*;
use leptos_router::components::*;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

// A basic function to display errors served by the error boundaries.
// Feel free to do more complicated things here than just displaying the error.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => RwSignal::new(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };
    // Get Errors from Signal
    let errors = errors.get_untracked();

    // Downcast lets us take a type that implements `std::error::Error`
    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    // Only the response code for the first error is actually sent from the
    // server; this may be customized. For example, a server that doesn't
    // distinguish between all errors may just return a 500.
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(errors[0].status_code());
        }
    }

    view! {
        <div class="flex-1 flex flex-col items-center justify-center py-12 px-4">
            <h1 class="text-4xl font-bold mb-4">
                {if errors.len() > 1 { "Errors" } else { "Error" }}
            </h1>
            {errors
                .into_iter()
                .map(|error| {
                    let error_string = error.to_string();
                    let error_code = error.status_code();
                    view! {
                        <h2 class="text-2xl text-slate-600 dark:text-slate-400">
                            {error_code.to_string()}
                        </h2>
                        <p class="my-4">{error_string}</p>
                    }
                })
                .collect_view()}
            <A
                href="/"
                attr:class="text-sky-700 dark:text-sky-500 hover:text-sky-900 dark:hover:text-sky-400 font-medium"
            >
                "Back home"
            </A>
        </div>
    }
}
