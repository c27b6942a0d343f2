use leptos::prelude::*;

use crate::{compose_classes, EXTERNAL_REL, EXTERNAL_TARGET};

/// Accessible name for a social nav link, e.g. "My GitHub".
pub fn nav_aria_label(title: &str) -> String {
    format!("My {title}")
}

/// Tooltip for a social nav link, e.g. "My GitHub profile".
pub fn nav_title(title: &str) -> String {
    format!("My {title} profile")
}

/// A rounded icon button in the header nav linking to an external profile.
/// With a `label` the button expands to icon + text on larger screens.
#[component]
pub fn NavIcon(
    href: &'static str,
    title: &'static str,
    #[prop(optional)] label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = compose_classes(&[
        "flex items-center justify-center rounded-xl hover:bg-slate-300/50 dark:hover:bg-slate-800/50",
        if label.is_some() {
            "text-slate-800 dark:text-slate-100 sm:bg-slate-300/50 sm:pl-1 sm:pr-3 sm:hover:bg-slate-300/70 sm:dark:bg-slate-800/50 sm:dark:hover:bg-slate-700/50"
        } else {
            ""
        },
    ]);
    view! {
        <a
            href=href
            class=class
            aria-label=nav_aria_label(title)
            title=nav_title(title)
            target=EXTERNAL_TARGET
            rel=EXTERNAL_REL
        >
            <span class="flex h-9 w-9 items-center justify-center rounded-xl">{children()}</span>
            {label
                .map(|label| {
                    view! { <span class="hidden text-sm font-semibold sm:block">{label}</span> }
                })}
        </a>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aria_label_follows_the_fixed_template() {
        assert_eq!(nav_aria_label("GitHub"), "My GitHub");
        assert_eq!(nav_aria_label("Twitter"), "My Twitter");
    }

    #[test]
    fn tooltip_follows_the_fixed_template() {
        assert_eq!(nav_title("GitHub"), "My GitHub profile");
        assert_eq!(nav_title("WakaTime"), "My WakaTime profile");
    }
}
