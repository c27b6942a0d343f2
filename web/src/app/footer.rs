use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_router::components::*;

use site_ui::{
    classes, copyright, current_year,
    icons::{ExternalLink, GitHub, LinkedIn, WakaTime},
    FooterLink, LinkLabel, LinkRendering, EXTERNAL_REL, EXTERNAL_TARGET,
};

const LINK_CLASS: &str =
    "flex h-8 items-center gap-2 whitespace-nowrap px-2 py-1 text-sm text-slate-900 dark:text-slate-200";
const BADGE_CLASS: &str =
    "rounded-full border border-slate-300 dark:border-slate-700 px-2 py-0 text-[10px] uppercase text-slate-900 dark:text-slate-200";
const GROUP_TITLE_CLASS: &str = "mb-2 px-2 text-[13px] text-slate-600 dark:text-slate-400";

const WORK_LINKS: &[FooterLink] = &[
    FooterLink::internal("Contact", "/contact"),
    FooterLink::internal("Skills and Tools", "#"),
    FooterLink::internal("Studio", "#"),
];

const LEARN_LINKS: &[FooterLink] = &[
    FooterLink::internal("Docs", "#"),
    FooterLink::internal("Personal Blog", "/blog"),
    FooterLink::internal("T.I.L", "#").with_label(LinkLabel::New),
];

const SITE_LINKS: &[FooterLink] = &[
    FooterLink::external("Source Code", "https://github.com/sylvaincodes"),
    FooterLink::internal("Credits", "#"),
];

#[component]
fn FooterLinkItem(link: FooterLink) -> impl IntoView {
    let badge =
        move |label: LinkLabel| view! { <span class=BADGE_CLASS>{label.as_str()}</span> };
    match link.rendering() {
        LinkRendering::Disabled => EitherOf3::A(view! {
            <span class=classes!(
                LINK_CLASS, "cursor-not-allowed text-slate-600 dark:text-slate-400"
            )>{link.title} {link.label.map(badge)}</span>
        }),
        LinkRendering::Internal => EitherOf3::B(view! {
            <A href=link.href attr:class=LINK_CLASS>
                {link.title}
                {link.label.map(badge)}
            </A>
        }),
        LinkRendering::External => EitherOf3::C(view! {
            <a href=link.href target=EXTERNAL_TARGET rel=EXTERNAL_REL class=LINK_CLASS>
                {link.title}
                <ExternalLink />
                {link.label.map(badge)}
            </a>
        }),
    }
}

/// List entries paired with their position. Keys are `(index, href)` so a
/// repeated placeholder href degrades to index identity; an empty slice
/// yields no entries.
fn keyed_links(links: &'static [FooterLink]) -> impl Iterator<Item = (usize, FooterLink)> {
    links.iter().copied().enumerate()
}

#[component]
fn FooterGroup(title: &'static str, links: &'static [FooterLink]) -> impl IntoView {
    view! {
        <div class="flex-1">
            <div class=GROUP_TITLE_CLASS>{title}</div>
            <ul class="flex flex-col">
                <For
                    each=move || keyed_links(links)
                    key=|(idx, link)| (*idx, link.href)
                    children=move |(_, link)| {
                        view! {
                            <li>
                                <FooterLinkItem link />
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[component]
fn FooterDescription() -> impl IntoView {
    let social_class = "flex h-9 w-9 items-center justify-center";
    view! {
        <div class="max-w-[348px]">
            <div class="mb-3 text-[13px] text-slate-600 dark:text-slate-400">"About Me"</div>
            <p class="mb-4 font-normal leading-relaxed">
                "I'm Gudwin Nayak, a " <strong>"front-end developer"</strong>
                " who loves intuitive, clean and modern UI design."
            </p>
            <ul class="-ml-2 flex gap-1">
                <li>
                    <a
                        href="https://twitter.com/sylvaincodes"
                        target=EXTERNAL_TARGET
                        rel=EXTERNAL_REL
                        class=social_class
                        aria-label="My Twitter profile"
                        title="My Twitter profile"
                    >
                        <LinkedIn />
                    </a>
                </li>
                <li>
                    <a
                        href="https://github.com/sylvaincodes"
                        target=EXTERNAL_TARGET
                        rel=EXTERNAL_REL
                        class=social_class
                        aria-label="My GitHub profile"
                        title="My GitHub profile"
                    >
                        <GitHub />
                    </a>
                </li>
                <li>
                    <a
                        href="https://wakatime.com/@Gudwin_786"
                        target=EXTERNAL_TARGET
                        rel=EXTERNAL_REL
                        class=social_class
                        aria-label="My Figma profile"
                        title="My Waka Time Profile"
                    >
                        <WakaTime />
                    </a>
                </li>
            </ul>
        </div>
    }
}

#[component]
fn LastUpdate() -> impl IntoView {
    view! {
        <a
            href="https://github.com/GudwinNayak-9284"
            target=EXTERNAL_TARGET
            rel=EXTERNAL_REL
            class="hover:underline"
        >
            <span>"see the recent update on GitHub"</span>
        </a>
    }
}

/// Page footer. The copyright year defaults to the wall clock but can be
/// supplied directly.
#[component]
pub fn Footer(#[prop(optional)] year: Option<i32>) -> impl IntoView {
    let year = year.unwrap_or_else(current_year);
    view! {
        <footer class="border-t border-slate-200 dark:border-slate-800">
            <div class="mx-auto w-full max-w-5xl px-4">
                <div class="py-10 font-semibold">
                    <div class="flex flex-col-reverse gap-16 lg:flex-row">
                        <div class="flex-1">
                            <FooterDescription />
                        </div>
                        <div class="-mx-2 flex flex-1 flex-col gap-8 sm:flex-row sm:gap-16 lg:mx-0">
                            <div class="flex sm:gap-16">
                                <FooterGroup title="Work" links=WORK_LINKS />
                                <FooterGroup title="Learn" links=LEARN_LINKS />
                            </div>
                            <div class="flex sm:gap-16">
                                <FooterGroup title="This Site" links=SITE_LINKS />
                            </div>
                        </div>
                    </div>
                </div>
                <div class="flex justify-between border-t border-slate-200 dark:border-slate-800 py-6 text-xs">
                    <div class="font-semibold">{copyright(year)}</div>
                    <div class="text-slate-500 dark:text-slate-400">
                        <LastUpdate />
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn all_links() -> impl Iterator<Item = &'static FooterLink> {
        WORK_LINKS.iter().chain(LEARN_LINKS).chain(SITE_LINKS)
    }

    #[test]
    fn real_destinations_are_unique_across_groups() {
        let hrefs: Vec<_> = all_links()
            .map(|link| link.href)
            .filter(|href| *href != "#")
            .collect();
        let mut deduped = hrefs.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(hrefs.len(), deduped.len());
    }

    #[test]
    fn placeholder_hrefs_repeat_so_list_keys_include_the_index() {
        let placeholders = WORK_LINKS.iter().filter(|link| link.href == "#").count();
        assert!(placeholders > 1);
    }

    #[test]
    fn empty_group_yields_zero_entries() {
        assert_eq!(keyed_links(&[]).count(), 0);
        assert_eq!(keyed_links(WORK_LINKS).count(), WORK_LINKS.len());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn empty_group_renders_title_with_no_items() {
        let html = view! { <FooterGroup title="Elsewhere" links=&[] /> }.to_html();
        assert!(html.contains("Elsewhere"));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn badge_class_uppercases_label_text() {
        assert!(BADGE_CLASS.contains("uppercase"));
    }

    #[test]
    fn only_the_source_code_link_leaves_the_site() {
        let external: Vec<_> = WORK_LINKS
            .iter()
            .chain(LEARN_LINKS)
            .chain(SITE_LINKS)
            .filter(|link| link.rendering() == LinkRendering::External)
            .collect();
        assert_eq!(external.len(), 1);
        assert_eq!(external[0].href, "https://github.com/sylvaincodes");
    }
}
