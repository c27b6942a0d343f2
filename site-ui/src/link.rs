/// Attributes every external link must carry so the opened page can't reach
/// back to the opener and crawlers don't follow outbound profile links.
pub const EXTERNAL_TARGET: &str = "_blank";
pub const EXTERNAL_REL: &str = "noreferrer nofollow";

/// Status badge on a footer link. `Soon` also disables navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkLabel {
    New,
    Soon,
}

impl LinkLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            LinkLabel::New => "new",
            LinkLabel::Soon => "soon",
        }
    }
}

/// How a footer link renders, decided once per link rather than branching
/// through the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkRendering {
    /// Inert text with a badge, no navigation.
    Disabled,
    /// Same-site navigation through the router.
    Internal,
    /// New browsing context with [`EXTERNAL_TARGET`] and [`EXTERNAL_REL`].
    External,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub title: &'static str,
    pub href: &'static str,
    pub label: Option<LinkLabel>,
    pub is_internal: bool,
}

impl FooterLink {
    pub const fn internal(title: &'static str, href: &'static str) -> Self {
        Self {
            title,
            href,
            label: None,
            is_internal: true,
        }
    }

    pub const fn external(title: &'static str, href: &'static str) -> Self {
        Self {
            title,
            href,
            label: None,
            is_internal: false,
        }
    }

    pub const fn with_label(self, label: LinkLabel) -> Self {
        Self {
            title: self.title,
            href: self.href,
            label: Some(label),
            is_internal: self.is_internal,
        }
    }

    /// A `Soon` badge wins over everything else, the link must not navigate.
    pub const fn rendering(self) -> LinkRendering {
        match self.label {
            Some(LinkLabel::Soon) => LinkRendering::Disabled,
            _ => {
                if self.is_internal {
                    LinkRendering::Internal
                } else {
                    LinkRendering::External
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn soon(is_internal: bool, href: &'static str) -> FooterLink {
        FooterLink {
            title: "Studio",
            href,
            label: Some(LinkLabel::Soon),
            is_internal,
        }
    }

    #[test]
    fn soon_label_always_disables_navigation() {
        assert_eq!(soon(true, "/studio").rendering(), LinkRendering::Disabled);
        assert_eq!(
            soon(false, "https://example.com").rendering(),
            LinkRendering::Disabled
        );
        assert_eq!(soon(true, "#").rendering(), LinkRendering::Disabled);
    }

    #[test]
    fn links_are_internal_by_default() {
        let link = FooterLink::internal("Contact", "/contact");
        assert_eq!(link.rendering(), LinkRendering::Internal);
        assert_eq!(link.href, "/contact");
        assert!(link.label.is_none());
    }

    #[test]
    fn new_label_keeps_links_navigable() {
        let internal = FooterLink::internal("T.I.L", "#").with_label(LinkLabel::New);
        assert_eq!(internal.rendering(), LinkRendering::Internal);

        let external = FooterLink::external("Source Code", "https://github.com/sylvaincodes")
            .with_label(LinkLabel::New);
        assert_eq!(external.rendering(), LinkRendering::External);
    }

    #[test]
    fn external_links_open_in_a_new_context() {
        let link = FooterLink::external("Source Code", "https://github.com/sylvaincodes");
        assert_eq!(link.rendering(), LinkRendering::External);
        assert_eq!(EXTERNAL_TARGET, "_blank");
        assert!(EXTERNAL_REL.contains("noreferrer"));
        assert!(EXTERNAL_REL.contains("nofollow"));
    }

    #[test]
    fn badge_text_is_lowercase_in_the_source() {
        // uppercase comes from the badge's CSS class
        assert_eq!(LinkLabel::New.as_str(), "new");
        assert_eq!(LinkLabel::Soon.as_str(), "soon");
    }
}
