pub mod icons;

mod classes;
mod dark_mode;
mod link;
mod nav_icon;

pub use classes::compose_classes;
pub use dark_mode::DarkModeToggle;
pub use link::{FooterLink, LinkLabel, LinkRendering, EXTERNAL_REL, EXTERNAL_TARGET};
pub use nav_icon::{nav_aria_label, nav_title, NavIcon};

use chrono::{Datelike, Local};

/// Current year from the local wall clock. The footer copyright defaults to
/// this but takes the year as a prop so rendering stays testable.
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn copyright(year: i32) -> String {
    format!("© {year}, Gudwin Nayak")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn copyright_line_carries_the_injected_year() {
        assert_eq!(copyright(2031), "© 2031, Gudwin Nayak");
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
