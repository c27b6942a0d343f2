mod blog;
mod contact;
mod error_template;
mod footer;
mod header;
mod home;
mod root;

pub use root::App;

#[cfg(feature = "ssr")]
pub use root::shell;
