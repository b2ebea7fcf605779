// Landing page sections

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::{NavBar, NavPhase, NavTheme, SCROLL_THRESHOLD};
pub use services::Services;
