pub mod auth;
mod footer;
pub mod home;
pub mod protected;

pub use auth::{SignInPage, SignUpPage};
pub use footer::Footer;
pub use home::HomePage;
pub use protected::ProtectedPage;
