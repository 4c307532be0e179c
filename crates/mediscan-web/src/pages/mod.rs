//! Site pages

mod home;
mod upload;
mod results;
mod about;

pub use home::HomePage;
pub use upload::UploadPage;
pub use results::ResultsPage;
pub use about::AboutPage;
