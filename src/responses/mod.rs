pub mod assets;
pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::error_to_response;
pub use html::{html_response, html_with_status};
pub use redirect::{see_other, see_other_with_cookie};
