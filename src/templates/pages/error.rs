use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full error page. Rendered without nav state, so the chrome shows
/// the signed-out header.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        &NavVm::default(),
        html! {
            main class="container narrow" {
                h1 { "Error " (status) }
                p class="lead" { (message) }
                p { a href="/" { "Back to home" } }
            }
        },
    )
}
