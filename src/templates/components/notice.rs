use maud::{html, Markup};

pub fn notice(message: &str) -> Markup {
    html! {
        div class="notice" role="status" { (message) }
    }
}

pub fn error_notice(message: &str) -> Markup {
    html! {
        div class="notice error" role="alert" { (message) }
    }
}
