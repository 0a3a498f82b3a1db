use crate::templates::components::error_notice;
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};

#[derive(Default)]
pub struct LoginVm {
    /// Path to bounce back to after signing in.
    pub return_url: Option<String>,
    pub login_error: Option<String>,
    pub signup_error: Option<String>,
    /// Refilled after a failed attempt.
    pub email: Option<String>,
}

pub fn login_page(vm: &LoginVm, nav: &NavVm) -> Markup {
    desktop_layout(
        "Landlord sign in",
        nav,
        html! {
            main class="container" {
                div class="auth-columns" {
                    section class="card auth-card" {
                        h1 { "Sign in" }
                        p class="lead" { "Manage your listings, billing and account." }
                        @if let Some(message) = &vm.login_error {
                            (error_notice(message))
                        }
                        form action="/landlord/login" method="post" {
                            @if let Some(url) = &vm.return_url {
                                input type="hidden" name="returnUrl" value=(url);
                            }
                            label class="form-field" {
                                span { "Email" }
                                input type="email" name="email" value=[vm.email.as_deref()] required;
                            }
                            label class="form-field" {
                                span { "Password" }
                                input type="password" name="password" required;
                            }
                            button type="submit" class="btn" { "Sign in" }
                        }
                    }

                    section class="card auth-card" {
                        h2 { "New here? Create an account" }
                        p class="lead" { "Post your first listing in a few minutes." }
                        @if let Some(message) = &vm.signup_error {
                            (error_notice(message))
                        }
                        form action="/landlord/signup" method="post" {
                            @if let Some(url) = &vm.return_url {
                                input type="hidden" name="returnUrl" value=(url);
                            }
                            div class="form-row" {
                                label class="form-field" {
                                    span { "First name" }
                                    input type="text" name="first_name";
                                }
                                label class="form-field" {
                                    span { "Last name" }
                                    input type="text" name="last_name";
                                }
                            }
                            label class="form-field" {
                                span { "Email" }
                                input type="email" name="email" required;
                            }
                            label class="form-field" {
                                span { "Phone" }
                                input type="tel" name="contact_number";
                            }
                            label class="form-field" {
                                span { "Password" }
                                input type="password" name="password" minlength="8" required;
                            }
                            button type="submit" class="btn" { "Create account" }
                        }
                    }
                }
            }
        },
    )
}
