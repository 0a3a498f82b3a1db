use crate::domain::user::AuthUser;
use crate::templates::components::{error_notice, notice};
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};

#[derive(Default)]
pub struct SettingsVm {
    pub user: AuthUser,
    pub profile_saved: bool,
    pub profile_error: Option<String>,
    pub password_changed: bool,
    pub password_error: Option<String>,
}

pub fn settings_page(vm: &SettingsVm, nav: &NavVm) -> Markup {
    let user = &vm.user;
    desktop_layout(
        "Account settings",
        nav,
        html! {
            main class="container narrow" {
                h1 { "Account settings" }

                section class="card" {
                    h3 { "Profile" }
                    @if vm.profile_saved {
                        (notice("Profile saved."))
                    }
                    @if let Some(message) = &vm.profile_error {
                        (error_notice(message))
                    }
                    form action="/landlord/settings/profile" method="post" {
                        label class="form-field" {
                            span { "Email" }
                            input type="email" value=(user.email) disabled;
                        }
                        div class="form-row" {
                            label class="form-field" {
                                span { "First name" }
                                input type="text" name="first_name" value=[user.first_name.as_deref()];
                            }
                            label class="form-field" {
                                span { "Last name" }
                                input type="text" name="last_name" value=[user.last_name.as_deref()];
                            }
                        }
                        label class="form-field" {
                            span { "Display name" }
                            input type="text" name="username" value=[user.username.as_deref()];
                        }
                        div class="form-row" {
                            label class="form-field" {
                                span { "Company" }
                                input type="text" name="company" value=[user.company.as_deref()];
                            }
                            label class="form-field" {
                                span { "Phone" }
                                input type="tel" name="contact_number" value=[user.contact_number.as_deref()];
                            }
                        }
                        button type="submit" class="btn" { "Save profile" }
                    }
                }

                section class="card" {
                    h3 { "Change password" }
                    @if vm.password_changed {
                        (notice("Password changed."))
                    }
                    @if let Some(message) = &vm.password_error {
                        (error_notice(message))
                    }
                    form action="/landlord/settings/password" method="post" {
                        label class="form-field" {
                            span { "Current password" }
                            input type="password" name="current_password" required;
                        }
                        label class="form-field" {
                            span { "New password" }
                            input type="password" name="new_password" minlength="8" required;
                        }
                        label class="form-field" {
                            span { "Confirm new password" }
                            input type="password" name="confirm_password" minlength="8" required;
                        }
                        button type="submit" class="btn" { "Change password" }
                    }
                }
            }
        },
    )
}
