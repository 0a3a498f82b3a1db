use maud::{html, Markup};
use url::form_urlencoded;

/// Embedded map for a free-text address. The listing form swaps this
/// in under the address field while the landlord types.
pub fn map_preview(address: &str) -> Markup {
    html! {
        div id="map-preview" class="map-preview" {
            @if address.trim().is_empty() {
                p class="map-hint" { "Start typing an address to preview the map." }
            } @else {
                iframe
                    src=(map_embed_url(address))
                    title="Map preview"
                    width="100%"
                    height="260"
                    style="border: 0; border-radius: 8px;"
                    loading="lazy" {}
            }
        }
    }
}

fn map_embed_url(address: &str) -> String {
    let query: String = form_urlencoded::byte_serialize(address.trim().as_bytes()).collect();
    format!("https://maps.google.com/maps?q={query}&t=&z=15&ie=UTF8&iwloc=&output=embed")
}
