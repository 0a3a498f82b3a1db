use maud::{html, Markup, PreEscaped};

// Reads the chosen file into the hidden data-url field and seeds the
// crop box with the image's natural size.
const FILE_READER_JS: &str = r#"
document.addEventListener('change', function (event) {
  if (event.target.id !== 'photo-file') return;
  var file = event.target.files[0];
  if (!file) return;
  var reader = new FileReader();
  reader.onload = function () {
    document.getElementById('photo-data').value = reader.result;
    var probe = new Image();
    probe.onload = function () {
      document.getElementById('crop-width').value = probe.naturalWidth;
      document.getElementById('crop-height').value = probe.naturalHeight;
    };
    probe.src = reader.result;
  };
  reader.readAsDataURL(file);
});
"#;

/// Rotate, flip and crop panel for listing photos. Submits over htmx
/// and swaps the processed image into `#crop-result`.
pub fn photo_editor() -> Markup {
    html! {
        section class="card photo-editor" {
            h3 { "Photo editor" }
            p class="hint" { "Straighten and crop a photo before adding it to your listing." }
            form hx-post="/landlord/photos/crop" hx-target="#crop-result" hx-swap="innerHTML" {
                input type="hidden" id="photo-data" name="image";
                label class="filter-field" {
                    span { "Photo" }
                    input type="file" id="photo-file" accept="image/*";
                }
                div class="editor-controls" {
                    label class="filter-field" {
                        span { "Rotate" }
                        select name="rotate" {
                            option value="0" { "None" }
                            option value="90" { "90\u{00b0} right" }
                            option value="180" { "180\u{00b0}" }
                            option value="270" { "90\u{00b0} left" }
                        }
                    }
                    label class="check-field" {
                        input type="checkbox" name="flip_h";
                        " Flip horizontally"
                    }
                    label class="check-field" {
                        input type="checkbox" name="flip_v";
                        " Flip vertically"
                    }
                }
                div class="editor-controls" {
                    label class="filter-field" {
                        span { "Crop X" }
                        input type="number" name="x" value="0" min="0";
                    }
                    label class="filter-field" {
                        span { "Crop Y" }
                        input type="number" name="y" value="0" min="0";
                    }
                    label class="filter-field" {
                        span { "Width" }
                        input type="number" id="crop-width" name="width" value="0" min="0";
                    }
                    label class="filter-field" {
                        span { "Height" }
                        input type="number" id="crop-height" name="height" value="0" min="0";
                    }
                }
                button type="submit" class="btn" { "Apply" }
            }
            div id="crop-result" class="crop-result" {}
            script { (PreEscaped(FILE_READER_JS)) }
        }
    }
}

/// The fragment swapped into `#crop-result` after a successful edit.
pub fn crop_result(data_url: &str, width: u32, height: u32) -> Markup {
    html! {
        figure class="crop-output" {
            img src=(data_url) alt="Edited photo";
            figcaption { (width) " x " (height) " px. Right-click the image to save it." }
        }
    }
}

pub fn crop_failed(message: &str) -> Markup {
    html! {
        div class="notice error" role="alert" { (message) }
    }
}
