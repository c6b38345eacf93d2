//! Server-rendered HTML for the single page.

use crate::html::escape;
use crate::models::GeminiModel;
use crate::preview::PreviewLayout;

pub const TITLE: &str = "Running session image to json";
pub const UPLOAD_LABEL: &str = "러닝 세션 이미지 파일을 업로드해주세요";
pub const TRIGGER_LABEL: &str = "Change to JSON";
pub const SPINNER_TEXT: &str = "Now changing to JSON...";

/// Everything the page shows for one request.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub model: GeminiModel,
    pub preview: Option<PreviewLayout>,
    pub result: Option<String>,
}

fn model_options(selected: GeminiModel) -> String {
    GeminiModel::all()
        .into_iter()
        .map(|m| {
            format!(
                r#"<option value="{id}" data-info="{info}"{sel}>{id}</option>"#,
                id = m.as_str(),
                info = escape(m.info()),
                sel = if m == selected { " selected" } else { "" },
            )
        })
        .collect()
}

const STYLE: &str = r#"
body{margin:0;font-family:sans-serif;display:flex;min-height:100vh}
aside{width:16rem;padding:1.5rem;background:#f0f2f6}
main{flex:1;padding:1.5rem 2rem}
.info{background:#e8f0fe;border-radius:.4rem;padding:.6rem;margin-top:.6rem}
.preview{display:flex;gap:1rem;margin:1rem 0}
.preview-col img{display:block}
#spinner{display:none;margin:1rem 0}
form.busy #spinner{display:block}
pre.result{white-space:pre-wrap;background:#f7f7f9;padding:1rem;border-radius:.4rem}
"#;

const SCRIPT: &str = r#"
document.getElementById('model').addEventListener('change', function (e) {
  var opt = e.target.options[e.target.selectedIndex];
  document.getElementById('model-info').textContent = opt.dataset.info;
});
document.getElementById('session').addEventListener('submit', function (e) {
  if (e.submitter && e.submitter.value === 'convert') {
    e.target.classList.add('busy');
    e.target.querySelectorAll('button').forEach(function (b) { b.disabled = true; });
    var action = document.createElement('input');
    action.type = 'hidden'; action.name = 'action'; action.value = 'convert';
    e.target.appendChild(action);
  }
});
"#;

/// Render the full page.
///
/// The trigger button only appears once at least one image is previewed.
pub fn render(view: &PageView) -> String {
    let preview_html = view
        .preview
        .as_ref()
        .map(|layout| {
            format!(
                r#"{columns}{hidden}<button type="submit" name="action" value="convert">{trigger}</button><div id="spinner" role="status">{spinner}</div>"#,
                columns = layout.to_html(),
                hidden = layout.to_hidden_inputs(),
                trigger = TRIGGER_LABEL,
                spinner = SPINNER_TEXT,
            )
        })
        .unwrap_or_default();

    let result_html = view
        .result
        .as_ref()
        .map(|text| format!(r#"<pre class="result">{}</pre>"#, escape(text)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<form id="session" method="post" action="/" enctype="multipart/form-data" style="display:contents">
<aside>
<h2>Model Selection</h2>
<label for="model">Model</label>
<select id="model" name="model">{options}</select>
<div id="model-info" class="info">{info}</div>
</aside>
<main>
<h1>{title}</h1>
<label for="image">{upload_label}</label>
<input id="image" type="file" name="image" accept=".jpg,.jpeg,.png,image/jpeg,image/png" multiple>
<button type="submit" name="action" value="preview">Upload</button>
{preview}
{result}
</main>
</form>
<script>{script}</script>
</body>
</html>
"#,
        title = TITLE,
        style = STYLE,
        options = model_options(view.model),
        info = escape(view.model.info()),
        upload_label = UPLOAD_LABEL,
        preview = preview_html,
        result = result_html,
        script = SCRIPT,
    )
}
