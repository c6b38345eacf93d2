//! Column-per-image preview layout.

use serde::Serialize;

use crate::html::escape;
use crate::types::UploadedImage;

/// One display column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewColumn {
    pub index: usize,
    pub name: String,
    pub width_percent: f64,
    pub aspect_ratio: f64,
    pub data_uri: String,
}

/// N equal-width columns, one image each, in upload order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewLayout {
    pub columns: Vec<PreviewColumn>,
}

impl PreviewLayout {
    /// Lay out `images`; `None` when there is nothing to show.
    pub fn from_images(images: &[UploadedImage]) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let width_percent = 100.0 / images.len() as f64;
        let columns = images
            .iter()
            .enumerate()
            .map(|(index, img)| PreviewColumn {
                index,
                name: img.name.clone(),
                width_percent,
                aspect_ratio: img.aspect_ratio(),
                data_uri: img.data_uri(),
            })
            .collect();
        Some(Self { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Render as a flex row; each image fills its column width and keeps its aspect ratio.
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="preview">"#);
        for col in &self.columns {
            html.push_str(&format!(
                r#"<div class="preview-col" data-index="{index}" style="flex:0 0 {width:.4}%;max-width:{width:.4}%"><img src="{src}" alt="{name}" title="{name}" style="width:100%;height:auto;aspect-ratio:{ratio:.4}"></div>"#,
                index = col.index,
                width = col.width_percent,
                src = col.data_uri,
                name = escape(&col.name),
                ratio = col.aspect_ratio,
            ));
        }
        html.push_str("</div>");
        html
    }

    /// Hidden form fields that re-post the previewed images with the trigger.
    pub fn to_hidden_inputs(&self) -> String {
        self.columns
            .iter()
            .map(|col| {
                format!(
                    r#"<input type="hidden" name="image_name" value="{}"><input type="hidden" name="image_data" value="{}">"#,
                    escape(&col.name),
                    col.data_uri
                )
            })
            .collect()
    }
}
