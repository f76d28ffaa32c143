#![forbid(unsafe_code)]

use crate::AdminNotice;
use cpt_core::text::{escape_html, sanitize_plain_text};
use cpt_storage::CustomTextStore;
use serde::Deserialize;
use serde_json::Value;

// The hosted post type whose titles get decorated.
pub const POST_TYPE: &str = "post";

#[derive(Debug, Deserialize)]
pub struct SavePostInput {
    pub custom_text: Option<String>,
}

// What the host knows about the page being rendered when the title filter
// fires. Only a singular view of the hosted post type gets decorated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderContext {
    pub is_single: bool,
    pub post_type: String,
}

impl RenderContext {
    pub fn single_post() -> Self {
        Self {
            is_single: true,
            post_type: POST_TYPE.to_string(),
        }
    }
}

// Post-save hook. A submission without a custom_text field writes nothing.
// On failure the stored text is untouched and the submitted value rides back
// on the notice so the form can offer a retry.
pub fn handle_post_save(
    store: &mut CustomTextStore,
    post_id: i64,
    form: &Value,
) -> Option<AdminNotice> {
    if !form.is_object() {
        return None;
    }
    let input: SavePostInput = match serde_json::from_value(form.clone()) {
        Ok(input) => input,
        Err(_) => return Some(AdminNotice::error("Custom text field is malformed.")),
    };
    let Some(raw) = input.custom_text else {
        return None;
    };

    let text = sanitize_plain_text(&raw);
    match store.put(post_id, &text) {
        Ok(()) => None,
        Err(err) => Some(AdminNotice::error_with_input(
            format!("Custom text was not saved: {err}"),
            raw,
        )),
    }
}

// Title filter. Must never break page rendering: a failed read and an absent
// entry produce the same bare title.
pub fn render_title(
    store: &CustomTextStore,
    post_id: i64,
    title: &str,
    ctx: &RenderContext,
) -> String {
    if !ctx.is_single || ctx.post_type != POST_TYPE {
        return title.to_string();
    }

    match store.get(post_id) {
        Ok(Some(text)) if !text.is_empty() => {
            format!("{title}<p>{}</p>", escape_html(&text))
        }
        _ => title.to_string(),
    }
}
