#![forbid(unsafe_code)]

use crate::AdminNotice;
use crate::support::post_id_field;
use cpt_core::text::{escape_html, sanitize_plain_text};
use cpt_storage::CustomTextStore;
use serde_json::Value;
use std::fmt::Write as _;

pub const PAGE_SLUG: &str = "custom-post-text-settings";

const DELETE_CONFIRM: &str = "Are you sure you want to delete the custom text?";

// What the host needs to register the management screen in its admin menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuRegistration {
    pub page_title: &'static str,
    pub menu_title: &'static str,
    pub capability: &'static str,
    pub slug: &'static str,
}

pub fn menu() -> MenuRegistration {
    MenuRegistration {
        page_title: "Custom Post Text Settings",
        menu_title: "Custom Post Text",
        capability: "manage_options",
        slug: PAGE_SLUG,
    }
}

// Host seam: the listing resolves post titles through the host's post
// storage, which this plugin does not own.
pub trait PostTitles {
    fn title(&self, post_id: i64) -> Option<String>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminPage {
    pub html: String,
    pub notices: Vec<AdminNotice>,
}

// Renders the management screen. A query with a post_id routes to the per-post
// edit form, otherwise the listing. The notice from a just-handled action is
// threaded through so a failed save can re-render the form with the submitted
// text. Read failures degrade to an error notice over an empty body; the
// screen itself always renders.
pub fn render_page(
    store: &CustomTextStore,
    titles: &dyn PostTitles,
    query: &Value,
    notice: Option<AdminNotice>,
) -> AdminPage {
    let retained = notice
        .as_ref()
        .and_then(|notice| notice.retained_text.clone());
    let mut notices: Vec<AdminNotice> = notice.into_iter().collect();

    let body = match post_id_field(query.get("post_id")) {
        Ok(Some(post_id)) => edit_form(store, titles, post_id, retained, &mut notices),
        Ok(None) => listing(store, titles, &mut notices),
        Err(()) => {
            notices.push(AdminNotice::error("Request carries an invalid post_id."));
            String::new()
        }
    };

    let mut html = String::new();
    let _ = writeln!(html, "<div class=\"wrap\">");
    let _ = writeln!(html, "<h1>Custom Post Text Settings</h1>");
    html.push_str(&body);
    let _ = writeln!(html, "</div>");

    AdminPage { html, notices }
}

// Admin action handler, run before the page renders. Covers the edit form's
// save submit and the listing's delete link.
pub fn handle_admin_action(
    store: &mut CustomTextStore,
    form: &Value,
    query: &Value,
) -> Option<AdminNotice> {
    if form.get("save_custom_text").is_some() {
        return Some(save_from_form(store, form));
    }

    if query.get("action").and_then(Value::as_str) == Some("delete") {
        return Some(delete_from_query(store, query));
    }

    None
}

fn save_from_form(store: &mut CustomTextStore, form: &Value) -> AdminNotice {
    let raw = form.get("custom_text").and_then(Value::as_str).unwrap_or("");
    let post_id = match post_id_field(form.get("post_id")) {
        Ok(Some(post_id)) => post_id,
        Ok(None) | Err(()) => {
            return AdminNotice::error_with_input("Save request is missing a valid post_id.", raw);
        }
    };

    let text = sanitize_plain_text(raw);
    match store.put(post_id, &text) {
        Ok(()) => AdminNotice::success("Custom text saved."),
        Err(err) => AdminNotice::error_with_input(format!("Custom text was not saved: {err}"), raw),
    }
}

fn delete_from_query(store: &mut CustomTextStore, query: &Value) -> AdminNotice {
    let post_id = match post_id_field(query.get("post_id")) {
        Ok(Some(post_id)) => post_id,
        Ok(None) | Err(()) => {
            return AdminNotice::error("Delete request is missing a valid post_id.");
        }
    };

    // Deleting an absent entry is a no-op in the store, so repeated clicks on
    // a stale link stay harmless.
    match store.delete(post_id) {
        Ok(()) => AdminNotice::success("Custom text deleted."),
        Err(err) => AdminNotice::error(format!("Custom text was not deleted: {err}")),
    }
}

fn edit_form(
    store: &CustomTextStore,
    titles: &dyn PostTitles,
    post_id: i64,
    retained: Option<String>,
    notices: &mut Vec<AdminNotice>,
) -> String {
    let current = match retained {
        Some(text) => text,
        None => match store.get(post_id) {
            Ok(text) => text.unwrap_or_default(),
            Err(err) => {
                notices.push(AdminNotice::error(format!(
                    "Custom text could not be loaded: {err}"
                )));
                String::new()
            }
        },
    };
    let post_title = titles
        .title(post_id)
        .unwrap_or_else(|| format!("Post #{post_id}"));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<h2>Edit Custom Text for: <strong>{}</strong></h2>",
        escape_html(&post_title)
    );
    let _ = writeln!(out, "<form method=\"post\" action=\"\">");
    let _ = writeln!(out, "<label for=\"custom_text\">Custom Text:</label>");
    let _ = writeln!(
        out,
        "<input type=\"text\" name=\"custom_text\" id=\"custom_text\" value=\"{}\" style=\"width: 100%;\">",
        escape_html(&current)
    );
    let _ = writeln!(
        out,
        "<input type=\"hidden\" name=\"post_id\" value=\"{post_id}\">"
    );
    let _ = writeln!(
        out,
        "<input type=\"submit\" name=\"save_custom_text\" class=\"button-primary\" value=\"Save Custom Text\">"
    );
    let _ = writeln!(out, "</form>");
    out
}

fn listing(
    store: &CustomTextStore,
    titles: &dyn PostTitles,
    notices: &mut Vec<AdminNotice>,
) -> String {
    let entries = match store.list_all() {
        Ok(entries) => entries,
        Err(err) => {
            notices.push(AdminNotice::error(format!(
                "Custom text entries could not be loaded: {err}"
            )));
            Vec::new()
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "<h2>Custom Text Management</h2>");
    let _ = writeln!(out, "<table class=\"widefat\">");
    let _ = writeln!(
        out,
        "<thead><tr><th>Post ID</th><th>Post Title</th><th>Custom Text</th><th>Action</th></tr></thead>"
    );
    let _ = writeln!(out, "<tbody>");

    for entry in &entries {
        let post_title = titles
            .title(entry.post_id)
            .unwrap_or_else(|| format!("Post #{}", entry.post_id));
        let _ = writeln!(
            out,
            "<tr><td>{id}</td><td>{title}</td><td>{text}</td><td>\
             <a href=\"?page={slug}&amp;post_id={id}&amp;action=edit\">Edit</a> | \
             <a href=\"?page={slug}&amp;post_id={id}&amp;action=delete\" \
             onclick=\"return confirm('{confirm}');\">Delete</a></td></tr>",
            id = entry.post_id,
            title = escape_html(&post_title),
            text = escape_html(&entry.text),
            slug = PAGE_SLUG,
            confirm = DELETE_CONFIRM,
        );
    }

    let _ = writeln!(out, "</tbody>");
    let _ = writeln!(out, "</table>");
    out
}
