use chrono::Datelike;
use maud::{DOCTYPE, Markup, html};

use super::{RenderContext, Text};

/// Path the page script is served from.
pub const HOME_SCRIPT_PATH: &str = "/static/js/home.js";

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

const APP_NAME: Text = Text::new("general_app_name", "Ficore Africa");
const FOOTER_RIGHTS: Text = Text::new("general_footer_rights", "All rights reserved.");

/// Wraps a page body in the site's document shell.
pub fn page(ctx: &RenderContext<'_>, title: &str, body: Markup) -> Markup {
    let app_name = ctx.tr(APP_NAME);
    let year = chrono::Utc::now().year();

    html! {
        (DOCTYPE)
        html lang=(ctx.locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
            }
            body {
                main { (body) }
                footer class="footer bg-light py-4 mt-5" {
                    div class="container text-center text-muted" {
                        "© " (year) " " (app_name) ". " (ctx.tr(FOOTER_RIGHTS))
                    }
                }
                script src=(BOOTSTRAP_JS) {}
                script src=(HOME_SCRIPT_PATH) {}
            }
        }
    }
}
