use carrefour::route::prelude::*;

use maud::html;

pub struct Home;

impl View for Home {
    fn render(&self, _ctx: &mut ViewContext) -> RenderResult {
        html! {
            h1 { "Home" }
            a href="/students" { "Browse the student directory" }
        }
        .into()
    }
}
