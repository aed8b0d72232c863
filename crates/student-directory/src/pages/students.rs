use carrefour::route::prelude::*;

use maud::html;

const ROSTER: [&str; 3] = ["Ada Lovelace", "Grace Hopper", "Katherine Johnson"];

pub struct Students;

impl View for Students {
    fn render(&self, ctx: &mut ViewContext) -> RenderResult {
        html! {
            h1 { (ctx.name) }
            ul {
                @for student in ROSTER {
                    li { (student) }
                }
            }
            a href="/" { "Back home" }
        }
        .into()
    }
}
