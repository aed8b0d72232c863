mod pages;

use carrefour::route::prelude::*;
use carrefour::routes;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    carrefour::init_logging();

    let mut router = Router::new(
        routes![
            RouteDefinition::new("/", "Home", pages::Home),
            RouteDefinition::new("/students", "Students", pages::Students),
        ],
        HistoryMode::Web,
    )?;

    print_current(&router);

    router.push("/students")?;
    print_current(&router);

    router.back()?;
    print_current(&router);

    Ok(())
}

fn print_current(router: &Router) {
    if let Some(RenderResult::Text(html)) = router.render_current() {
        println!("{}\n{}\n", router.visible_location(), html);
    }
}
