use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PAGE_CSS) }
            }
            body {
              header {
                  h3 { "Rentals" }
                  nav {
                      ul {
                          li { a href="/" { "Listings" } }
                          li { a href="/settings" { "Settings" } }
                      }
                  }
              }
                main { (content) }
            }
        }
    }
}

const PAGE_CSS: &str = "
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; }
header { display: flex; align-items: center; justify-content: space-between; }
header ul { display: flex; gap: 1rem; list-style: none; }
.properties p { margin: 0.4rem 0; }
.properties p.favorite { font-weight: 600; }
.properties p.dismissed { opacity: 0.5; }
.error { color: #a40000; }
";
