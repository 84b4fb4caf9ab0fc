use maud::{html, Markup, DOCTYPE};

/// Page shell. `saved_count` feeds the header badge.
pub fn desktop_layout(title: &str, saved_count: usize, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Property Finder" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
              header class="site-header" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#1976d2"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      span { "PROPERTY FINDER" }
                  }
                  nav {
                      ul {
                          li { a href="/" { "Listings" } }
                          li {
                              a href="/saved" {
                                  "Saved"
                                  @if saved_count > 0 {
                                      " " span class="badge" { (saved_count) }
                                  }
                              }
                          }
                      }
                  }
              }
              main class="container" {
                  (content)
              }
            }
        }
    }
}
