// src/core/dork.rs
//
// Form → query string. Input is copied through verbatim: a `"` typed into a
// field ends up unescaped in the query and will break its grouping.
use crate::config::consts::SEARCH_URL;
use crate::form::FormState;

/// `("<product>") (site:<d1> OR site:<d2>) ("<g1>" OR "<g2>") <keywords>`
pub fn assemble(form: &FormState) -> String {
    let sites = form.domain_suffixes.join(" OR site:");

    let gateways = form
        .selected_gateways
        .iter()
        .map(String::as_str)
        .chain(form.custom_gateway_term())
        .map(|g| join!("\"", g, "\""))
        .collect::<Vec<_>>()
        .join(" OR ");

    let mut dork = join!("(\"", &form.product_name, "\") (site:", &sites, ") (", &gateways, ")");

    if !form.free_keywords.is_empty() {
        dork.push(' ');
        dork.push_str(&form.free_keywords);
    }
    dork
}

/// Search URL with the dork as the `q` parameter.
pub fn search_url(dork: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(s!())
        .append_pair("q", dork)
        .finish();
    join!(SEARCH_URL, "?", &query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_verbatim() {
        let mut f = FormState::empty();
        f.free_keywords = s!("  inurl:checkout  ");
        assert_eq!(assemble(&f), "(\"\") (site:) ()   inurl:checkout  ");
    }

    #[test]
    fn quotes_are_not_escaped() {
        let mut f = FormState::empty();
        f.product_name = s!("12\" TV");
        assert!(assemble(&f).starts_with("(\"12\" TV\")"));
    }
}
