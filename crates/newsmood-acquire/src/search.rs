use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Video-hosting sites kept out of results; their pages carry no article text.
pub const BLOCKED_SITES: [&str; 2] = ["youtube.com", "vimeo.com"];

/// Candidate URLs gathered per run unless told otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 100;

const DDG_HTML_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Result pages requested before giving up on reaching `max_results`.
const MAX_PAGES: usize = 10;

/// Turns a query into candidate article URLs.
///
/// Best effort: implementations return at most `max_results` URLs in provider
/// order and swallow their own failures, returning whatever was gathered.
#[async_trait]
pub trait ResultProvider: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Vec<String>;
}

/// Append one `-site:` exclusion per blocked domain.
pub fn build_search_query(query: &str) -> String {
    let exclusions: Vec<String> = BLOCKED_SITES.iter().map(|s| format!("-site:{s}")).collect();
    format!("{query} {}", exclusions.join(" "))
}

/// True when the URL's host is a blocked site or one of its subdomains.
pub fn is_blocked(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    BLOCKED_SITES
        .iter()
        .any(|site| host == *site || host.ends_with(&format!(".{site}")))
}

/// DuckDuckGo's no-JavaScript HTML endpoint.
#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, DDG_HTML_ENDPOINT)
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    async fn fetch_results_page(&self, form: &[(String, String)]) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(form)
            .header("Accept", "text/html")
            .send()
            .await
            .context("Failed to reach search provider")?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "HTTP {status} from search provider");

        response.text().await.context("Failed to read search results")
    }
}

#[async_trait]
impl ResultProvider for DuckDuckGoProvider {
    async fn search(&self, query: &str, max_results: usize) -> Vec<String> {
        let mut results = Vec::new();
        if max_results == 0 {
            return results;
        }

        let base = match Url::parse(&self.endpoint) {
            Ok(base) => base,
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, error = %e, "Invalid search endpoint");
                return results;
            }
        };
        let mut form = vec![("q".to_string(), build_search_query(query))];

        for page in 0..MAX_PAGES {
            let html = match self.fetch_results_page(&form).await {
                Ok(html) => html,
                Err(e) => {
                    tracing::error!(
                        query = %query,
                        page,
                        error = %format!("{e:#}"),
                        "An error occurred while fetching the results"
                    );
                    break;
                }
            };

            // `Html` is !Send, so parsing stays in a sync helper
            let parsed = parse_results_page(&html, &base);
            let gathered = collect_links(&mut results, parsed.links, max_results);
            tracing::debug!(page, gathered, total = results.len(), "Parsed search results page");

            if results.len() >= max_results || gathered == 0 {
                break;
            }
            match parsed.next_form {
                Some(next) => form = next,
                None => break,
            }
        }

        tracing::info!(query = %query, urls = results.len(), "Search complete");
        results
    }
}

/// Links and pagination state scraped from one result page.
#[derive(Debug, Default)]
struct ResultsPage {
    links: Vec<String>,
    /// Hidden fields of the "Next" form, if there is a next page.
    next_form: Option<Vec<(String, String)>>,
}

/// Result hrefs are resolved against `base`, the endpoint the page came from.
fn parse_results_page(html: &str, base: &Url) -> ResultsPage {
    let document = Html::parse_document(html);
    // Sponsored results carry the same link class
    let link_sel = Selector::parse("div.result:not(.result--ad) a.result__a").expect("valid selector");
    let form_sel = Selector::parse("div.nav-link form").expect("valid selector");

    let links = document
        .select(&link_sel)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| resolve_result_link(base, href))
        .collect();

    let next_form = document
        .select(&form_sel)
        .find(|form| is_next_form(*form))
        .map(hidden_fields);

    ResultsPage { links, next_form }
}

fn is_next_form(form: ElementRef) -> bool {
    let submit_sel = Selector::parse(r#"input[type="submit"]"#).expect("valid selector");
    form.select(&submit_sel)
        .filter_map(|input| input.value().attr("value"))
        .any(|value| value.trim().eq_ignore_ascii_case("next"))
}

fn hidden_fields(form: ElementRef) -> Vec<(String, String)> {
    let hidden_sel = Selector::parse(r#"input[type="hidden"]"#).expect("valid selector");
    form.select(&hidden_sel)
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let value = input.value().attr("value").unwrap_or_default();
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

/// Append usable links to `results`, stopping at `max_results`. Returns how
/// many were added.
fn collect_links(results: &mut Vec<String>, links: Vec<String>, max_results: usize) -> usize {
    let before = results.len();
    for link in links {
        if results.len() >= max_results {
            break;
        }
        if !(link.starts_with("http://") || link.starts_with("https://")) {
            continue;
        }
        if is_blocked(&link) {
            tracing::debug!(url = %link, "Skipping blocked site");
            continue;
        }
        if results.contains(&link) {
            continue;
        }
        results.push(link);
    }
    results.len() - before
}

/// Turn a result href into the article URL it points at.
///
/// DuckDuckGo wraps result links as `/l/?uddg=<encoded>&rut=...`, either
/// relative or as `//duckduckgo.com/l/...`; the decoded `uddg` target is
/// returned. Any other link back into the provider (ad redirects such as
/// `/y.js?ad_domain=...`) yields `None`.
fn resolve_result_link(base: &Url, href: &str) -> Option<String> {
    let resolved = base.join(href.trim()).ok()?;
    if resolved.path().starts_with("/l/") {
        if let Some((_, target)) = resolved.query_pairs().find(|(k, _)| k == "uddg") {
            return Some(target.into_owned());
        }
    }
    if is_provider_host(&resolved, base) {
        return None;
    }
    Some(resolved.into())
}

fn is_provider_host(url: &Url, base: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    Some(host.as_str()) == base.host_str()
        || host == "duckduckgo.com"
        || host.ends_with(".duckduckgo.com")
}
