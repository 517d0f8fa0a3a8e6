//! Domain classification of visited URLs
//!
//! Extracts the registrable domain and TLD from each history URL, filters
//! against the static country/language-TLD table, and groups matches into
//! frequency buckets. Generic TLDs (`.com`, `.org`, ...) are deliberately
//! absent from the table: they carry no locale signal and must never
//! appear in output.

use super::bucket::BucketMap;
use crate::models::BucketReport;
use url::Url;

/// Country-code TLDs eligible for classification, with the country and
/// dominant language(s) they indicate. Sorted by TLD for binary search.
const KNOWN_TLDS: &[(&str, &str)] = &[
    ("ae", "United Arab Emirates / Arabic"),
    ("ar", "Argentina / Spanish"),
    ("at", "Austria / German"),
    ("au", "Australia / English"),
    ("ba", "Bosnia and Herzegovina / Bosnian"),
    ("bd", "Bangladesh / Bengali"),
    ("be", "Belgium / Dutch, French"),
    ("bg", "Bulgaria / Bulgarian"),
    ("br", "Brazil / Portuguese"),
    ("by", "Belarus / Belarusian, Russian"),
    ("ca", "Canada / English, French"),
    ("ch", "Switzerland / German, French, Italian"),
    ("cl", "Chile / Spanish"),
    ("cn", "China / Chinese"),
    ("co", "Colombia / Spanish"),
    ("cz", "Czechia / Czech"),
    ("de", "Germany / German"),
    ("dk", "Denmark / Danish"),
    ("ee", "Estonia / Estonian"),
    ("eg", "Egypt / Arabic"),
    ("es", "Spain / Spanish"),
    ("fi", "Finland / Finnish"),
    ("fr", "France / French"),
    ("gr", "Greece / Greek"),
    ("hk", "Hong Kong / Chinese"),
    ("hr", "Croatia / Croatian"),
    ("hu", "Hungary / Hungarian"),
    ("id", "Indonesia / Indonesian"),
    ("ie", "Ireland / English"),
    ("il", "Israel / Hebrew"),
    ("in", "India / Hindi, English"),
    ("ir", "Iran / Persian"),
    ("is", "Iceland / Icelandic"),
    ("it", "Italy / Italian"),
    ("jp", "Japan / Japanese"),
    ("ke", "Kenya / Swahili, English"),
    ("kr", "South Korea / Korean"),
    ("kz", "Kazakhstan / Kazakh, Russian"),
    ("lt", "Lithuania / Lithuanian"),
    ("lv", "Latvia / Latvian"),
    ("ma", "Morocco / Arabic, French"),
    ("mx", "Mexico / Spanish"),
    ("my", "Malaysia / Malay"),
    ("ng", "Nigeria / English"),
    ("nl", "Netherlands / Dutch"),
    ("no", "Norway / Norwegian"),
    ("nz", "New Zealand / English"),
    ("pe", "Peru / Spanish"),
    ("ph", "Philippines / Filipino, English"),
    ("pk", "Pakistan / Urdu"),
    ("pl", "Poland / Polish"),
    ("pt", "Portugal / Portuguese"),
    ("ro", "Romania / Romanian"),
    ("rs", "Serbia / Serbian"),
    ("ru", "Russia / Russian"),
    ("sa", "Saudi Arabia / Arabic"),
    ("se", "Sweden / Swedish"),
    ("sg", "Singapore / English, Chinese"),
    ("si", "Slovenia / Slovenian"),
    ("sk", "Slovakia / Slovak"),
    ("th", "Thailand / Thai"),
    ("tr", "Turkey / Turkish"),
    ("tw", "Taiwan / Chinese"),
    ("ua", "Ukraine / Ukrainian"),
    ("uk", "United Kingdom / English"),
    ("us", "United States / English"),
    ("uy", "Uruguay / Spanish"),
    ("vn", "Vietnam / Vietnamese"),
    ("za", "South Africa / English, Afrikaans"),
];

/// Country/language tag for a TLD, or `None` for generic/unknown TLDs.
pub fn tld_tag(tld: &str) -> Option<&'static str> {
    KNOWN_TLDS
        .binary_search_by_key(&tld, |&(t, _)| t)
        .ok()
        .map(|i| KNOWN_TLDS[i].1)
}

/// Last two dot-separated labels of the URL's host (approximation of the
/// public-suffix rule), or the whole host when it has fewer than two
/// labels. `None` when the URL does not parse or has no host.
fn registrable_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        Some(labels[labels.len() - 2..].join("."))
    } else {
        Some(host.to_string())
    }
}

/// Final label of a registrable domain. For a dotless host the domain is
/// its own TLD.
fn tld_of(domain: &str) -> &str {
    domain.rsplit('.').next().unwrap_or(domain)
}

/// Group visited URLs by country-code TLD.
///
/// URLs whose TLD is not in the known-TLD table are discarded entirely;
/// unparseable URLs are skipped without aborting the pass. Each bucket
/// keeps the total visit count and the 3 most-visited registrable domains.
pub fn classify_urls<'a, I>(urls: I) -> BucketReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets: BucketMap<String, String> = BucketMap::new();
    for url in urls {
        let Some(domain) = registrable_domain(url) else {
            tracing::debug!(url, "skipping unparseable history URL");
            continue;
        };
        let tld = tld_of(&domain);
        if tld_tag(tld).is_none() {
            continue;
        }
        buckets.record(tld.to_string(), domain);
    }
    buckets.into_report()
}
