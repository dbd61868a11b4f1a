use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Cache-related response headers reported per round, in print order.
pub const CACHE_HEADERS: &[&str] = &["cache-control", "age", "x-cache", "via"];

/// One round of probing: status code plus whichever of the cache
/// headers the response carried. Printed and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeObservation {
    pub round: u32,
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
}

impl ProbeObservation {
    /// Capture the cache header subset of a response. Absent headers
    /// are omitted rather than recorded as empty.
    pub fn from_response(round: u32, resp: &reqwest::Response) -> Self {
        let headers = CACHE_HEADERS
            .iter()
            .filter_map(|name| {
                resp.headers()
                    .get(*name)
                    .and_then(|v| v.to_str().ok())
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect();
        Self {
            round,
            status: resp.status(),
            headers,
        }
    }

    /// Render the per-round console block.
    pub fn render(&self, url: &Url) -> String {
        let mut out = format!(
            "\n[{}] {}\nStatus: {}",
            self.round,
            url,
            self.status.as_u16()
        );
        for (name, value) in &self.headers {
            out.push_str(&format!("\n{name}: {value}"));
        }
        out
    }
}

/// Issue `rounds` sequential GET requests against `url`, printing one
/// observation block per round and sleeping `delay` between rounds.
///
/// The first request error aborts the whole run; there is no retry.
pub async fn run(
    client: &reqwest::Client,
    url: &Url,
    rounds: u32,
    delay: Duration,
) -> Result<Vec<ProbeObservation>, reqwest::Error> {
    let mut observations = Vec::with_capacity(rounds as usize);
    for round in 1..=rounds {
        let resp = client.get(url.clone()).send().await?;
        let obs = ProbeObservation::from_response(round, &resp);
        println!("{}", obs.render(url));
        observations.push(obs);
        if round < rounds && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    Ok(observations)
}
