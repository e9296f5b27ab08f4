use super::constants::SSDP_SEARCHES;
use super::query;
use super::Result;

use tokio::{
    net::UdpSocket,
    time::{timeout_at, Duration, Instant},
};

use std::collections::HashSet;
use std::net::SocketAddr;
use std::str;

fn header<'a>(headers: &'a [httparse::Header], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .and_then(|h| str::from_utf8(h.value).ok())
        .map(str::trim)
}

// Returns the ECP base url of every device that answered, in arrival order
pub(super) async fn ssdp(
    host: &str,
    st: &str,
    mx: u8,
    max: usize,
    budget: Duration,
    bind: SocketAddr,
) -> Result<Vec<String>> {
    if max == 0 {
        return Ok(Vec::new());
    }

    let body: &str = &[
        "M-SEARCH * HTTP/1.1",
        &format!("HOST: {}", host),
        "MAN: \"ssdp:discover\"",
        &format!("ST: {}", st),
        &format!("MX: {}", mx),
        "",
        "",
    ]
    .join("\r\n");

    let start = Instant::now();
    let deadline = start + budget;
    let interval = budget / SSDP_SEARCHES;

    // Open UDP Socket
    let socket = UdpSocket::bind(bind).await?;

    // Send ssdp request, repeated in case a datagram gets lost
    log::trace!(target: "rokuecp::discover", "M-SEARCH {} via {}", st, socket.local_addr()?);
    socket.send_to(body.as_bytes(), host).await?;
    let mut searches = 1;
    let mut next_search = start + interval;
    let mut rbuf = [0; 2048];

    // Get responses from devices
    let mut devices: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    while devices.len() < max {
        let wake = if searches < SSDP_SEARCHES {
            next_search.min(deadline)
        } else {
            deadline
        };

        let (len, from) = match timeout_at(wake, socket.recv_from(&mut rbuf)).await {
            Ok(Ok(recv)) => recv,
            Ok(Err(e)) => {
                log::warn!(target: "rokuecp::discover", "Receive failed, stopping: {}", e);
                break;
            }
            Err(_) if wake < deadline => {
                log::trace!(target: "rokuecp::discover", "M-SEARCH {} again ({})", st, searches + 1);
                socket.send_to(body.as_bytes(), host).await?;
                searches += 1;
                next_search += interval;
                continue;
            }
            Err(_) => break,
        };

        // Parse headers for ECP location
        let mut headers = [httparse::EMPTY_HEADER; 24];
        let mut res = httparse::Response::new(&mut headers);
        if let Err(e) = res.parse(&rbuf[..len]) {
            log::warn!(target: "rokuecp::discover", "Ignoring malformed response from {}: {}", from, e);
            continue;
        }

        let service = header(res.headers, "ST");
        if matches!(service, Some(service) if service != st) {
            log::debug!(target: "rokuecp::discover", "Ignoring {:?} from {}", service, from);
            continue;
        }

        let location = match header(res.headers, "LOCATION") {
            Some(location) => location,
            None => {
                log::warn!(target: "rokuecp::discover", "Response from {} has no LOCATION", from);
                continue;
            }
        };
        let url = match query::base_url(location) {
            Ok(url) => url,
            Err(e) => {
                log::warn!(target: "rokuecp::discover", "Response from {}: {}", from, e);
                continue;
            }
        };

        let identity = header(res.headers, "USN").unwrap_or(url.as_str()).to_string();
        if !seen.insert(identity) {
            log::debug!(target: "rokuecp::discover", "Duplicate response from {}", url);
            continue;
        }

        log::debug!(target: "rokuecp::discover", "Found {}", url);
        devices.push(url);
    }

    Ok(devices)
}
