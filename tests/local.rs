use rokuecp::Device;

use std::time::{Duration, Instant};

/// These tests will only find something if there is a Roku on the local network. Otherwise they will just pass.
#[tokio::test]
async fn find_by_url() {
    if let Ok(urls) = rokuecp::discover_devices(8).await {
        assert!(urls.len() <= 8);
        for url in urls {
            match Device::from_url(&url).await {
                Ok(dev) => assert_eq!(dev.url(), url),
                // ECP access can be turned off on the device
                Err(e) if e.is_unauthorized() => {}
                Err(e) => panic!("Device could not be reached at {}: {}", url, e),
            }
        }
    }
}

#[tokio::test]
async fn discovery_is_bounded() {
    let start = Instant::now();
    let _ = rokuecp::discover_devices(64).await;
    assert!(start.elapsed() < Duration::from_secs(6));
}

#[tokio::test]
async fn discover_nothing() {
    let start = Instant::now();
    assert!(rokuecp::discover_devices(0).await.unwrap().is_empty());
    assert!(start.elapsed() < Duration::from_secs(1));
}
