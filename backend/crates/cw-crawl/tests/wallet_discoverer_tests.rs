mod common;

use common::{CERT_URL, WALLET_URL, create_discoverer};

use cw_core::links::parse_url;
use cw_crawl::testing::{FakePage, StaticSite};
use cw_crawl::{CrawlError, WALLET_LINK_SELECTOR};

use googletest::prelude::*;

#[tokio::test]
async fn given_relative_wallet_link_when_discovering_then_resolved_against_cert_origin() {
    // Given: A certificate page linking to a relative wallet path
    let site = StaticSite::new();
    site.set_page(CERT_URL, FakePage::with_wallet_link("/profile/jdoe/wallet"))
        .await;
    let discoverer = create_discoverer(&site);

    // When: Discovering
    let wallet = discoverer
        .discover(&parse_url(CERT_URL, "certUrl").unwrap())
        .await
        .unwrap();

    // Then: Absolute URL on the certificate's host
    assert_that!(wallet.as_str(), eq(WALLET_URL));
    assert_eq!(site.released(), 1);
}

#[tokio::test]
async fn given_absolute_wallet_link_when_discovering_then_kept_as_is() {
    let site = StaticSite::new();
    let absolute = "https://wallet.credential.net/profile/jdoe/wallet";
    site.set_page(CERT_URL, FakePage::with_wallet_link(absolute))
        .await;
    let discoverer = create_discoverer(&site);

    let wallet = discoverer
        .discover(&parse_url(CERT_URL, "certUrl").unwrap())
        .await
        .unwrap();

    assert_that!(wallet.as_str(), eq(absolute));
}

#[tokio::test]
async fn given_page_without_marker_link_when_discovering_then_link_not_found() {
    // Given: A certificate page with no marker link
    let site = StaticSite::new();
    site.set_page(CERT_URL, FakePage::with_anchors(["https://example.com/"]))
        .await;
    let discoverer = create_discoverer(&site);

    // When: Discovering
    let result = discoverer
        .discover(&parse_url(CERT_URL, "certUrl").unwrap())
        .await;

    // Then: LinkNotFound, and the session was still released
    assert!(matches!(result, Err(CrawlError::LinkNotFound { .. })));
    assert_eq!(site.released(), 1);
}

#[tokio::test]
async fn given_marker_link_without_href_when_discovering_then_link_not_found() {
    let site = StaticSite::new();
    site.set_page(CERT_URL, FakePage::new().bare_element(WALLET_LINK_SELECTOR))
        .await;
    let discoverer = create_discoverer(&site);

    let result = discoverer
        .discover(&parse_url(CERT_URL, "certUrl").unwrap())
        .await;

    assert!(matches!(result, Err(CrawlError::LinkNotFound { .. })));
}

#[tokio::test]
async fn given_unreachable_certificate_when_discovering_then_navigation_error() {
    let site = StaticSite::new();
    let discoverer = create_discoverer(&site);

    let result = discoverer
        .discover(&parse_url(CERT_URL, "certUrl").unwrap())
        .await;

    assert!(matches!(result, Err(CrawlError::Navigation { .. })));
    assert_eq!(site.released(), 1);
}

#[tokio::test]
async fn given_unchanged_page_when_discovering_twice_then_same_wallet() {
    let site = StaticSite::new();
    site.set_page(CERT_URL, FakePage::with_wallet_link("/profile/jdoe/wallet"))
        .await;
    let discoverer = create_discoverer(&site);
    let cert = parse_url(CERT_URL, "certUrl").unwrap();

    let first = discoverer.discover(&cert).await.unwrap();
    let second = discoverer.discover(&cert).await.unwrap();

    assert_that!(first, eq(&second));
}
