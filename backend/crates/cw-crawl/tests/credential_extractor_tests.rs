mod common;

use common::{WALLET_URL, create_extractor};

use cw_core::links::parse_url;
use cw_crawl::CrawlError;
use cw_crawl::testing::{FakePage, StaticSite};

use googletest::prelude::*;

const CRED_A: &str = "https://www.credential.net/3fa85f64-5717-4562-b3fc-2c963f66afa6";
const CRED_B: &str = "https://verify.accredible.com/0f9e8d7c-6b5a-4938-8271-605f4e3d2c1b";

#[tokio::test]
async fn given_wallet_with_mixed_links_when_extracting_then_only_credentials_are_returned() {
    // Given: A wallet page with credential, navigation and foreign links
    let site = StaticSite::new();
    site.set_page(
        WALLET_URL,
        FakePage::with_anchors([
            CRED_B,
            "https://www.credential.net/profile/jdoe/wallet",
            "https://evil.example.com/3fa85f64-5717-4562-b3fc-2c963f66afa6",
            CRED_A,
            CRED_A,
        ]),
    )
    .await;
    let extractor = create_extractor(&site);

    // When: Extracting
    let records = extractor
        .extract(&parse_url(WALLET_URL, "walletUrl").unwrap())
        .await
        .unwrap();

    // Then: Two deduplicated records, ordered by URL
    let urls: Vec<&str> = records.iter().map(|r| r.credential_url.as_str()).collect();
    assert_eq!(urls, vec![CRED_B, CRED_A]);
    assert_that!(records[0].issuer_domain.as_str(), eq("verify.accredible.com"));
    assert_that!(
        records[1].credential_uuid.as_str(),
        eq("3fa85f64-5717-4562-b3fc-2c963f66afa6")
    );
    assert_eq!(site.released(), 1);
}

#[tokio::test]
async fn given_empty_wallet_when_extracting_then_empty_success() {
    let site = StaticSite::new();
    site.set_page(WALLET_URL, FakePage::new()).await;
    let extractor = create_extractor(&site);

    let records = extractor
        .extract(&parse_url(WALLET_URL, "walletUrl").unwrap())
        .await
        .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn given_unchanged_wallet_when_extracting_twice_then_identical_output() {
    let site = StaticSite::new();
    site.set_page(WALLET_URL, FakePage::with_anchors([CRED_B, CRED_A]))
        .await;
    let extractor = create_extractor(&site);
    let wallet = parse_url(WALLET_URL, "walletUrl").unwrap();

    let first = extractor.extract(&wallet).await.unwrap();
    let second = extractor.extract(&wallet).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_failing_wallet_page_when_extracting_then_navigation_error_and_release() {
    let site = StaticSite::new();
    site.set_page(WALLET_URL, FakePage::failing("net::ERR_CONNECTION_REFUSED"))
        .await;
    let extractor = create_extractor(&site);

    let result = extractor
        .extract(&parse_url(WALLET_URL, "walletUrl").unwrap())
        .await;

    assert!(matches!(result, Err(CrawlError::Navigation { .. })));
    assert_eq!(site.released(), 1);
}
