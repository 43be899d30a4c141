use enom_api::{Contact, Domain, EnomClient, EnomError, OrderStatus, PurchaseOrder};
use httpmock::prelude::*;

fn client(server: &MockServer) -> EnomClient {
    EnomClient::with_endpoint("resellid", "resellpw", &server.url("/interface.asp"))
}

fn registrant() -> Contact {
    Contact {
        first_name: "John".into(),
        last_name: "Doe".into(),
        organization: Some("Reseller Docs Inc".into()),
        address1: "123 Main St".into(),
        city: "Bellevue".into(),
        state_province: Some("WA".into()),
        postal_code: "98004".into(),
        country: "US".into(),
        phone: "+1.4255551212".into(),
        email: "john@resellerdocs.net".into(),
        ..Contact::default()
    }
}

fn domain() -> Domain {
    Domain::parse("resellerdocs.net").unwrap()
}

const PURCHASE_OK: &str = "<?xml version=\"1.0\"?><interface-response>\
    <OrderID>722713</OrderID>\
    <IsRealTimeTLD>True</IsRealTimeTLD>\
    <RRPCode>200</RRPCode>\
    <RRPText>Command completed successfully</RRPText>\
    <ErrCount>0</ErrCount>\
    <Done>true</Done>\
    </interface-response>";

const PURCHASE_QUEUED: &str = "<?xml version=\"1.0\"?><interface-response>\
    <OrderID>722801</OrderID>\
    <IsRealTimeTLD>False</IsRealTimeTLD>\
    <RRPCode>1300</RRPCode>\
    <RRPText>Order queued for processing</RRPText>\
    <ErrCount>0</ErrCount>\
    <Done>true</Done>\
    </interface-response>";

const PURCHASE_FAILED: &str = "<?xml version=\"1.0\"?><interface-response>\
    <RRPCode>540</RRPCode>\
    <RRPText>Attribute value is not valid</RRPText>\
    <ErrCount>1</ErrCount>\
    <Err1>Domain name not available</Err1>\
    <ErrSource1>Agent</ErrSource1>\
    <Done>true</Done>\
    </interface-response>";

#[tokio::test]
async fn purchase_success_returns_registered_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/interface.asp")
            .query_param("Command", "Purchase")
            .query_param("UID", "resellid")
            .query_param("PW", "resellpw")
            .query_param("ResponseType", "XML")
            .query_param("SLD", "resellerdocs")
            .query_param("TLD", "net")
            .query_param("NumYears", "2")
            .query_param("RegistrantFirstName", "John")
            .query_param("UseDNS", "default");
        then.status(200)
            .header("content-type", "text/xml")
            .body(PURCHASE_OK);
    });

    let mut order = PurchaseOrder::new(domain(), registrant());
    order.years = 2;
    let result = client(&server).purchase(&order).await.unwrap();

    mock.assert();
    assert_eq!(result.order_id, 722713);
    assert_eq!(result.status, OrderStatus::Registered);
    assert_eq!(result.domain, "resellerdocs.net");
}

#[tokio::test]
async fn purchase_on_non_real_time_tld_is_queued() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/interface.asp")
            .query_param("Command", "Purchase")
            .query_param("NS1", "dns1.name-services.com")
            .query_param("NS2", "dns2.name-services.com");
        then.status(200)
            .header("content-type", "text/xml")
            .body(PURCHASE_QUEUED);
    });

    let mut order = PurchaseOrder::new(domain(), registrant());
    order.nameservers = vec![
        "dns1.name-services.com".to_string(),
        "dns2.name-services.com".to_string(),
    ];
    let result = client(&server).purchase(&order).await.unwrap();

    mock.assert();
    assert_eq!(result.status, OrderStatus::Queued);
    assert_eq!(result.order_id, 722801);
}

#[tokio::test]
async fn remote_errors_surface_before_rrp_interpretation() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/interface.asp");
        then.status(200)
            .header("content-type", "text/xml")
            .body(PURCHASE_FAILED);
    });

    let order = PurchaseOrder::new(domain(), registrant());
    let err = client(&server).purchase(&order).await.unwrap_err();

    match err {
        EnomError::Remote(errors) => {
            assert_eq!(errors.0.len(), 1);
            assert_eq!(errors.0[0].text, "Domain name not available");
            assert_eq!(errors.0[0].source.as_deref(), Some("Agent"));
        }
        other => panic!("expected Remote, got {:?}", other),
    }
}

#[tokio::test]
async fn thirteen_nameservers_rejected_without_http_traffic() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body(PURCHASE_OK);
    });

    let mut order = PurchaseOrder::new(domain(), registrant());
    order.nameservers = (1..=13).map(|i| format!("dns{}.example.net", i)).collect();
    let err = client(&server).purchase(&order).await.unwrap_err();

    assert!(matches!(err, EnomError::Validation(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn incomplete_registrant_rejected_without_http_traffic() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body(PURCHASE_OK);
    });

    let mut incomplete = registrant();
    incomplete.phone = String::new();
    let order = PurchaseOrder::new(domain(), incomplete);
    let err = client(&server).purchase(&order).await.unwrap_err();

    assert!(matches!(err, EnomError::Validation(_)));
    mock.assert_hits(0);
}

#[tokio::test]
async fn extend_places_a_renewal_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/interface.asp")
            .query_param("Command", "Extend")
            .query_param("SLD", "resellerdocs")
            .query_param("TLD", "net")
            .query_param("NumYears", "3");
        then.status(200)
            .header("content-type", "text/xml")
            .body(PURCHASE_OK);
    });

    let result = client(&server).extend(&domain(), 3).await.unwrap();
    mock.assert();
    assert_eq!(result.order_id, 722713);
}

#[tokio::test]
async fn extend_years_are_bounds_checked_locally() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body(PURCHASE_OK);
    });

    assert!(matches!(
        client(&server).extend(&domain(), 0).await.unwrap_err(),
        EnomError::Validation(_)
    ));
    assert!(matches!(
        client(&server).extend(&domain(), 11).await.unwrap_err(),
        EnomError::Validation(_)
    ));
    mock.assert_hits(0);
}

#[tokio::test]
async fn http_failure_maps_to_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/interface.asp");
        then.status(503);
    });

    let err = client(&server).extend(&domain(), 1).await.unwrap_err();
    assert!(matches!(err, EnomError::Http(_)));
}
