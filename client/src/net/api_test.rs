use super::*;
use crate::net::client::{HttpClient, Method};
use crate::net::types::{AffixProbabilityRequest, StrengthenProbabilityRequest};

#[test]
fn endpoint_paths_resolve_under_api_base() {
    let client = HttpClient::default();
    assert_eq!(client.url(HEALTH_PATH), "/api/v1/health");
    assert_eq!(client.url(AFFIX_LIST_PATH), "/api/v1/mod/affix/list");
    assert_eq!(client.url(AFFIX_PROBABILITY_PATH), "/api/v1/mod/affix/probability");
    assert_eq!(client.url(STRENGTHEN_PROBABILITY_PATH), "/api/v1/mod/strengthen/probability");
    assert_eq!(client.url(TOOLS_PATH), "/api/v1/tools");
}

#[test]
fn affix_probability_body_is_caller_supplied_params() {
    let params = AffixProbabilityRequest { slot_count: 4, target_affix_ids: vec![1, 2, 3, 4, 5], show_combinations: None };
    let config = HttpClient::default()
        .build_request(Method::Post, AFFIX_PROBABILITY_PATH, Some(&params))
        .unwrap();
    let sent: AffixProbabilityRequest = serde_json::from_str(config.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, params);
}

#[test]
fn strengthen_probability_body_is_caller_supplied_params() {
    let params = StrengthenProbabilityRequest {
        initial_levels: vec![1, 1, 1, 1],
        target_levels: vec![2, 2, 1, 1],
        order_independent: Some(true),
        show_paths: Some(true),
    };
    let config = HttpClient::default()
        .build_request(Method::Post, STRENGTHEN_PROBABILITY_PATH, Some(&params))
        .unwrap();
    let sent: StrengthenProbabilityRequest = serde_json::from_str(config.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, params);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn every_call_site_surfaces_and_propagates_failure_off_browser() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;

    use crate::state::toast;

    let count = Rc::new(RefCell::new(0_usize));
    let sink_count = count.clone();
    toast::install_sink(move |_, _| *sink_count.borrow_mut() += 1);

    let affix = AffixProbabilityRequest { slot_count: 1, target_affix_ids: vec![1], show_combinations: None };
    let strengthen = StrengthenProbabilityRequest {
        initial_levels: vec![1; 4],
        target_levels: vec![1; 4],
        order_independent: None,
        show_paths: None,
    };

    assert!(block_on(system::health_check()).is_err());
    assert!(block_on(mods::get_affix_list()).is_err());
    assert!(block_on(mods::calculate_affix_probability(&affix)).is_err());
    assert!(block_on(mods::calculate_strengthen_probability(&strengthen)).is_err());
    assert!(block_on(tools::get_tools_list()).is_err());
    assert_eq!(*count.borrow(), 5);

    toast::clear_sink();
}
