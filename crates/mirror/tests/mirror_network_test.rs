//! Integration tests for the mirror network specialization

use std::time::Duration;

use meridian_mirror::{
    MAINNET_MIRROR, MirrorNetwork, PREVIEWNET_MIRROR, TESTNET_MIRROR,
};
use meridian_topology::TopologyError;

const AMPLE: Duration = Duration::from_secs(5);

#[tokio::test]
async fn presets_carry_exactly_their_documented_address() {
    assert_eq!(
        MirrorNetwork::for_mainnet().await.get_network(),
        vec![MAINNET_MIRROR.to_string()]
    );
    assert_eq!(
        MirrorNetwork::for_testnet().await.get_network(),
        vec![TESTNET_MIRROR.to_string()]
    );
    assert_eq!(
        MirrorNetwork::for_previewnet().await.get_network(),
        vec![PREVIEWNET_MIRROR.to_string()]
    );
}

#[tokio::test]
async fn transport_security_is_forced_on() {
    let network = MirrorNetwork::for_mainnet().await;
    assert!(network.manager().transport_security());
}

#[tokio::test]
async fn construction_with_a_malformed_list_degrades_instead_of_failing() {
    let _ = tracing_subscriber::fmt().try_init();

    let network = MirrorNetwork::for_network(["definitely-not-an-address"]).await;

    assert!(network.get_network().is_empty());
    assert!(matches!(
        network.next_mirror_node().unwrap_err(),
        TopologyError::NoAvailableNodes
    ));
}

#[tokio::test]
async fn set_network_swaps_the_mirror_set() {
    let network = MirrorNetwork::for_network(["one.mirror.example.com:443"]).await;

    network
        .set_network(
            ["two.mirror.example.com:443", "three.mirror.example.com:443"],
            AMPLE,
        )
        .await
        .unwrap();

    assert_eq!(
        network.get_network(),
        vec![
            "three.mirror.example.com:443".to_string(),
            "two.mirror.example.com:443".to_string(),
        ]
    );
}

#[tokio::test]
async fn selection_rotates_across_equally_healthy_mirrors() {
    let network = MirrorNetwork::for_network([
        "one.mirror.example.com:443",
        "two.mirror.example.com:443",
    ])
    .await;

    let first = network.next_mirror_node().unwrap();
    let second = network.next_mirror_node().unwrap();
    assert_ne!(
        first.channel().endpoint(),
        second.channel().endpoint(),
        "fresh equally-healthy mirrors should alternate"
    );
}

#[tokio::test]
async fn shutdown_closes_all_mirror_channels() {
    let network = MirrorNetwork::for_network([
        "one.mirror.example.com:443",
        "two.mirror.example.com:443",
    ])
    .await;

    let node = network.next_mirror_node().unwrap();
    network.shutdown(AMPLE).await.unwrap();

    assert!(network.get_network().is_empty());
    assert!(node.channel().is_closed().await);
}
