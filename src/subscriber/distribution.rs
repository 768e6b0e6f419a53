//! Subscriber distribution across radio nodes.
//!
//! Spreads a requested count of subscriber identities evenly across the
//! deployment's radio nodes, producing one identity block per radio node in
//! declaration order. Pure and deterministic: identical inputs always yield
//! identical blocks.

use log::info;

use crate::netdef::SliceAssociation;

use super::types::Subscriber;

/// Identities are 15-digit decimal strings.
const IDENTITY_DIGITS: usize = 15;

/// Errors raised by subscriber distribution.
#[derive(Debug, thiserror::Error)]
pub enum DistributionError {
    #[error("cannot distribute subscribers: no radio nodes declared")]
    NoRadioNodes,
    #[error("invalid subscriber identity '{0}': not a decimal string")]
    InvalidIdentity(String),
}

/// Distribute `total` subscriber identities across `radio_nodes`.
///
/// Each radio node receives a block of `ceil(total / n)` consecutive
/// identities starting at `first_identity`, except that blocks past the
/// requested total are clamped, so the final radio nodes may receive fewer
/// identities or none at all. Every block carries the full
/// `slice_associations` list unmodified.
pub fn add_subscribers_per_radio_node(
    radio_nodes: &[String],
    first_identity: &str,
    total: u64,
    slice_associations: &[SliceAssociation],
) -> Result<Vec<Subscriber>, DistributionError> {
    if radio_nodes.is_empty() {
        return Err(DistributionError::NoRadioNodes);
    }
    // u128 keeps identity arithmetic exact well past the 15-digit range.
    let mut identity: u128 = parse_identity(first_identity)?;

    let n = radio_nodes.len() as u64;
    let each = total.div_ceil(n);
    let mut remaining = i128::from(total);

    let mut subscribers = Vec::with_capacity(radio_nodes.len());
    for radio_node in radio_nodes {
        let count = remaining.clamp(0, i128::from(each)) as u64;
        subscribers.push(Subscriber {
            identity: format!("{identity:0width$}", width = IDENTITY_DIGITS),
            count,
            slices: slice_associations.to_vec(),
            radio_nodes: vec![radio_node.clone()],
        });
        remaining -= i128::from(each);
        identity += u128::from(each);
    }

    info!(
        "Distributed {} subscribers across {} radio nodes ({} per block)",
        total,
        radio_nodes.len(),
        each
    );
    Ok(subscribers)
}

fn parse_identity(identity: &str) -> Result<u128, DistributionError> {
    if identity.is_empty() || !identity.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DistributionError::InvalidIdentity(identity.to_string()));
    }
    identity
        .parse::<u128>()
        .map_err(|_| DistributionError::InvalidIdentity(identity.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_uneven_split_clamps_last_block() {
        let subs =
            add_subscribers_per_radio_node(&names(&["gnb0", "gnb1"]), "001017005551000", 5, &[])
                .unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].identity, "001017005551000");
        assert_eq!(subs[0].count, 3);
        assert_eq!(subs[0].radio_nodes, vec!["gnb0".to_string()]);
        assert_eq!(subs[1].identity, "001017005551003");
        assert_eq!(subs[1].count, 2);
        assert_eq!(subs[1].radio_nodes, vec!["gnb1".to_string()]);
    }

    #[test]
    fn test_exhausted_total_yields_zero_counts() {
        let subs = add_subscribers_per_radio_node(
            &names(&["gnb0", "gnb1", "gnb2"]),
            "001017005551000",
            1,
            &[],
        )
        .unwrap();
        let counts: Vec<u64> = subs.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![1, 0, 0]);
    }

    #[test]
    fn test_counts_never_exceed_total() {
        for (n_gnbs, total) in [(1u64, 7u64), (2, 7), (3, 7), (4, 7), (7, 7), (10, 7)] {
            let gnbs: Vec<String> = (0..n_gnbs).map(|i| format!("gnb{i}")).collect();
            let subs = add_subscribers_per_radio_node(&gnbs, "001017005551000", total, &[])
                .unwrap();
            let sum: u64 = subs.iter().map(|s| s.count).sum();
            let each = total.div_ceil(n_gnbs);
            assert_eq!(sum, total.min(each * n_gnbs));
            assert!(sum <= total);
        }
    }

    #[test]
    fn test_identity_is_zero_padded() {
        let subs = add_subscribers_per_radio_node(&names(&["gnb0"]), "99", 2, &[]).unwrap();
        assert_eq!(subs[0].identity, "000000000000099");
    }

    #[test]
    fn test_slice_associations_pass_through() {
        let slices = vec![SliceAssociation {
            slice: "1-000001".to_string(),
            data_networks: vec!["internet".to_string(), "ims".to_string()],
        }];
        let subs =
            add_subscribers_per_radio_node(&names(&["gnb0", "gnb1"]), "001017005551000", 4, &slices)
                .unwrap();
        for sub in &subs {
            assert_eq!(sub.slices, slices);
        }
    }

    #[test]
    fn test_no_radio_nodes_is_an_error() {
        let result = add_subscribers_per_radio_node(&[], "001017005551000", 5, &[]);
        assert!(matches!(result, Err(DistributionError::NoRadioNodes)));
    }

    #[test]
    fn test_non_decimal_identity_is_an_error() {
        let result = add_subscribers_per_radio_node(&names(&["gnb0"]), "00101700555100x", 5, &[]);
        assert!(matches!(result, Err(DistributionError::InvalidIdentity(_))));
    }
}
