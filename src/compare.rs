//! Hostname membership check between the two inventories.

/// Result of checking one EDR-reported hostname against the
/// vulnerability-console asset list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostnameMatch {
    pub hostname: String,
    pub found: bool,
}

/// Mark, per XDR hostname, whether it appears in the InsightVM list.
///
/// Case-sensitive exact string match, input order preserved.
pub fn compare_hostnames(xdr_hostnames: &[String], insightvm_hostnames: &[String]) -> Vec<HostnameMatch> {
    xdr_hostnames
        .iter()
        .map(|hostname| HostnameMatch {
            hostname: hostname.clone(),
            found: insightvm_hostnames.iter().any(|h| h == hostname),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn marks_present_and_missing_hostnames() {
        let matches = compare_hostnames(&hosts(&["h1", "h2"]), &hosts(&["h1"]));

        assert_eq!(
            matches,
            vec![
                HostnameMatch {
                    hostname: "h1".to_string(),
                    found: true
                },
                HostnameMatch {
                    hostname: "h2".to_string(),
                    found: false
                },
            ]
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let matches = compare_hostnames(&hosts(&["Host1"]), &hosts(&["host1"]));
        assert!(!matches[0].found);
    }

    #[test]
    fn empty_inventory_marks_nothing_found() {
        let matches = compare_hostnames(&hosts(&["h1"]), &[]);
        assert!(!matches[0].found);
    }
}
