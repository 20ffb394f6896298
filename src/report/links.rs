//! Fixed reference and exploit-hunting links.

/// ExploitDB search for a specific CVE.
pub fn exploit_db_cve(cve_id: &str) -> String {
    format!("https://www.exploit-db.com/search?cve={cve_id}")
}

/// ExploitDB free-text search.
pub fn exploit_db_query(term: &str) -> String {
    format!("https://www.exploit-db.com/search?q={term}")
}

/// OffSec blog entry for a CVE.
pub fn offsec_blog(cve_id: &str) -> String {
    format!("https://www.offsec.com/blog/{cve_id}")
}

/// The standing "for more, access" links for a CVE detail view.
pub fn main_links(cve_id: &str) -> [String; 3] {
    [
        format!("https://nvd.nist.gov/vuln/detail/{cve_id}"),
        format!("https://www.cve.org/CVERecord?id={cve_id}"),
        format!("https://cvedb.shodan.io/cve/{cve_id}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_embed_the_cve_id() {
        assert_eq!(
            exploit_db_cve("CVE-2021-44228"),
            "https://www.exploit-db.com/search?cve=CVE-2021-44228"
        );
        for link in main_links("CVE-2021-44228") {
            assert!(link.contains("CVE-2021-44228"));
        }
    }
}
