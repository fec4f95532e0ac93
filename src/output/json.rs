//! JSON rendering of subnetting results.

use crate::models::subnet::SubnettingResult;

pub fn render_json(result: &SubnettingResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_subnetting;

    #[test]
    fn test_json_fields() {
        let result = compute_subnetting("192.168.1.0", 26).unwrap();
        let rendered = render_json(&result).expect("Failed to render JSON");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("Rendered JSON does not parse");

        assert_eq!(value["address"], "192.168.1.0");
        assert_eq!(value["class"], "C");
        assert_eq!(value["new_mask"], "255.255.255.192");
        assert_eq!(value["total_subnets"], 4);
        assert_eq!(value["assignable_hosts"], 62);
        assert_eq!(value["subnets"].as_array().map(|s| s.len()), Some(4));
        assert_eq!(value["subnets"][0]["broadcast"], "192.168.1.63");
    }
}
