//! Textual report rendering for subnetting results.

use crate::models::subnet::SubnettingResult;
use crate::processing::enumerate::SUBNET_LIST_LIMIT;
use colored::Colorize;

const BANNER_WIDTH: usize = 60;

/// Render the full calculation report.
///
/// Returns the report as a string so callers (shell, one-shot mode, tests)
/// decide where it goes.
pub fn render_report(result: &SubnettingResult) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{banner}\n"));
    out.push_str(&format!("{}\n", "SUBNETTING CALCULATION RESULTS".bold()));
    out.push_str(&format!("{banner}\n"));
    out.push_str(&format!("Original IP Address: {}\n", result.address));
    out.push_str(&format!("Network Address: {}\n", result.network_address));
    out.push_str(&format!("IP Class: {}\n", result.class));
    out.push_str(&format!(
        "Default Subnet Mask: {} (/{})\n",
        result.default_mask, result.default_prefix
    ));
    out.push_str(&format!("New CIDR Prefix: /{}\n", result.new_prefix));
    out.push_str(&format!("New Subnet Mask: {}\n", result.new_mask));
    out.push_str(&format!(
        "Subnet Mask (Binary): {}\n",
        result.new_mask.binary_grouped()
    ));
    out.push_str(&format!(
        "Bits Borrowed from Host: {}\n",
        result.bits_borrowed
    ));
    out.push_str(&format!("Total Subnets Created: {}\n", result.total_subnets));
    out.push_str(&format!(
        "Total IP Addresses per Subnet: {}\n",
        result.addresses_per_subnet
    ));
    out.push_str(&format!(
        "Assignable Hosts per Subnet: {}\n",
        result.assignable_hosts
    ));
    out.push_str(&format!("{banner}\n"));

    if result.subnets.is_empty() {
        out.push_str(&format!(
            "\nSubnet ranges omitted ({} subnets); showing aggregate counts only.\n",
            result.total_subnets
        ));
        return out;
    }

    out.push_str("\nFirst few subnet ranges:\n");
    out.push_str(&format!("{}\n", "-".repeat(50)));
    for subnet in &result.subnets {
        out.push_str(&format!(
            "Subnet {}: {}/{}\n",
            subnet.index, subnet.network, result.new_prefix
        ));
        out.push_str(&format!(
            "  Range: {} - {}\n",
            subnet.network, subnet.broadcast
        ));
        out.push_str(&format!("  Network: {}\n", subnet.network));
        out.push_str(&format!("  Broadcast: {}\n", subnet.broadcast));
        out.push_str(&format!(
            "  Host range: {} - {}\n\n",
            subnet.first_host, subnet.last_host
        ));
    }

    if result.total_subnets > SUBNET_LIST_LIMIT {
        out.push_str(&format!(
            "... and {} more subnets\n",
            result.unlisted_subnets()
        ));
    }
    out
}
