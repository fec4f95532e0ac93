//! Forward and reverse DNS lookups over the system resolver.
//!
//! Independent of the subnetting engine; the shell exposes it as its own
//! menu entry and nothing in the core depends on it.

use std::io;
use std::net::IpAddr;

/// Forward lookup: hostname to the addresses the resolver returns.
pub fn resolve_host(name: &str) -> io::Result<Vec<IpAddr>> {
    log::debug!("resolve_host({name})");
    dns_lookup::lookup_host(name)
}

/// Reverse lookup: address to its canonical hostname (PTR record).
pub fn resolve_addr(addr: IpAddr) -> io::Result<String> {
    log::debug!("resolve_addr({addr})");
    dns_lookup::lookup_addr(&addr)
}
