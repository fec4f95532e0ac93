//! Interactive menu loop and CLI argument handling.
//!
//! Owns all prompting and looping; every engine error is rendered and the
//! loop continues. The engine itself never prints.

use crate::error::SubnetError;
use crate::output::{json, terminal};
use crate::{classify_address, compute_subnetting, lookup};
use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::net::IpAddr;

lazy_static! {
    static ref PREFIX_RE: Regex = Regex::new(r"^/(\d{1,2})$").expect("Invalid Regex?");
}

/// Parse a `/n` CIDR token from user input.
///
/// The global 0-32 pre-check happens here; the class-specific range check
/// runs later inside the engine.
pub fn parse_prefix_input(input: &str) -> Result<u8, SubnetError> {
    let trimmed = input.trim();
    let invalid = |reason: &str| SubnetError::InvalidPrefixInput {
        input: trimmed.to_string(),
        reason: reason.to_string(),
    };

    if !trimmed.starts_with('/') {
        return Err(invalid("CIDR prefix must start with '/'"));
    }
    let value: u8 = PREFIX_RE
        .captures(trimmed)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| invalid("CIDR prefix must look like /26"))?;
    if value > 32 {
        return Err(invalid("CIDR prefix value must be between 0 and 32"));
    }
    Ok(value)
}

/// One-shot mode: `subnet-calc <address> /<prefix> [--json]`.
pub fn run_once(args: &[String]) -> Result<(), Box<dyn Error>> {
    let as_json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();
    if positional.len() != 2 {
        return Err("usage: subnet-calc <address> /<prefix> [--json]".into());
    }

    let prefix = parse_prefix_input(positional[1])?;
    let result = compute_subnetting(positional[0], prefix)?;
    if as_json {
        println!("{}", json::render_json(&result)?);
    } else {
        print!("{}", terminal::render_report(&result));
    }
    Ok(())
}

/// Interactive menu. Runs until the user exits or stdin closes.
pub fn run() -> Result<(), Box<dyn Error>> {
    log::info!("#Start interactive shell");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", "=".repeat(50));
        println!("{}", "SUBNET CALCULATOR".bold());
        println!("{}", "=".repeat(50));
        println!("1. Calculate Subnetting");
        println!("2. Show IP Class Information");
        println!("3. DNS Lookup");
        println!("4. Exit");

        let choice = match prompt(&mut lines, "\nEnter your choice (1-4): ")? {
            Some(line) => line,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                if calculate_subnetting(&mut lines)?.is_none() {
                    break;
                }
            }
            "2" => {
                if show_class_info(&mut lines)?.is_none() {
                    break;
                }
            }
            "3" => {
                if dns_lookup_menu(&mut lines)?.is_none() {
                    break;
                }
            }
            "4" => {
                println!("Goodbye!");
                break;
            }
            other => println!("Invalid choice {other:?}. Please select 1-4."),
        }
    }
    Ok(())
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

/// Print a prompt and read one trimmed line; `None` means stdin closed.
fn prompt(lines: &mut Lines, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn print_error(err: &dyn Error) {
    println!("\n{} {err}", "Error:".red());
}

fn calculate_subnetting(lines: &mut Lines) -> io::Result<Option<()>> {
    let address = match prompt(lines, "Enter an IP address (e.g., 192.168.1.0): ")? {
        Some(line) => line,
        None => return Ok(None),
    };
    let prefix_input = match prompt(lines, "Enter the new CIDR prefix (e.g., /26): ")? {
        Some(line) => line,
        None => return Ok(None),
    };

    let prefix = match parse_prefix_input(&prefix_input) {
        Ok(prefix) => prefix,
        Err(err) => {
            print_error(&err);
            return Ok(Some(()));
        }
    };
    match compute_subnetting(&address, prefix) {
        Ok(result) => print!("{}", terminal::render_report(&result)),
        Err(err) => print_error(&err),
    }
    Ok(Some(()))
}

fn show_class_info(lines: &mut Lines) -> io::Result<Option<()>> {
    let address = match prompt(lines, "Enter an IP address: ")? {
        Some(line) => line,
        None => return Ok(None),
    };

    match classify_address(&address) {
        Ok(class) => match class.default_mask() {
            Some(mask) => {
                println!("\nIP Address: {}", address.trim());
                println!("Class: {class}");
                println!("Default Subnet Mask: {} (/{})", mask, mask.prefix());
            }
            None => println!("\nIP Class: {class}"),
        },
        Err(err) => print_error(&err),
    }
    Ok(Some(()))
}

fn dns_lookup_menu(lines: &mut Lines) -> io::Result<Option<()>> {
    println!("\n1. IP to hostname");
    println!("2. Hostname to IP");
    let choice = match prompt(lines, "Enter your choice (1/2): ")? {
        Some(line) => line,
        None => return Ok(None),
    };

    match choice.as_str() {
        "1" => {
            let input = match prompt(lines, "Enter IP address: ")? {
                Some(line) => line,
                None => return Ok(None),
            };
            match input.parse::<IpAddr>() {
                Ok(addr) => match lookup::resolve_addr(addr) {
                    Ok(hostname) => println!("Hostname: {hostname}"),
                    Err(err) => print_error(&err),
                },
                Err(err) => print_error(&err),
            }
        }
        "2" => {
            let hostname = match prompt(lines, "Enter hostname: ")? {
                Some(line) => line,
                None => return Ok(None),
            };
            match lookup::resolve_host(&hostname) {
                Ok(addrs) => {
                    for addr in addrs {
                        println!("IP: {addr}");
                    }
                }
                Err(err) => print_error(&err),
            }
        }
        other => println!("Invalid choice {other:?}."),
    }
    Ok(Some(()))
}
