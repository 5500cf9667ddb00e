//! Describe how a BMC address would be driven.
//!
//! Parses a BMC address, looks up its driver and prints the interfaces,
//! capabilities and driver info a provisioning engine would use.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example describe -- --address idrac-virtualmedia+https://10.0.0.5/redfish/v1/Systems/System.Embedded.1
//! ```
//!
//! With BIOS settings and certificate verification disabled:
//! ```bash
//! cargo run --example describe -- --address irmc://10.0.0.6 --insecure --virtualization on --smt off
//! ```

use std::env;

use bmc_access::{AccessDetailsBuilder, Credentials, FirmwareConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let details = AccessDetailsBuilder::new(&args.address)
        .disable_certificate_verification(args.insecure)
        .build()?;

    println!("BMC type:   {}", details.bmc_type());
    println!("Driver:     {}", details.driver());
    println!("{}", "-".repeat(50));
    for (name, value) in [
        ("bios", details.bios_interface()),
        ("boot", details.boot_interface()),
        ("firmware", details.firmware_interface()),
        ("management", details.management_interface()),
        ("power", details.power_interface()),
        ("raid", details.raid_interface()),
        ("vendor", details.vendor_interface()),
    ] {
        let value = if value.is_empty() { "<default>" } else { value };
        println!("{:<12}{}", name, value);
    }
    println!("{}", "-".repeat(50));
    println!("Needs MAC:             {}", details.needs_mac());
    println!("Secure boot:           {}", details.supports_secure_boot());
    println!("ISO preprovisioning:   {}", details.supports_iso_preprovisioning_image());
    println!("Provisioning network:  {}", details.requires_provisioning_network());

    let creds = Credentials::new(&args.user, &args.password);
    creds.validate()?;
    let mut driver_info = details.driver_info(&creds);
    for (key, value) in driver_info.iter_mut() {
        if key.ends_with("_password") {
            *value = serde_json::Value::from("******");
        }
    }
    println!("\nDriver info:");
    println!("{}", serde_json::to_string_pretty(&driver_info)?);

    let config = args.firmware_config();
    if config != FirmwareConfig::default() {
        match details.build_bios_settings(Some(&config)) {
            Ok(settings) => {
                println!("\nBIOS settings:");
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
            Err(e) => eprintln!("\nBIOS settings rejected: {}", e),
        }
    }

    Ok(())
}

/// Simple argument parser (avoiding external dependencies)
struct Args {
    address: String,
    user: String,
    password: String,
    insecure: bool,
    virtualization: Option<bool>,
    smt: Option<bool>,
    sriov: Option<bool>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut address = String::new();
        let mut user = "admin".to_string();
        let mut password = "password".to_string();
        let mut insecure = false;
        let mut virtualization = None;
        let mut smt = None;
        let mut sriov = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--address" | "-a" => {
                    i += 1;
                    if i < args.len() {
                        address = args[i].clone();
                    }
                }
                "--user" | "-u" => {
                    i += 1;
                    if i < args.len() {
                        user = args[i].clone();
                    }
                }
                "--password" | "-P" => {
                    i += 1;
                    if i < args.len() {
                        password = args[i].clone();
                    }
                }
                "--insecure" | "-k" => insecure = true,
                "--virtualization" => {
                    i += 1;
                    virtualization = args.get(i).and_then(|v| parse_switch(v));
                }
                "--smt" => {
                    i += 1;
                    smt = args.get(i).and_then(|v| parse_switch(v));
                }
                "--sriov" => {
                    i += 1;
                    sriov = args.get(i).and_then(|v| parse_switch(v));
                }
                "--help" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                _ => {
                    eprintln!("Unknown argument: {}", args[i]);
                }
            }
            i += 1;
        }

        if address.is_empty() {
            Self::print_help();
            std::process::exit(1);
        }

        Self {
            address,
            user,
            password,
            insecure,
            virtualization,
            smt,
            sriov,
        }
    }

    fn firmware_config(&self) -> FirmwareConfig {
        FirmwareConfig {
            virtualization_enabled: self.virtualization,
            simultaneous_multithreading_enabled: self.smt,
            sriov_enabled: self.sriov,
        }
    }

    fn print_help() {
        println!(
            r#"bmc-access describe example

USAGE:
    cargo run --example describe -- --address <ADDRESS> [OPTIONS]

OPTIONS:
    -a, --address <ADDRESS>      BMC address (required)
    -u, --user <USER>            BMC username [default: admin]
    -P, --password <PASS>        BMC password [default: password]
    -k, --insecure               Disable certificate verification
    --virtualization <on|off>    Request CPU virtualization setting
    --smt <on|off>               Request simultaneous multithreading setting
    --sriov <on|off>             Request SR-IOV setting
    --help                       Print this help message

EXAMPLES:
    # Bare host, defaults to IPMI
    cargo run --example describe -- --address 192.168.1.1:623

    # Redfish with a system ID over plain HTTP
    cargo run --example describe -- --address redfish+http://192.168.1.1/redfish/v1/Systems/1
"#
        );
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value {
        "on" | "true" | "enabled" => Some(true),
        "off" | "false" | "disabled" => Some(false),
        _ => None,
    }
}
