// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use anyhow::{Context as _, Result};
use clap::Parser;
use log::debug;
use nix::errno::Errno;
use xnucompat::{
    cstr::str_from_fixed,
    guard::{is_affected_syscall_against, xnu_version},
    kernel_types::Utsname,
    version::is_at_or_below_threshold,
    HostUname, UnameSource as _, VersionTuple, BUGGY_XNU_VERSION,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Newest xnu version considered buggy
    #[arg(long, default_value_t = VersionTuple::from(&BUGGY_XNU_VERSION[..]))]
    threshold: VersionTuple,

    /// Check this kernel version string instead of the running kernel's
    #[arg(long = "uname-version", value_name = "TEXT")]
    uname_version: Option<String>,

    /// Syscall name(s) to check (can be repeated or comma-separated)
    #[arg(short = 's', long = "syscall", value_delimiter = ',', action = clap::ArgAction::Append)]
    syscalls: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let uts = match &args.uname_version {
        Some(text) => Utsname::from_version(text),
        None => HostUname.uname().context("uname failed")?,
    };

    for (field, value) in [
        ("sysname", &uts.sysname),
        ("release", &uts.release),
        ("version", &uts.version),
        ("machine", &uts.machine),
    ] {
        let value = str_from_fixed(value);
        if !value.is_empty() {
            println!("{field}: {value}");
        }
    }

    let threshold = args.threshold.as_slice();

    // A verdict is still printed for every syscall that does not need the
    // kernel version; the exit status reports whether any check failed.
    let mut failed = false;

    match xnu_version(&uts) {
        Ok(xnu) => {
            let buggy = is_at_or_below_threshold(threshold, xnu.as_slice());
            println!("xnu: {xnu}");
            println!("threshold: {}", args.threshold);
            println!("buggy: {}", if buggy { "yes" } else { "no" });
        }
        Err(e) => {
            eprintln!("no xnu version in the kernel version string: {e}");
            failed = true;
        }
    }

    let source = || Ok::<_, Errno>(uts);
    for name in &args.syscalls {
        match is_affected_syscall_against(name, &source, threshold) {
            Ok(affected) => {
                debug!("{name} affected: {affected}");
                println!(
                    "{name}: {}",
                    if affected { "affected" } else { "not affected" }
                );
            }
            Err(e) => {
                eprintln!("{name}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
