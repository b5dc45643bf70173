//! Namespaces command implementation

use anyhow::{Result, bail};
use nsjoin_core::TargetPid;
use nsjoin_namespace::NamespaceInfo;

pub fn execute(pid: Option<&str>) -> Result<()> {
    let target = pid.map_or_else(|| TargetPid::from("self"), TargetPid::from);

    let ns_info = NamespaceInfo::for_pid(&target);
    if ns_info.is_empty() {
        bail!("Failed to get namespace information for PID {target}");
    }

    println!("\nNamespace Information for PID {target}");
    println!("{:-<60}", "");
    print!("{ns_info}");

    if pid.is_some() {
        let shared = ns_info.shared_with(&NamespaceInfo::current());
        let names: Vec<_> = shared.iter().map(|k| k.proc_name()).collect();
        if names.is_empty() {
            println!("\nShares no namespaces with this process");
        } else {
            println!("\nShared with this process: {}", names.join(", "));
        }
    }

    Ok(())
}
